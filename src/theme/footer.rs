use std::sync::LazyLock;

use crate::style::StyleSheet;

pub static FOOTER: LazyLock<StyleSheet> = LazyLock::new(|| {
    StyleSheet::new()
        .slot(
            "footer",
            [
                ("background-color", "#111827"),
                ("color", "#9ca3af"),
                ("font-family", "sans-serif"),
                ("padding", "48px 32px"),
                ("border-top", "1px solid #374151"),
                ("text-align", "center"),
            ],
        )
        .slot(
            "container",
            [
                ("max-width", "1100px"),
                ("margin", "0 auto"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("align-items", "center"),
                ("gap", "24px"),
            ],
        )
        .slot(
            "social-links",
            [("display", "flex"), ("gap", "20px"), ("align-items", "center")],
        )
        .slot(
            "social-link",
            [
                ("color", "#d1d5db"),
                ("text-decoration", "none"),
                ("font-size", "1.5rem"),
                ("line-height", "1"),
                ("transition", "all 0.3s ease"),
                ("display", "inline-block"),
                ("transform", "scale(1)"),
            ],
        )
        .slot(
            "social-link:hover",
            [("color", "#ffffff"), ("transform", "scale(1.1)")],
        )
        .slot(
            "svg-icon",
            [
                ("width", "1.5rem"),
                ("height", "1.5rem"),
                ("fill", "currentColor"),
            ],
        )
        .slot("copyright", [("font-size", "0.9rem")])
        .slot(
            "back-to-top",
            [
                ("color", "#d1d5db"),
                ("text-decoration", "none"),
                ("font-weight", "500"),
                ("font-size", "0.9rem"),
                ("transition", "color 0.3s ease"),
            ],
        )
        .slot(
            "back-to-top:hover",
            [("color", "#ffffff"), ("text-decoration", "underline")],
        )
});
