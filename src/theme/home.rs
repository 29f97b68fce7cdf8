use std::sync::LazyLock;

use crate::style::{Style, StyleSheet};

pub static HOME: LazyLock<StyleSheet> = LazyLock::new(|| {
    StyleSheet::new()
        .slot(
            "section",
            super::section("60vh", "rgba(15, 16, 15, 0.93)")
                .set("position", "relative")
                .set("overflow", "hidden")
                .set("color", "white"),
        )
        .slot(
            "content",
            [
                ("position", "relative"),
                ("z-index", "10"),
                ("text-align", "center"),
                ("padding", "32px"),
                ("max-width", "800px"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("align-items", "center"),
                ("justify-content", "center"),
                ("gap", "24px"),
            ],
        )
        .slot(
            "image-container",
            [("display", "flex"), ("justify-content", "center")],
        )
        .slot(
            "profile-image",
            [
                ("width", "200px"),
                ("height", "200px"),
                ("border-radius", "50%"),
                ("object-fit", "cover"),
                ("border", "4px solid #374151"),
                ("box-shadow", "0 8px 16px rgba(0, 0, 0, 0.4)"),
            ],
        )
        .slot("text-container", [("text-align", "center")])
        .slot(
            "h1",
            [
                ("font-size", "calc(2rem + 2vw)"),
                ("font-weight", "800"),
                ("margin-bottom", "16px"),
                ("line-height", "1.2"),
            ],
        )
        .slot(
            "p",
            [
                ("font-size", "calc(1rem + 0.5vw)"),
                ("color", "#e5e7eb"),
                ("margin", "0 auto 32px auto"),
                ("max-width", "600px"),
            ],
        )
        .slot(
            "button-container",
            [
                ("display", "flex"),
                ("justify-content", "center"),
                ("gap", "16px"),
                ("flex-wrap", "wrap"),
            ],
        )
        .slot(
            "button",
            button()
                .set("background-color", "#2563eb")
                .set("box-shadow", "0 4px 14px 0 rgba(0, 0, 0, 0.2)")
                .set("border", "none"),
        )
        .slot(
            "button:hover",
            [("background-color", "#1d4ed8"), ("transform", "scale(1.02)")],
        )
        .slot(
            "button-secondary",
            button()
                .set("background-color", "transparent")
                .set("border", "2px solid white"),
        )
        .slot(
            "button-secondary:hover",
            [
                ("background-color", "white"),
                ("color", "#111827"),
                ("transform", "scale(1.02)"),
            ],
        )
        .slot(
            "arrow",
            [
                ("margin-left", "8px"),
                ("transition", "transform 0.3s ease"),
                ("transform", "translateX(0)"),
            ],
        )
        .slot("arrow:hover", [("transform", "translateX(4px)")])
        .slot(
            "social-links",
            [
                ("display", "flex"),
                ("justify-content", "center"),
                ("gap", "24px"),
                ("margin-top", "32px"),
            ],
        )
        .slot(
            "social-link",
            [
                ("color", "#e5e7eb"),
                ("text-decoration", "none"),
                ("font-size", "1.8rem"),
                ("line-height", "1"),
                ("transition", "all 0.3s ease"),
                ("display", "inline-block"),
                ("transform", "scale(1)"),
            ],
        )
        .slot(
            "social-link:hover",
            [("color", "white"), ("transform", "scale(1.1)")],
        )
        .slot(
            "svg-icon",
            [
                ("width", "1.8rem"),
                ("height", "1.8rem"),
                ("fill", "currentColor"),
            ],
        )
});

fn button() -> Style {
    Style::from([
        ("display", "inline-flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("padding", "16px 32px"),
        ("color", "white"),
        ("font-weight", "600"),
        ("border-radius", "8px"),
        ("cursor", "pointer"),
        ("transition", "all 0.3s ease"),
        ("font-size", "1.1rem"),
        ("text-decoration", "none"),
        ("transform", "scale(1)"),
    ])
}
