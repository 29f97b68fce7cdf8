use std::sync::LazyLock;

use crate::style::{MediaQuery, Style, StyleSheet};

pub static CONTACT: LazyLock<StyleSheet> = LazyLock::new(|| {
    StyleSheet::new()
        .slot("section", super::section("80vh", "#111827"))
        .slot("container", super::centered_container("1100px"))
        .slot("h2", super::heading("16px"))
        .slot("p", super::subtitle())
        .slot(
            "content-wrapper",
            [
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "40px"),
                ("background-color", "#1f2937"),
                ("border-radius", "12px"),
                ("padding", "32px"),
                ("box-shadow", "0 4px 10px rgba(0, 0, 0, 0.2)"),
            ],
        )
        .slot(
            "form",
            [
                ("flex", "2"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "20px"),
                ("text-align", "left"),
            ],
        )
        .slot("input", field())
        .slot(
            "textarea",
            field()
                .set("min-height", "150px")
                .set("font-family", "sans-serif")
                .set("resize", "vertical"),
        )
        .slot("field:focus", [("border-color", "#2563eb")])
        .slot(
            "label",
            [
                ("font-size", "0.9rem"),
                ("font-weight", "600"),
                ("color", "#d1d5db"),
                ("margin-bottom", "-12px"),
            ],
        )
        .slot(
            "button",
            [
                ("padding", "14px 28px"),
                ("background-color", "#2563eb"),
                ("color", "white"),
                ("font-weight", "600"),
                ("border-radius", "8px"),
                ("box-shadow", "0 4px 14px 0 rgba(0, 0, 0, 0.2)"),
                ("border", "none"),
                ("cursor", "pointer"),
                ("transition", "all 0.3s ease"),
                ("font-size", "1.1rem"),
                ("width", "100%"),
                ("transform", "scale(1)"),
            ],
        )
        .slot(
            "button:hover",
            [("background-color", "#1d4ed8"), ("transform", "scale(1.02)")],
        )
        .slot(
            "contact-info",
            [
                ("flex", "1"),
                ("text-align", "left"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "20px"),
            ],
        )
        .slot(
            "info-card",
            [
                ("background-color", "#374151"),
                ("padding", "20px"),
                ("border-radius", "8px"),
                ("display", "flex"),
                ("align-items", "center"),
                ("gap", "16px"),
            ],
        )
        .slot("info-icon", [("font-size", "1.5rem"), ("color", "#2563eb")])
        .slot(
            "info-text",
            [("display", "flex"), ("flex-direction", "column")],
        )
        .slot(
            "info-title",
            [
                ("font-size", "1rem"),
                ("font-weight", "600"),
                ("color", "#ffffff"),
            ],
        )
        .slot(
            "info-link",
            [
                ("font-size", "0.9rem"),
                ("color", "#d1d5db"),
                ("text-decoration", "none"),
                ("transition", "color 0.3s ease"),
                ("word-break", "break-all"),
            ],
        )
        .slot(
            "info-link:hover",
            [("color", "#ffffff"), ("text-decoration", "underline")],
        )
        .media(
            MediaQuery::Wide,
            "content-wrapper",
            [("flex-direction", "row"), ("padding", "48px")],
        )
        .media(
            MediaQuery::Wide,
            "button",
            [("width", "auto"), ("align-self", "flex-start")],
        )
});

fn field() -> Style {
    Style::from([
        ("width", "100%"),
        ("padding", "14px"),
        ("font-size", "1rem"),
        ("background-color", "#374151"),
        ("color", "#f9fafb"),
        ("border", "2px solid #4b5563"),
        ("border-radius", "8px"),
        ("box-sizing", "border-box"),
        ("outline", "none"),
        ("transition", "border-color 0.3s ease"),
    ])
}
