use std::sync::LazyLock;

use crate::style::StyleSheet;

pub static SKILLS: LazyLock<StyleSheet> = LazyLock::new(|| {
    StyleSheet::new()
        .slot("section", super::section("90vh", "#1f2937"))
        .slot("container", super::centered_container("1100px"))
        .slot("h2", super::heading("16px"))
        .slot("p", super::subtitle())
        .slot(
            "categories",
            [
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "40px"),
            ],
        )
        .slot(
            "h3",
            [
                ("font-size", "calc(1.3rem + 0.5vw)"),
                ("font-weight", "600"),
                ("color", "#ffffff"),
                ("margin-bottom", "24px"),
                ("text-align", "left"),
                ("border-left", "4px solid #2563eb"),
                ("padding-left", "12px"),
            ],
        )
        .slot(
            "skills-grid",
            [
                ("display", "flex"),
                ("flex-wrap", "wrap"),
                ("gap", "16px"),
                ("justify-content", "center"),
            ],
        )
        .slot(
            "skill-card",
            [
                ("background-color", "#374151"),
                ("color", "#f9fafb"),
                ("padding", "20px"),
                ("border-radius", "12px"),
                ("text-align", "center"),
                ("box-shadow", "0 4px 10px rgba(0, 0, 0, 0.2)"),
                ("transition", "all 0.3s ease"),
                ("flex", "1"),
                ("min-width", "100px"),
                ("max-width", "120px"),
                ("min-height", "120px"),
                ("display", "flex"),
                ("flex-direction", "column"),
            ],
        )
        .slot(
            "skill-card:hover",
            [
                ("transform", "translateY(-8px)"),
                ("box-shadow", "0 12px 20px rgba(0, 0, 0, 0.3)"),
                ("background-color", "#4b5563"),
            ],
        )
        .slot(
            "skill-icon",
            [
                ("font-size", "2.5rem"),
                ("margin-bottom", "16px"),
                ("color", "#2563eb"),
            ],
        )
        .slot(
            "skill-name",
            [
                ("font-size", "1.1rem"),
                ("font-weight", "600"),
                ("margin-bottom", "16px"),
            ],
        )
        .slot("progress-wrapper", [("margin-top", "auto"), ("width", "100%")])
        .slot(
            "progress-bar",
            [
                ("height", "8px"),
                ("width", "100%"),
                ("background-color", "#4b5563"),
                ("border-radius", "4px"),
                ("overflow", "hidden"),
            ],
        )
        .slot(
            "progress-fill",
            [
                ("height", "100%"),
                ("background-color", "#2563eb"),
                ("border-radius", "4px"),
                ("transition", "width 0.5s ease-in-out"),
            ],
        )
        .slot(
            "percentage",
            [
                ("font-size", "0.85rem"),
                ("color", "#d1d5db"),
                ("font-weight", "500"),
                ("margin-top", "8px"),
            ],
        )
});
