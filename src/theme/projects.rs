use std::sync::LazyLock;

use crate::style::StyleSheet;

pub static PROJECTS: LazyLock<StyleSheet> = LazyLock::new(|| {
    StyleSheet::new()
        .slot("section", super::section("90vh", "#111827"))
        .slot("container", super::centered_container("1200px"))
        .slot("h2", super::heading("16px"))
        .slot("p", super::subtitle())
        .slot(
            "projects-grid",
            [
                ("display", "flex"),
                ("flex-wrap", "wrap"),
                ("gap", "24px"),
                ("justify-content", "center"),
            ],
        )
        .slot(
            "project-card",
            [
                ("background-color", "#1f2937"),
                ("color", "#f9fafb"),
                ("border-radius", "12px"),
                ("box-shadow", "0 4px 10px rgba(0, 0, 0, 0.2)"),
                ("transition", "all 0.3s ease"),
                ("max-width", "380px"),
                ("width", "100%"),
                ("overflow", "hidden"),
                ("display", "flex"),
                ("flex-direction", "column"),
            ],
        )
        .slot(
            "project-card:hover",
            [
                ("transform", "translateY(-8px)"),
                ("box-shadow", "0 12px 20px rgba(0, 0, 0, 0.3)"),
            ],
        )
        .slot(
            "project-image",
            [
                ("width", "100%"),
                ("height", "220px"),
                ("object-fit", "cover"),
                ("background-color", "#374151"),
            ],
        )
        .slot(
            "card-content",
            [
                ("padding", "24px"),
                ("text-align", "left"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("flex-grow", "1"),
            ],
        )
        .slot(
            "h3",
            [
                ("font-size", "1.4rem"),
                ("font-weight", "600"),
                ("color", "#ffffff"),
                ("margin-bottom", "12px"),
            ],
        )
        .slot(
            "description",
            [
                ("font-size", "0.95rem"),
                ("color", "#d1d5db"),
                ("line-height", "1.6"),
                ("margin-bottom", "16px"),
                ("flex-grow", "1"),
            ],
        )
        .slot(
            "tags",
            [
                ("display", "flex"),
                ("flex-wrap", "wrap"),
                ("gap", "8px"),
                ("margin-bottom", "20px"),
            ],
        )
        .slot(
            "tag",
            [
                ("background-color", "#374151"),
                ("color", "#e5e7eb"),
                ("padding", "4px 12px"),
                ("border-radius", "16px"),
                ("font-size", "0.8rem"),
                ("font-weight", "500"),
            ],
        )
        .slot(
            "links",
            [("display", "flex"), ("gap", "12px"), ("margin-top", "auto")],
        )
        .slot(
            "project-link",
            [
                ("color", "#ffffff"),
                ("background-color", "#2563eb"),
                ("padding", "8px 16px"),
                ("border-radius", "8px"),
                ("text-decoration", "none"),
                ("font-weight", "600"),
                ("font-size", "0.9rem"),
                ("text-align", "center"),
                ("transition", "background-color 0.3s ease"),
                ("flex", "1"),
            ],
        )
        .slot("project-link:hover", [("background-color", "#1d4ed8")])
});
