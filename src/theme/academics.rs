use std::sync::LazyLock;

use crate::style::{MediaQuery, StyleSheet};

pub static ACADEMICS: LazyLock<StyleSheet> = LazyLock::new(|| {
    StyleSheet::new()
        .slot("section", super::section("50vh", "#111827"))
        .slot("container", super::centered_container("1000px"))
        .slot("h2", super::heading("48px"))
        .slot(
            "timeline",
            [
                ("position", "relative"),
                ("max-width", "800px"),
                ("margin", "0 auto"),
            ],
        )
        // drawn as its own element, inline styles have no ::before
        .slot(
            "timeline-line",
            [
                ("position", "absolute"),
                ("left", "50%"),
                ("top", "0"),
                ("bottom", "0"),
                ("width", "4px"),
                ("background-color", "#374151"),
                ("margin-left", "-2px"),
            ],
        )
        .slot(
            "timeline-item",
            [
                ("padding", "20px 40px"),
                ("position", "relative"),
                ("width", "50%"),
                ("box-sizing", "border-box"),
            ],
        )
        .slot(
            "timeline-item-left",
            [
                ("left", "0"),
                ("text-align", "right"),
                ("padding-right", "50px"),
            ],
        )
        .slot(
            "timeline-item-right",
            [
                ("left", "50%"),
                ("text-align", "left"),
                ("padding-left", "50px"),
            ],
        )
        .slot(
            "timeline-content",
            [
                ("padding", "24px"),
                ("background-color", "#1f2937"),
                ("border-radius", "12px"),
                ("box-shadow", "0 4px 10px rgba(0, 0, 0, 0.2)"),
                ("position", "relative"),
                ("transition", "transform 0.3s ease"),
            ],
        )
        .slot(
            "timeline-dot",
            [
                ("position", "absolute"),
                ("top", "30px"),
                ("width", "16px"),
                ("height", "16px"),
                ("border-radius", "50%"),
                ("background-color", "#2563eb"),
                ("border", "3px solid #111827"),
                ("z-index", "1"),
            ],
        )
        .slot("timeline-dot-left", [("right", "-8px")])
        .slot("timeline-dot-right", [("left", "-8px")])
        .slot(
            "h3",
            [
                ("font-size", "1.4rem"),
                ("font-weight", "600"),
                ("color", "#ffffff"),
                ("margin-bottom", "8px"),
            ],
        )
        .slot(
            "h4",
            [
                ("font-size", "1.1rem"),
                ("font-weight", "500"),
                ("color", "#2563eb"),
                ("margin-bottom", "12px"),
            ],
        )
        .slot(
            "date",
            [
                ("font-size", "0.95rem"),
                ("color", "#9ca3af"),
                ("margin-bottom", "12px"),
            ],
        )
        .slot(
            "description",
            [
                ("font-size", "0.95rem"),
                ("color", "#d1d5db"),
                ("line-height", "1.6"),
            ],
        )
        .media(
            MediaQuery::Narrow,
            "timeline-line",
            [("left", "20px"), ("margin-left", "0")],
        )
        .media(
            MediaQuery::Narrow,
            "timeline-item",
            [
                ("width", "100%"),
                ("padding-left", "60px"),
                ("padding-right", "0"),
                ("text-align", "left"),
            ],
        )
        .media(
            MediaQuery::Narrow,
            "timeline-item-left",
            [
                ("left", "0"),
                ("text-align", "left"),
                ("padding-left", "60px"),
                ("padding-right", "0"),
            ],
        )
        .media(
            MediaQuery::Narrow,
            "timeline-item-right",
            [
                ("left", "0"),
                ("text-align", "left"),
                ("padding-left", "60px"),
            ],
        )
        .media(MediaQuery::Narrow, "timeline-dot", [("left", "12px")])
});
