use std::sync::LazyLock;

use crate::style::{MediaQuery, StyleSheet};

pub static ABOUT: LazyLock<StyleSheet> = LazyLock::new(|| {
    StyleSheet::new()
        .slot("section", super::section("90vh", "rgba(15, 16, 15, 0.93)"))
        .slot(
            "main-container",
            [
                ("display", "flex"),
                ("flex-direction", "column"),
                ("align-items", "center"),
                ("gap", "40px"),
                ("max-width", "1100px"),
                ("width", "100%"),
            ],
        )
        .slot("content-area", [("flex", "1"), ("text-align", "center")])
        .slot("h2", super::heading("24px"))
        .slot(
            "p",
            [
                ("font-size", "calc(1rem + 0.2vw)"),
                ("color", "#d1d5db"),
                ("line-height", "1.7"),
                ("max-width", "650px"),
                ("margin", "0 auto 20px auto"),
            ],
        )
        .slot(
            "h3",
            [
                ("font-size", "calc(1.2rem + 0.5vw)"),
                ("font-weight", "600"),
                ("color", "#ffffff"),
                ("margin-top", "32px"),
                ("margin-bottom", "16px"),
            ],
        )
        .slot(
            "skills-container",
            [
                ("display", "flex"),
                ("flex-wrap", "wrap"),
                ("gap", "12px"),
                ("justify-content", "center"),
            ],
        )
        .slot(
            "skill",
            [
                ("background-color", "#374151"),
                ("color", "#f9fafb"),
                ("padding", "8px 16px"),
                ("border-radius", "20px"),
                ("font-weight", "500"),
                ("font-size", "0.95rem"),
            ],
        )
        .slot(
            "image-wrapper",
            [
                ("flex-shrink", "0"),
                ("width", "100%"),
                ("max-width", "350px"),
                ("display", "flex"),
                ("justify-content", "center"),
                ("align-items", "center"),
            ],
        )
        .slot(
            "profile-image",
            [
                ("width", "300px"),
                ("height", "300px"),
                ("border-radius", "50%"),
                ("border", "4px solid #2563eb"),
                ("box-shadow", "0 10px 25px -5px rgba(0, 0, 0, 0.3)"),
                ("object-fit", "cover"),
            ],
        )
        .media(MediaQuery::Wide, "main-container", [("flex-direction", "row")])
        .media(MediaQuery::Wide, "content-area", [("text-align", "left")])
        .media(MediaQuery::Wide, "p", [("margin", "0 0 20px 0")])
        .media(
            MediaQuery::Wide,
            "skills-container",
            [("justify-content", "flex-start")],
        )
});
