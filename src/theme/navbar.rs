use std::sync::LazyLock;

use crate::style::{MediaQuery, StyleSheet};

pub static NAVBAR: LazyLock<StyleSheet> = LazyLock::new(|| {
    StyleSheet::new()
        .slot(
            "nav",
            [
                ("position", "fixed"),
                ("top", "0"),
                ("left", "0"),
                ("width", "100%"),
                ("display", "flex"),
                ("justify-content", "space-between"),
                ("align-items", "center"),
                ("padding", "16px 32px"),
                ("background-color", "transparent"),
                ("backdrop-filter", "none"),
                ("z-index", "1000"),
                ("transition", "background-color 0.3s ease"),
                ("box-sizing", "border-box"),
            ],
        )
        .slot(
            "nav:scrolled",
            [
                ("background-color", "rgba(31, 41, 55, 0.9)"),
                ("backdrop-filter", "blur(10px)"),
            ],
        )
        .slot(
            "logo",
            [
                ("font-size", "1.8rem"),
                ("font-weight", "700"),
                ("color", "white"),
                ("text-decoration", "none"),
                ("font-family", "sans-serif"),
            ],
        )
        .slot("nav-links", [("display", "flex"), ("gap", "24px")])
        .slot(
            "nav-link",
            [
                ("color", "#d1d5db"),
                ("text-decoration", "none"),
                ("font-weight", "500"),
                ("font-size", "1rem"),
                ("font-family", "sans-serif"),
                ("transition", "color 0.3s ease"),
            ],
        )
        .slot("nav-link:hover", [("color", "white")])
        .slot(
            "menu-icon",
            [
                ("display", "none"),
                ("flex-direction", "column"),
                ("gap", "4px"),
                ("cursor", "pointer"),
                ("background", "none"),
                ("border", "none"),
                ("padding", "0"),
            ],
        )
        .slot(
            "hamburger-bar",
            [
                ("width", "25px"),
                ("height", "3px"),
                ("background-color", "white"),
                ("border-radius", "2px"),
                ("transition", "transform 0.3s ease, opacity 0.3s ease"),
            ],
        )
        .slot(
            "hamburger-bar-top:open",
            [("transform", "translateY(7px) rotate(45deg)")],
        )
        .slot("hamburger-bar-middle:open", [("opacity", "0")])
        .slot(
            "hamburger-bar-bottom:open",
            [("transform", "translateY(-7px) rotate(-45deg)")],
        )
        .slot(
            "mobile-menu",
            [
                ("position", "fixed"),
                ("top", "0"),
                ("left", "0"),
                ("width", "100%"),
                ("height", "100%"),
                ("background-color", "#1f2937"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("align-items", "center"),
                ("justify-content", "center"),
                ("gap", "32px"),
                ("z-index", "999"),
                ("transition", "transform 0.3s ease-in-out"),
                ("transform", "translateX(100%)"),
            ],
        )
        .slot("mobile-menu:open", [("transform", "translateX(0)")])
        .slot(
            "mobile-nav-link",
            [
                ("color", "white"),
                ("text-decoration", "none"),
                ("font-size", "2rem"),
                ("font-weight", "600"),
                ("font-family", "sans-serif"),
            ],
        )
        .slot(
            "close-icon",
            [
                ("position", "absolute"),
                ("top", "24px"),
                ("right", "32px"),
                ("color", "white"),
                ("font-size", "2.5rem"),
                ("cursor", "pointer"),
                ("background", "none"),
                ("border", "none"),
            ],
        )
        .media(MediaQuery::Narrow, "nav-links", [("display", "none")])
        .media(MediaQuery::Narrow, "menu-icon", [("display", "flex")])
});
