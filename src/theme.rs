//! Style tables for every section, keyed by slot name.

mod about;
mod academics;
mod contact;
mod footer;
mod home;
mod navbar;
mod projects;
mod skills;

pub use about::ABOUT;
pub use academics::ACADEMICS;
pub use contact::CONTACT;
pub use footer::FOOTER;
pub use home::HOME;
pub use navbar::NAVBAR;
pub use projects::PROJECTS;
pub use skills::SKILLS;

use std::sync::LazyLock;

use crate::style::{Style, StyleSheet};

pub fn sheets() -> [(&'static str, &'static LazyLock<StyleSheet>); 8] {
    [
        ("home", &HOME),
        ("about", &ABOUT),
        ("skills", &SKILLS),
        ("projects", &PROJECTS),
        ("academics", &ACADEMICS),
        ("contact", &CONTACT),
        ("footer", &FOOTER),
        ("navbar", &NAVBAR),
    ]
}

/// Full-width dark section block.
fn section(min_height: &'static str, background: &'static str) -> Style {
    Style::from([
        ("min-height", min_height),
        ("display", "flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("background-color", background),
        ("color", "#d1d5db"),
        ("font-family", "sans-serif"),
        ("padding", "64px 32px"),
    ])
}

/// Underlined section title.
fn heading(margin_bottom: &'static str) -> Style {
    Style::from([
        ("font-size", "calc(1.8rem + 1.5vw)"),
        ("font-weight", "700"),
        ("margin-bottom", margin_bottom),
        ("color", "#ffffff"),
        ("border-bottom", "3px solid #2563eb"),
        ("padding-bottom", "8px"),
        ("display", "inline-block"),
    ])
}

fn subtitle() -> Style {
    Style::from([
        ("font-size", "calc(1rem + 0.2vw)"),
        ("color", "#d1d5db"),
        ("max-width", "700px"),
        ("margin", "0 auto 48px auto"),
        ("line-height", "1.6"),
    ])
}

fn centered_container(max_width: &'static str) -> Style {
    Style::from([
        ("max-width", max_width),
        ("width", "100%"),
        ("text-align", "center"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ViewportClass;

    #[test]
    fn test_all_sheets_validate() {
        for (name, sheet) in sheets() {
            assert_eq!(sheet.validate(), Ok(()), "{name} sheet is malformed");
        }
    }

    #[test]
    fn test_hover_slots_exist() {
        let hover_slots = [
            (&HOME, "button:hover"),
            (&HOME, "button-secondary:hover"),
            (&HOME, "arrow:hover"),
            (&HOME, "social-link:hover"),
            (&SKILLS, "skill-card:hover"),
            (&PROJECTS, "project-card:hover"),
            (&PROJECTS, "project-link:hover"),
            (&CONTACT, "button:hover"),
            (&CONTACT, "info-link:hover"),
            (&CONTACT, "field:focus"),
            (&FOOTER, "social-link:hover"),
            (&FOOTER, "back-to-top:hover"),
            (&NAVBAR, "nav-link:hover"),
            (&NAVBAR, "nav:scrolled"),
            (&NAVBAR, "mobile-menu:open"),
        ];
        for (sheet, slot) in hover_slots {
            assert!(sheet.get(slot).is_some(), "missing {slot}");
        }
    }

    #[test]
    fn test_navbar_breakpoint() {
        let wide = NAVBAR.resolve(ViewportClass::Above, "nav-links", &[]);
        let narrow = NAVBAR.resolve(ViewportClass::Below, "nav-links", &[]);
        assert_eq!(wide.get("display"), Some("flex"));
        assert_eq!(narrow.get("display"), Some("none"));

        let icon = NAVBAR.resolve(ViewportClass::At, "menu-icon", &[]);
        assert_eq!(icon.get("display"), Some("flex"));
    }

    #[test]
    fn test_navbar_scrolled_background() {
        let plain = NAVBAR.select("nav").css(ViewportClass::Above);
        let scrolled = NAVBAR
            .select("nav")
            .with_if(true, "nav:scrolled")
            .resolve(ViewportClass::Above);
        assert!(plain.contains("background-color: transparent"));
        assert_eq!(
            scrolled.get("background-color"),
            Some("rgba(31, 41, 55, 0.9)")
        );
        assert_eq!(scrolled.get("backdrop-filter"), Some("blur(10px)"));
    }

    #[test]
    fn test_mobile_menu_slides_in_when_open() {
        let closed = NAVBAR.resolve(ViewportClass::Below, "mobile-menu", &[]);
        let open = NAVBAR.resolve(ViewportClass::Below, "mobile-menu", &["mobile-menu:open"]);
        assert_eq!(closed.get("transform"), Some("translateX(100%)"));
        assert_eq!(open.get("transform"), Some("translateX(0)"));
    }

    #[test]
    fn test_academics_timeline_item_layout() {
        let right_wide = ACADEMICS.resolve(
            ViewportClass::Above,
            "timeline-item",
            &["timeline-item-right"],
        );
        assert_eq!(right_wide.get("left"), Some("50%"));
        assert_eq!(right_wide.get("width"), Some("50%"));

        let left_narrow = ACADEMICS.resolve(
            ViewportClass::Below,
            "timeline-item",
            &["timeline-item-left"],
        );
        assert_eq!(left_narrow.get("width"), Some("100%"));
        assert_eq!(left_narrow.get("text-align"), Some("left"));
        assert_eq!(left_narrow.get("padding-left"), Some("60px"));
    }

    #[test]
    fn test_contact_layout_switches_at_breakpoint() {
        let narrow = CONTACT.resolve(ViewportClass::Below, "content-wrapper", &[]);
        let wide = CONTACT.resolve(ViewportClass::At, "content-wrapper", &[]);
        assert_eq!(narrow.get("flex-direction"), Some("column"));
        assert_eq!(wide.get("flex-direction"), Some("row"));
        assert_eq!(wide.get("padding"), Some("48px"));
    }

    #[test]
    fn test_about_layout_switches_at_breakpoint() {
        let narrow = ABOUT.resolve(ViewportClass::Below, "content-area", &[]);
        let wide = ABOUT.resolve(ViewportClass::Above, "content-area", &[]);
        assert_eq!(narrow.get("text-align"), Some("center"));
        assert_eq!(wide.get("text-align"), Some("left"));
    }
}
