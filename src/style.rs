use std::{borrow::Cow, collections::HashMap, fmt};

use thiserror::Error;

use crate::viewport::ViewportClass;

/// An ordered set of CSS declarations. Setting a property that is already
/// present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    props: Vec<(&'static str, Cow<'static, str>)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, prop: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.insert(prop, value);
        self
    }

    pub fn insert(&mut self, prop: &'static str, value: impl Into<Cow<'static, str>>) {
        let value = value.into();
        match self.props.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.props.push((prop, value)),
        }
    }

    /// Applies every declaration of `other` on top of `self`.
    pub fn merge(&mut self, other: &Style) {
        for (prop, value) in &other.props {
            self.insert(*prop, value.clone());
        }
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.props.iter().map(|(p, v)| (*p, v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Inline declaration string, e.g. `display: flex; gap: 8px`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (prop, value)) in self.props.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{prop}: {value}")?;
        }
        Ok(())
    }
}

impl<const N: usize> From<[(&'static str, &'static str); N]> for Style {
    fn from(decls: [(&'static str, &'static str); N]) -> Self {
        decls
            .into_iter()
            .fold(Style::new(), |style, (prop, value)| style.set(prop, value))
    }
}

/// Breakpoint-conditional block of a style sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaQuery {
    /// `(max-width: 768px)`
    Narrow,
    /// `(min-width: 768px)`
    Wide,
}

impl MediaQuery {
    pub fn matches(self, class: ViewportClass) -> bool {
        match self {
            MediaQuery::Narrow => class.is_narrow(),
            MediaQuery::Wide => class.is_wide(),
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::viewport::BREAKPOINT_PX;
        match self {
            MediaQuery::Narrow => write!(f, "(max-width: {BREAKPOINT_PX}px)"),
            MediaQuery::Wide => write!(f, "(min-width: {BREAKPOINT_PX}px)"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("media slot `{slot}` under {query} has no base slot")]
    OrphanMediaSlot { query: MediaQuery, slot: &'static str },
    #[error("slot `{slot}` declares an empty property or value")]
    EmptyDeclaration { slot: &'static str },
}

#[derive(Debug, Clone)]
struct MediaBlock {
    query: MediaQuery,
    slots: HashMap<&'static str, Style>,
}

/// Declarative style table keyed by slot name.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    slots: HashMap<&'static str, Style>,
    media: Vec<MediaBlock>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(mut self, name: &'static str, style: impl Into<Style>) -> Self {
        self.slots.insert(name, style.into());
        self
    }

    pub fn media(mut self, query: MediaQuery, name: &'static str, style: impl Into<Style>) -> Self {
        let style = style.into();
        match self.media.iter_mut().find(|b| b.query == query) {
            Some(block) => {
                block.slots.insert(name, style);
            }
            None => self.media.push(MediaBlock {
                query,
                slots: HashMap::from([(name, style)]),
            }),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.slots.get(name)
    }

    /// Merges the base slot and then each override, in order. Every entry
    /// contributes its base declaration followed by the media variants that
    /// match `class`. Unknown overrides contribute nothing.
    pub fn resolve(&self, class: ViewportClass, base: &str, overrides: &[&str]) -> Style {
        if !self.slots.contains_key(base) {
            log::warn!("unknown style slot `{base}`");
        }
        let mut style = Style::new();
        for name in std::iter::once(base).chain(overrides.iter().copied()) {
            self.apply(&mut style, class, name);
        }
        style
    }

    pub fn select<'a>(&'a self, base: &'a str) -> Selection<'a> {
        Selection {
            sheet: self,
            base,
            overrides: Vec::new(),
        }
    }

    fn apply(&self, style: &mut Style, class: ViewportClass, name: &str) {
        if let Some(s) = self.slots.get(name) {
            style.merge(s);
        }
        self.media
            .iter()
            .filter(|b| b.query.matches(class))
            .filter_map(|b| b.slots.get(name))
            .for_each(|s| style.merge(s));
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        let all = self
            .slots
            .iter()
            .chain(self.media.iter().flat_map(|b| b.slots.iter()));
        for (slot, style) in all {
            if style.iter().any(|(p, v)| p.is_empty() || v.trim().is_empty()) {
                return Err(StyleError::EmptyDeclaration { slot: *slot });
            }
        }
        for block in &self.media {
            if let Some(slot) = block.slots.keys().find(|k| !self.slots.contains_key(*k)) {
                return Err(StyleError::OrphanMediaSlot {
                    query: block.query,
                    slot: *slot,
                });
            }
        }
        Ok(())
    }
}

/// Builder over [`StyleSheet::resolve`] for conditional overrides.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    sheet: &'a StyleSheet,
    base: &'a str,
    overrides: Vec<&'a str>,
}

impl<'a> Selection<'a> {
    pub fn with(mut self, slot: &'a str) -> Self {
        self.overrides.push(slot);
        self
    }

    pub fn with_if(self, cond: bool, slot: &'a str) -> Self {
        if cond {
            self.with(slot)
        } else {
            self
        }
    }

    pub fn resolve(&self, class: ViewportClass) -> Style {
        self.sheet.resolve(class, self.base, &self.overrides)
    }

    pub fn css(&self, class: ViewportClass) -> String {
        self.resolve(class).to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> StyleSheet {
        StyleSheet::new()
            .slot(
                "item",
                [
                    ("padding", "20px 40px"),
                    ("width", "50%"),
                    ("text-align", "right"),
                ],
            )
            .slot("item-right", [("left", "50%"), ("text-align", "left")])
            .slot("card:hover", [("transform", "translateY(-8px)")])
            .media(
                MediaQuery::Narrow,
                "item",
                [("width", "100%"), ("padding-left", "60px")],
            )
            .media(MediaQuery::Narrow, "item-right", [("left", "0")])
            .media(MediaQuery::Wide, "item", [("gap", "40px")])
    }

    #[test]
    fn test_style_set_replaces_in_place() {
        let style = Style::from([("color", "white"), ("gap", "4px")]).set("color", "black");
        assert_eq!(style.to_css(), "color: black; gap: 4px");
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_no_overrides_is_identity() {
        let sheet = sheet();
        for class in [ViewportClass::Below, ViewportClass::At, ViewportClass::Above] {
            let mut expected = sheet.get("item").cloned().unwrap_or_default();
            if class.is_narrow() {
                expected.merge(&Style::from([("width", "100%"), ("padding-left", "60px")]));
            }
            if class.is_wide() {
                expected.merge(&Style::from([("gap", "40px")]));
            }
            assert_eq!(sheet.resolve(class, "item", &[]), expected);
        }
        let plain = StyleSheet::new().slot("x", [("color", "red")]);
        assert_eq!(
            plain.resolve(ViewportClass::Below, "x", &[]),
            Style::from([("color", "red")])
        );
    }

    #[test]
    fn test_later_entries_win() {
        let sheet = sheet();
        let style = sheet.resolve(ViewportClass::Above, "item", &["item-right"]);
        assert_eq!(style.get("text-align"), Some("left"));
        assert_eq!(style.get("left"), Some("50%"));
        assert_eq!(style.get("width"), Some("50%"));

        let narrow = sheet.resolve(ViewportClass::Below, "item", &["item-right"]);
        assert_eq!(narrow.get("left"), Some("0"));
        assert_eq!(narrow.get("width"), Some("100%"));
    }

    #[test]
    fn test_override_only_touches_its_keys() {
        let sheet = sheet();
        for class in [ViewportClass::Below, ViewportClass::Above] {
            let without = sheet.select("item").resolve(class);
            let with = sheet.select("item").with("card:hover").resolve(class);
            let hover = sheet.get("card:hover").cloned().unwrap_or_default();
            for (prop, value) in with.iter() {
                if hover.get(prop).is_none() {
                    assert_eq!(without.get(prop), Some(value));
                }
            }
            for (prop, _) in without.iter() {
                assert!(with.get(prop).is_some());
            }
            assert_eq!(with.get("transform"), Some("translateY(-8px)"));
        }
    }

    #[test]
    fn test_breakpoint_override_only_touches_its_keys() {
        let sheet = sheet();
        let wide = sheet.resolve(ViewportClass::Above, "item", &[]);
        let narrow = sheet.resolve(ViewportClass::Below, "item", &[]);
        let changed = ["width", "padding-left", "gap"];
        for (prop, value) in wide.iter() {
            if !changed.contains(&prop) {
                assert_eq!(narrow.get(prop), Some(value));
            }
        }
    }

    #[test]
    fn test_breakpoint_boundary_matches_both_queries() {
        let sheet = sheet();
        let style = sheet.resolve(ViewportClass::At, "item", &[]);
        assert_eq!(style.get("width"), Some("100%"));
        assert_eq!(style.get("gap"), Some("40px"));
    }

    #[test]
    fn test_missing_slots() {
        let sheet = sheet();
        let style = sheet.select("item").with("nope").with_if(false, "card:hover");
        assert_eq!(
            style.resolve(ViewportClass::Above),
            sheet.resolve(ViewportClass::Above, "item", &[])
        );
        assert!(sheet.resolve(ViewportClass::Above, "missing", &[]).is_empty());
    }

    #[test]
    fn test_validate() {
        assert_eq!(sheet().validate(), Ok(()));

        let orphan = StyleSheet::new()
            .slot("a", [("color", "red")])
            .media(MediaQuery::Wide, "b", [("color", "blue")]);
        assert_eq!(
            orphan.validate(),
            Err(StyleError::OrphanMediaSlot {
                query: MediaQuery::Wide,
                slot: "b"
            })
        );

        let empty = StyleSheet::new().slot("a", [("color", " ")]);
        assert_eq!(
            empty.validate(),
            Err(StyleError::EmptyDeclaration { slot: "a" })
        );
    }

    #[test]
    fn test_media_query_display() {
        assert_eq!(MediaQuery::Narrow.to_string(), "(max-width: 768px)");
        assert_eq!(MediaQuery::Wide.to_string(), "(min-width: 768px)");
    }
}
