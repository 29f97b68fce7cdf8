use std::cmp::Ordering;

/// Width, in CSS pixels, at which layouts switch between their narrow and
/// wide variants.
pub const BREAKPOINT_PX: u32 = 768;

/// Vertical offset the page must scroll past before the navbar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Width assumed while rendering on the server, where there is no window.
pub const SERVER_VIEWPORT_WIDTH: u32 = 1280;

/// Position of the viewport width relative to [`BREAKPOINT_PX`].
///
/// Narrow layouts apply at or below the breakpoint, wide layouts at or above
/// it, so a viewport exactly at the breakpoint is both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Below,
    At,
    Above,
}

impl ViewportClass {
    pub fn from_width(width: u32) -> Self {
        match width.cmp(&BREAKPOINT_PX) {
            Ordering::Less => Self::Below,
            Ordering::Equal => Self::At,
            Ordering::Greater => Self::Above,
        }
    }

    pub fn is_narrow(self) -> bool {
        self != Self::Above
    }

    pub fn is_wide(self) -> bool {
        self != Self::Below
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportClassifier {
    width: u32,
    class: ViewportClass,
}

impl ViewportClassifier {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            class: ViewportClass::from_width(width),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn is_narrow(&self) -> bool {
        self.class.is_narrow()
    }

    /// Records a new width. Returns the new class if it changed.
    pub fn resize(&mut self, width: u32) -> Option<ViewportClass> {
        self.width = width;
        let class = ViewportClass::from_width(width);
        if class == self.class {
            return None;
        }
        log::debug!("viewport {width}px: {:?} -> {:?}", self.class, class);
        self.class = class;
        Some(class)
    }
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new(SERVER_VIEWPORT_WIDTH)
    }
}

/// Rounds a raw `innerWidth` reading to whole pixels.
pub fn width_from_px(px: f64) -> Option<u32> {
    (px.is_finite() && px >= 0.0).then(|| px.round() as u32)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
    scrolled: bool,
}

impl ScrollState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Records a new offset. Returns the new flag if it flipped.
    pub fn scroll_to(&mut self, offset: f64) -> Option<bool> {
        self.offset = offset;
        let scrolled = offset > SCROLL_THRESHOLD_PX;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_widths() {
        assert_eq!(ViewportClass::from_width(500), ViewportClass::Below);
        assert_eq!(ViewportClass::from_width(768), ViewportClass::At);
        assert_eq!(ViewportClass::from_width(769), ViewportClass::Above);

        assert!(ViewportClass::At.is_narrow());
        assert!(ViewportClass::At.is_wide());
        assert!(!ViewportClass::Below.is_wide());
        assert!(!ViewportClass::Above.is_narrow());
    }

    #[test]
    fn test_resize_sequence() {
        let mut classifier = ViewportClassifier::new(500);
        let mut seen = vec![classifier.is_narrow()];
        for width in [900, 500] {
            classifier.resize(width);
            seen.push(classifier.is_narrow());
        }
        assert_eq!(seen, vec![true, false, true]);
    }

    #[test]
    fn test_resize_notifies_only_on_class_change() {
        let mut classifier = ViewportClassifier::new(500);
        assert_eq!(classifier.resize(600), None);
        assert_eq!(classifier.width(), 600);
        assert_eq!(classifier.resize(768), Some(ViewportClass::At));
        assert_eq!(classifier.resize(1024), Some(ViewportClass::Above));
        assert_eq!(classifier.resize(1200), None);
    }

    #[test]
    fn test_stale_initial_read_corrects_on_first_event() {
        // width read at mount, then the window changed before the listener attached
        let mut classifier = ViewportClassifier::new(1024);
        assert!(!classifier.is_narrow());
        assert_eq!(classifier.resize(400), Some(ViewportClass::Below));
        assert!(classifier.is_narrow());
    }

    #[test]
    fn test_server_default_is_wide() {
        assert_eq!(ViewportClassifier::default().class(), ViewportClass::Above);
    }

    #[test]
    fn test_width_from_px() {
        assert_eq!(width_from_px(767.6), Some(768));
        assert_eq!(width_from_px(f64::NAN), None);
        assert_eq!(width_from_px(-1.0), None);
    }

    #[test]
    fn test_scroll_threshold_sequence() {
        let mut state = ScrollState::default();
        let seen = [0.0, 5.0, 15.0, 5.0]
            .into_iter()
            .map(|y| {
                state.scroll_to(y);
                state.is_scrolled()
            })
            .collect::<Vec<_>>();
        assert_eq!(seen, vec![false, false, true, false]);
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        let mut state = ScrollState::default();
        assert_eq!(state.scroll_to(10.0), None);
        assert!(!state.is_scrolled());
        assert_eq!(state.scroll_to(10.5), Some(true));
        assert_eq!(state.scroll_to(300.0), None);
        assert_eq!(state.scroll_to(10.0), Some(false));
        assert_eq!(state.offset(), 10.0);
    }
}
