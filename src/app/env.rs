//! Window-backed services shared by every section. Each listener is
//! registered once here and removed when the app's owner is disposed.

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::nav::{ScrollHost, ScrollLock};
use crate::viewport::{width_from_px, ScrollState, ViewportClass, ViewportClassifier};

pub type PageScrollLock = ScrollLock<DocumentScrollHost>;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    class: Memo<ViewportClass>,
}

impl Viewport {
    /// Tracked read; only changes when the width crosses the breakpoint.
    pub fn class(&self) -> ViewportClass {
        self.class.get()
    }

    pub fn is_narrow(&self) -> bool {
        self.class().is_narrow()
    }
}

pub fn provide_viewport() -> Viewport {
    let state = RwSignal::new(ViewportClassifier::default());
    let class = Memo::new(move |_| state.with(ViewportClassifier::class));

    let refresh = move || {
        if let Some(width) = read_width() {
            state.update(|s| {
                s.resize(width);
            });
        }
    };
    // effects only run in the browser, after hydration
    Effect::new(move |_| refresh());
    let _ = use_event_listener(use_window(), ev::resize, move |_| refresh());

    let viewport = Viewport { class };
    provide_context(viewport);
    viewport
}

fn read_width() -> Option<u32> {
    window().inner_width().ok()?.as_f64().and_then(width_from_px)
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollObserver {
    scrolled: Memo<bool>,
}

impl ScrollObserver {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }
}

pub fn provide_scroll_observer() -> ScrollObserver {
    let state = RwSignal::new(ScrollState::default());
    let scrolled = Memo::new(move |_| state.with(ScrollState::is_scrolled));

    let refresh = move || {
        if let Ok(offset) = window().scroll_y() {
            state.update(|s| {
                s.scroll_to(offset);
            });
        }
    };
    Effect::new(move |_| refresh());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| refresh());

    let observer = ScrollObserver { scrolled };
    provide_context(observer);
    observer
}

/// Scroll host backed by the document body's inline style.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentScrollHost;

fn body_style() -> Option<web_sys::CssStyleDeclaration> {
    document().body().map(|body| body.style())
}

impl ScrollHost for DocumentScrollHost {
    fn overflow(&self) -> String {
        body_style()
            .and_then(|s| s.get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let Some(style) = body_style() else {
            log::warn!("no document body to set overflow on");
            return;
        };
        let res = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(e) = res {
            log::warn!("couldn't set body overflow to `{value}`: {e:?}");
        }
    }

    fn scroll_to_top(&self) {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn provide_scroll_lock() -> PageScrollLock {
    let lock = ScrollLock::new(DocumentScrollHost);
    provide_context(lock.clone());
    lock
}
