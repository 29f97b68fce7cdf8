use leptos::prelude::*;

use super::env::{PageScrollLock, ScrollObserver, Viewport};
use crate::content::LOGO;
use crate::nav::{anchor, MenuEvent, MenuLock, NAV_LINKS};
use crate::theme::NAVBAR;

#[component]
pub fn Navbar() -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let scroll = expect_context::<ScrollObserver>();
    let scroll_lock = expect_context::<PageScrollLock>();
    let css = move |slot: &'static str| NAVBAR.select(slot).css(viewport.class());
    let menu = RwSignal::new(MenuLock::new(scroll_lock));
    let hovered = RwSignal::new(None::<&'static str>);
    // unmounting with the menu open must not leave the page locked
    on_cleanup(move || {
        menu.try_update_untracked(MenuLock::release);
    });

    let dispatch = move |event: MenuEvent| menu.update(|m| m.apply(event));
    let is_open = move || menu.with(MenuLock::is_open);
    let overlay_tabindex = move || if is_open() { "0" } else { "-1" };
    let bar_style = move |open_slot: &'static str| {
        NAVBAR
            .select("hamburger-bar")
            .with_if(is_open(), open_slot)
            .css(viewport.class())
    };

    view! {
        <nav style=move || {
            NAVBAR
                .select("nav")
                .with_if(scroll.is_scrolled(), "nav:scrolled")
                .css(viewport.class())
        }>
            <a href="#home" style=move || css("logo")>
                {LOGO}
            </a>
            <div style=move || css("nav-links")>
                {NAV_LINKS
                    .iter()
                    .map(|&link| {
                        view! {
                            <a
                                href=anchor(link)
                                style=move || {
                                    NAVBAR
                                        .select("nav-link")
                                        .with_if(hovered.get() == Some(link), "nav-link:hover")
                                        .css(viewport.class())
                                }
                                on:mouseenter=move |_| hovered.set(Some(link))
                                on:mouseleave=move |_| hovered.set(None)
                            >
                                {link}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            // doubles as the close control once it has turned into an X
            <button
                type="button"
                aria-label=move || if is_open() { "Close menu" } else { "Open menu" }
                aria-expanded=move || is_open().to_string()
                style=move || css("menu-icon")
                on:click=move |_| menu.update(MenuLock::toggle)
            >
                <div style=move || bar_style("hamburger-bar-top:open")></div>
                <div style=move || bar_style("hamburger-bar-middle:open")></div>
                <div style=move || bar_style("hamburger-bar-bottom:open")></div>
            </button>
            <div
                aria-hidden=move || (!is_open()).to_string()
                style=move || {
                    NAVBAR
                        .select("mobile-menu")
                        .with_if(is_open(), "mobile-menu:open")
                        .css(viewport.class())
                }
            >
                <button
                    type="button"
                    aria-label="Close menu"
                    tabindex=overlay_tabindex
                    style=move || css("close-icon")
                    on:click=move |_| dispatch(MenuEvent::Close)
                >
                    "×"
                </button>
                {NAV_LINKS
                    .iter()
                    .map(|&link| {
                        view! {
                            <a
                                href=anchor(link)
                                tabindex=overlay_tabindex
                                style=move || css("mobile-nav-link")
                                on:click=move |_| dispatch(MenuEvent::Link)
                            >
                                {link}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
