use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::{env::Viewport, icons::SocialSvg};
use crate::content::{copyright, EXTERNAL_REL, SOCIAL_LINKS};
use crate::style::Style;
use crate::theme::FOOTER;

const BACK_TO_TOP: &str = "top";

#[component]
pub fn Footer() -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| FOOTER.select(slot).css(viewport.class());
    let hovered = RwSignal::new(None::<&'static str>);
    let icon_style = FOOTER.get("svg-icon").map(Style::to_css).unwrap_or_default();

    view! {
        <footer style=move || css("footer")>
            <div style=move || css("container")>
                <div style=move || css("social-links")>
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            let name = link.name;
                            view! {
                                <a
                                    href=link.href
                                    title=name
                                    target="_blank"
                                    rel=EXTERNAL_REL
                                    style=move || {
                                        FOOTER
                                            .select("social-link")
                                            .with_if(hovered.get() == Some(name), "social-link:hover")
                                            .css(viewport.class())
                                    }
                                    on:mouseenter=move |_| hovered.set(Some(name))
                                    on:mouseleave=move |_| hovered.set(None)
                                >
                                    <SocialSvg icon=link.icon style=icon_style.clone() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href="#home"
                    style=move || {
                        FOOTER
                            .select("back-to-top")
                            .with_if(hovered.get() == Some(BACK_TO_TOP), "back-to-top:hover")
                            .css(viewport.class())
                    }
                    on:mouseenter=move |_| hovered.set(Some(BACK_TO_TOP))
                    on:mouseleave=move |_| hovered.set(None)
                >
                    "Back to Top ↑"
                </a>
                <p style=move || css("copyright")>{copyright(Utc::now().year())}</p>
            </div>
        </footer>
    }
}
