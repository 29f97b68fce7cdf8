use leptos::prelude::*;

use super::env::Viewport;
use crate::content::{self, ABOUT_PARAGRAPHS, CORE_TECHNOLOGIES};
use crate::theme::ABOUT;

#[component]
pub fn About() -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| ABOUT.select(slot).css(viewport.class());

    view! {
        <section id="about" style=move || css("section")>
            <div style=move || css("main-container")>
                <div style=move || css("image-wrapper")>
                    <img
                        src=content::PROFILE_IMAGE
                        alt=format!("{} - Profile", content::OWNER)
                        style=move || css("profile-image")
                    />
                </div>
                <div style=move || css("content-area")>
                    <h2 style=move || css("h2")>"About Me"</h2>
                    {ABOUT_PARAGRAPHS
                        .iter()
                        .map(|text| view! { <p style=move || css("p")>{*text}</p> })
                        .collect_view()}
                    <h3 style=move || css("h3")>"Core Technologies"</h3>
                    <div style=move || css("skills-container")>
                        {CORE_TECHNOLOGIES
                            .iter()
                            .map(|tech| view! { <span style=move || css("skill")>{*tech}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
