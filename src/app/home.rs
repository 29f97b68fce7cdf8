use leptos::prelude::*;

use super::{env::Viewport, icons::SocialSvg};
use crate::content::{self, EXTERNAL_REL, SOCIAL_LINKS};
use crate::style::Style;
use crate::theme::HOME;

#[component]
pub fn Home() -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| HOME.select(slot).css(viewport.class());
    let (work_hovered, set_work_hovered) = signal(false);
    let (resume_hovered, set_resume_hovered) = signal(false);
    let hovered_social = RwSignal::new(None::<&'static str>);
    let icon_style = HOME.get("svg-icon").map(Style::to_css).unwrap_or_default();

    view! {
        <section id="home" style=move || css("section")>
            <div style=move || css("content")>
                <div style=move || css("image-container")>
                    <img
                        src=content::PROFILE_IMAGE
                        alt=content::OWNER
                        style=move || css("profile-image")
                    />
                </div>
                <div style=move || css("text-container")>
                    <h1 style=move || css("h1")>"Hello, I'm " {content::OWNER}</h1>
                    <p style=move || css("p")>
                        "Full-Stack Developer. I build modern and responsive web applications. Explore my projects and get in touch."
                    </p>
                    <div style=move || css("button-container")>
                        <a
                            href="#projects"
                            style=move || {
                                HOME.select("button")
                                    .with_if(work_hovered.get(), "button:hover")
                                    .css(viewport.class())
                            }
                            on:mouseenter=move |_| set_work_hovered.set(true)
                            on:mouseleave=move |_| set_work_hovered.set(false)
                        >
                            "View My Work"
                            <span style=move || {
                                HOME.select("arrow")
                                    .with_if(work_hovered.get(), "arrow:hover")
                                    .css(viewport.class())
                            }>"→"</span>
                        </a>
                        <a
                            href=content::RESUME_PDF
                            target="_blank"
                            rel=EXTERNAL_REL
                            style=move || {
                                HOME.select("button-secondary")
                                    .with_if(resume_hovered.get(), "button-secondary:hover")
                                    .css(viewport.class())
                            }
                            on:mouseenter=move |_| set_resume_hovered.set(true)
                            on:mouseleave=move |_| set_resume_hovered.set(false)
                        >
                            "Download Resume"
                        </a>
                    </div>
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
                                            HOME.select("social-link")
                                                .with_if(
                                                    hovered_social.get() == Some(name),
                                                    "social-link:hover",
                                                )
                                                .css(viewport.class())
                                        }
                                        on:mouseenter=move |_| hovered_social.set(Some(name))
                                        on:mouseleave=move |_| hovered_social.set(None)
                                    >
                                        <SocialSvg icon=link.icon style=icon_style.clone() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
