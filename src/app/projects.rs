use leptos::{html, prelude::*};

use super::env::Viewport;
use crate::content::{Project, EXTERNAL_REL, PROJECTS as PROJECT_LIST};
use crate::theme::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| PROJECTS.select(slot).css(viewport.class());

    view! {
        <section id="projects" style=move || css("section")>
            <div style=move || css("container")>
                <h2 style=move || css("h2")>"My Projects"</h2>
                <p style=move || css("p")>"Check out some of the projects I've been working on."</p>
                <div style=move || css("projects-grid")>
                    {PROJECT_LIST
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| PROJECTS.select(slot).css(viewport.class());
    let (hovered, set_hovered) = signal(false);
    let (code_hovered, set_code_hovered) = signal(false);
    let (image_failed, set_image_failed) = signal(false);
    let image_ref = NodeRef::<html::Img>::new();

    // a server-rendered image can fail before hydration attaches `on:error`
    Effect::new(move |_| {
        if let Some(img) = image_ref.get() {
            if !image_failed.get_untracked()
                && Project::image_load_failed(img.complete(), img.natural_width())
            {
                log::debug!("image for `{}` failed before hydration", project.title);
                set_image_failed.set(true);
            }
        }
    });

    view! {
        <div
            style=move || {
                PROJECTS
                    .select("project-card")
                    .with_if(hovered.get(), "project-card:hover")
                    .css(viewport.class())
            }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <img
                node_ref=image_ref
                src=move || project.image_src(image_failed.get())
                alt=project.image_alt()
                style=move || css("project-image")
                on:error=move |_| {
                    if !image_failed.get_untracked() {
                        log::debug!("image for `{}` failed, using placeholder", project.title);
                        set_image_failed.set(true);
                    }
                }
            />
            <div style=move || css("card-content")>
                <h3 style=move || css("h3")>{project.title}</h3>
                <p style=move || css("description")>{project.description}</p>
                <div style=move || css("tags")>
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span style=move || css("tag")>{*tag}</span> })
                        .collect_view()}
                </div>
                <div style=move || css("links")>
                    <a
                        href=project.code_url
                        target="_blank"
                        rel=EXTERNAL_REL
                        style=move || {
                            PROJECTS
                                .select("project-link")
                                .with_if(code_hovered.get(), "project-link:hover")
                                .css(viewport.class())
                        }
                        on:mouseenter=move |_| set_code_hovered.set(true)
                        on:mouseleave=move |_| set_code_hovered.set(false)
                    >
                        "View Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
