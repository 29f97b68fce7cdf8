use leptos::prelude::*;

use super::env::Viewport;
use crate::content::{Skill, SKILL_GROUPS};
use crate::theme::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| SKILLS.select(slot).css(viewport.class());

    view! {
        <section id="skills" style=move || css("section")>
            <div style=move || css("container")>
                <h2 style=move || css("h2")>"Skills & Technologies"</h2>
                <p style=move || css("p")>
                    "Here are some of the technologies I specialize in and use to build modern, high-performance web applications."
                </p>
                <div style=move || css("categories")>
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div>
                                    <h3 style=move || css("h3")>{group.title}</h3>
                                    <div style=move || css("skills-grid")>
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <SkillCard skill /> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| SKILLS.select(slot).css(viewport.class());
    let (hovered, set_hovered) = signal(false);
    let fill_style = move || {
        SKILLS
            .select("progress-fill")
            .resolve(viewport.class())
            .set("width", skill.fill_width())
            .to_css()
    };

    view! {
        <div
            style=move || {
                SKILLS
                    .select("skill-card")
                    .with_if(hovered.get(), "skill-card:hover")
                    .css(viewport.class())
            }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div>
                <div style=move || css("skill-icon")>{skill.icon}</div>
                <span style=move || css("skill-name")>{skill.name}</span>
            </div>
            <div style=move || css("progress-wrapper")>
                <div style=move || css("progress-bar")>
                    <div style=fill_style></div>
                </div>
                <div style=move || css("percentage")>{skill.fill_width()}</div>
            </div>
        </div>
    }
}
