use leptos::prelude::*;

use super::env::Viewport;
use crate::content::{timeline_side, Academic, TimelineSide, ACADEMICS as ACADEMIC_LIST};
use crate::theme::ACADEMICS;

#[component]
pub fn Academics() -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| ACADEMICS.select(slot).css(viewport.class());

    view! {
        <section id="academics" style=move || css("section")>
            <div style=move || css("container")>
                <h2 style=move || css("h2")>"Academics & Education"</h2>
                <div style=move || css("timeline")>
                    <div style=move || css("timeline-line")></div>
                    {ACADEMIC_LIST
                        .iter()
                        .enumerate()
                        .map(|(index, item)| view! { <TimelineItem index item /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(index: usize, item: &'static Academic) -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| ACADEMICS.select(slot).css(viewport.class());
    let side = move || timeline_side(index, viewport.class());

    let item_style = move || {
        let side_slot = match side() {
            TimelineSide::Left => "timeline-item-left",
            TimelineSide::Right => "timeline-item-right",
        };
        ACADEMICS
            .select("timeline-item")
            .with(side_slot)
            .css(viewport.class())
    };
    let dot_style = move || {
        let side_slot = match side() {
            TimelineSide::Left => "timeline-dot-left",
            TimelineSide::Right => "timeline-dot-right",
        };
        ACADEMICS
            .select("timeline-dot")
            .with(side_slot)
            .css(viewport.class())
    };

    view! {
        <div style=item_style>
            <div style=dot_style></div>
            <div style=move || css("timeline-content")>
                <h3 style=move || css("h3")>{item.degree}</h3>
                <h4 style=move || css("h4")>{item.institution}</h4>
                <p style=move || css("date")>{item.date}</p>
                <p style=move || css("description")>{item.description}</p>
            </div>
        </div>
    }
}
