use leptos::{either::Either, prelude::*};

use super::env::Viewport;
use crate::contact::{ContactField, ContactForm};
use crate::content::{ContactInfo, CONTACT_INFO, EXTERNAL_REL};
use crate::theme::CONTACT;

#[component]
pub fn Contact() -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| CONTACT.select(slot).css(viewport.class());
    let form = RwSignal::new(ContactForm::default());
    let (button_hovered, set_button_hovered) = signal(false);
    let hovered_info = RwSignal::new(None::<&'static str>);

    view! {
        <section id="contact" style=move || css("section")>
            <div style=move || css("container")>
                <h2 style=move || css("h2")>"Get In Touch"</h2>
                <p style=move || css("p")>
                    "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision. Feel free to reach out!"
                </p>
                <div style=move || css("content-wrapper")>
                    <form
                        style=move || css("form")
                        on:submit=move |ev| {
                            ev.prevent_default();
                            form.update(|f| {
                                f.submit();
                            });
                        }
                    >
                        <FormField field=ContactField::Name form />
                        <FormField field=ContactField::Email form />
                        <FormField field=ContactField::Message form />
                        <button
                            type="submit"
                            style=move || {
                                CONTACT
                                    .select("button")
                                    .with_if(button_hovered.get(), "button:hover")
                                    .css(viewport.class())
                            }
                            on:mouseenter=move |_| set_button_hovered.set(true)
                            on:mouseleave=move |_| set_button_hovered.set(false)
                        >
                            "Send Message"
                        </button>
                    </form>
                    <div style=move || css("contact-info")>
                        {CONTACT_INFO
                            .iter()
                            .map(|info| view! { <InfoCard info hovered=hovered_info /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let id = field.id();
    let field_css = move |slot: &'static str| {
        CONTACT
            .select(slot)
            .with_if(form.with(|f| f.is_focused(field)), "field:focus")
            .css(viewport.class())
    };
    let value = move || form.with(|f| f.value(field).to_string());

    let control = match field {
        ContactField::Message => Either::Left(view! {
            <textarea
                id=id
                required=true
                style=move || field_css("textarea")
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:focus=move |_| form.update(|f| f.focus(field))
                on:blur=move |_| form.update(|f| f.blur(field))
            ></textarea>
        }),
        ContactField::Name | ContactField::Email => {
            let kind = if field == ContactField::Email { "email" } else { "text" };
            Either::Right(view! {
                <input
                    type=kind
                    id=id
                    required=true
                    style=move || field_css("input")
                    prop:value=value
                    on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    on:focus=move |_| form.update(|f| f.focus(field))
                    on:blur=move |_| form.update(|f| f.blur(field))
                />
            })
        }
    };

    view! {
        <label for=id style=move || CONTACT.select("label").css(viewport.class())>
            {field.label()}
        </label>
        {control}
    }
}

#[component]
fn InfoCard(info: &'static ContactInfo, hovered: RwSignal<Option<&'static str>>) -> impl IntoView {
    let viewport = expect_context::<Viewport>();
    let css = move |slot: &'static str| CONTACT.select(slot).css(viewport.class());
    let title = info.title;

    let text = match info.href {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target="_blank"
                rel=EXTERNAL_REL
                style=move || {
                    CONTACT
                        .select("info-link")
                        .with_if(hovered.get() == Some(title), "info-link:hover")
                        .css(viewport.class())
                }
                on:mouseenter=move |_| hovered.set(Some(title))
                on:mouseleave=move |_| hovered.set(None)
            >
                {info.text}
            </a>
        }),
        None => Either::Right(view! { <span style=move || css("info-link")>{info.text}</span> }),
    };

    view! {
        <div style=move || css("info-card")>
            <span style=move || css("info-icon")>{info.icon}</span>
            <div style=move || css("info-text")>
                <span style=move || css("info-title")>{title}</span>
                {text}
            </div>
        </div>
    }
}
