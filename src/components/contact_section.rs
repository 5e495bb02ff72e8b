//! Contact Section Component
//!
//! Social links and a contact form. The form has no backend; submitting is
//! logged and otherwise ignored.

use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::context::use_app_context;
use crate::models::Labels;

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_app_context();
    let labels = ctx.select(|c| c.labels.clone());
    let socials = ctx.select(|c| c.socials.clone());

    let label = move |pick: fn(&Labels) -> &String| {
        Signal::derive(move || labels.with(|l| pick(l).clone()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!(target: "contact", "contact form submitted (no backend configured)");
    };

    view! {
        <section id="contact" class="section contact-section">
            <div class="container">
                <SectionHeader
                    kicker=label(|l| &l.contact_kicker)
                    title=label(|l| &l.contact_title)
                    intro=label(|l| &l.contact_intro)
                />
                <div class="contact-grid">
                    <div class="socials">
                        <For
                            each=move || socials.get()
                            key=|social| social.name.clone()
                            children=|social| view! {
                                <a class="social-link" href=social.href.clone() target="_blank" rel="noopener noreferrer" aria-label=social.name.clone()>
                                    <svg viewBox="0 0 24 24" width="24" height="24" fill="currentColor">
                                        <path d=social.icon.clone()></path>
                                    </svg>
                                    <span>{social.name.clone()}</span>
                                </a>
                            }
                        />
                    </div>

                    <form class="contact-form" on:submit=on_submit>
                        <h3>{move || labels.with(|l| l.form_title.clone())}</h3>
                        <label>
                            <span>{move || labels.with(|l| l.form_name.clone())}</span>
                            <input type="text" name="name" placeholder=move || labels.with(|l| l.form_name_placeholder.clone()) />
                        </label>
                        <label>
                            <span>{move || labels.with(|l| l.form_email.clone())}</span>
                            <input type="email" name="email" placeholder=move || labels.with(|l| l.form_email_placeholder.clone()) />
                        </label>
                        <label>
                            <span>{move || labels.with(|l| l.form_subject.clone())}</span>
                            <input type="text" name="subject" placeholder=move || labels.with(|l| l.form_subject_placeholder.clone()) />
                        </label>
                        <label>
                            <span>{move || labels.with(|l| l.form_message.clone())}</span>
                            <textarea name="message" rows="5" placeholder=move || labels.with(|l| l.form_message_placeholder.clone())></textarea>
                        </label>
                        <button type="submit" class="btn btn-primary">
                            {move || labels.with(|l| l.form_submit.clone())}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
