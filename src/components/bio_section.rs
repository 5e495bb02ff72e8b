//! Bio Section Component
//!
//! Markdown biography with the highlight list beside it.

use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::context::use_app_context;
use crate::markdown::{parse_markdown, parse_markdown_inline};

#[component]
pub fn BioSection() -> impl IntoView {
    let ctx = use_app_context();
    let profile = ctx.select(|c| c.profile.clone());
    let labels = ctx.select(|c| c.labels.clone());
    let asset_base = ctx.asset_base();

    let base = asset_base.clone();
    let bio_html = Memo::new(move |_| profile.with(|p| parse_markdown(&p.bio, &base)));
    let highlights = Memo::new(move |_| {
        profile.with(|p| {
            p.highlights
                .iter()
                .map(|h| parse_markdown_inline(h, &asset_base))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section id="bio" class="section bio-section">
            <div class="container">
                <SectionHeader
                    kicker=Signal::derive(move || labels.with(|l| l.about_kicker.clone()))
                    title=Signal::derive(move || profile.with(|p| p.name.clone()))
                />
                <div class="bio-grid">
                    <div class="bio-text markdown" inner_html=move || bio_html.get()></div>
                    <div class="bio-highlights">
                        <h3>{move || labels.with(|l| l.key_highlights.clone())}</h3>
                        <ul>
                            <For
                                each=move || highlights.get()
                                key=|highlight| highlight.clone()
                                children=|highlight| view! {
                                    <li>
                                        <span class="highlight-check">"✓"</span>
                                        <span inner_html=highlight></span>
                                    </li>
                                }
                            />
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
