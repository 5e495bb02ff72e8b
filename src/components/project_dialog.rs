//! Project Dialog Component
//!
//! Detail overlay for the selected gallery project. At most one is open; the
//! backdrop, the close button and Escape all dismiss it.

use leptos::prelude::*;

use crate::components::TechBadges;
use crate::context::use_app_context;
use crate::markdown::parse_markdown;
use crate::models::{Labels, Project};

#[component]
pub fn ProjectDialog(
    project: Memo<Option<Project>>,
    labels: Memo<Labels>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let asset_base = ctx.asset_base();

    let label = move |pick: fn(&Labels) -> &String| labels.with(|l| pick(l).clone());

    view! {
        {move || project.get().map(|p| {
            let base = asset_base.clone();
            let image = ctx.asset_url(&p.image);
            let media_class = if p.portrait { "dialog-media portrait" } else { "dialog-media" };
            let description_html = parse_markdown(&p.description, &base);
            let objectives_html = p.objectives.as_deref().map(|o| parse_markdown(o, &base));
            let results_html = p.results.as_deref().map(|r| parse_markdown(r, &base));
            let demo = p.demo_link().map(str::to_string);
            let code = p.code_link().map(str::to_string);

            view! {
                <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                    <div
                        class="dialog"
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby="project-dialog-title"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <header class="dialog-header">
                            <h2 id="project-dialog-title">{p.title.clone()}</h2>
                            <button
                                class="dialog-close"
                                aria-label=move || label(|l| &l.close)
                                on:click=move |_| on_close.run(())
                            >
                                "×"
                            </button>
                        </header>

                        <div class=media_class>
                            <img src=image alt=p.title.clone() />
                        </div>

                        <div class="dialog-section">
                            <h4>"🛠️ " {move || label(|l| &l.tech_stack)}</h4>
                            <TechBadges technologies=p.technologies.clone() />
                        </div>

                        <div class="dialog-section">
                            <h4>"📝 " {move || label(|l| &l.description)}</h4>
                            <div class="markdown" inner_html=description_html></div>
                        </div>

                        {objectives_html.map(|html| view! {
                            <div class="dialog-section">
                                <h4>"🎯 " {move || label(|l| &l.objectives)}</h4>
                                <div class="markdown" inner_html=html></div>
                            </div>
                        })}

                        {results_html.map(|html| view! {
                            <div class="dialog-section">
                                <h4>"📊 " {move || label(|l| &l.results)}</h4>
                                <div class="markdown" inner_html=html></div>
                            </div>
                        })}

                        <div class="dialog-actions">
                            {demo.map(|href| view! {
                                <a class="btn btn-primary" href=href target="_blank" rel="noopener noreferrer">
                                    {move || label(|l| &l.view_demo)}
                                </a>
                            })}
                            {code.map(|href| view! {
                                <a class="btn btn-outline" href=href target="_blank" rel="noopener noreferrer">
                                    {move || label(|l| &l.view_code)}
                                </a>
                            })}
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
