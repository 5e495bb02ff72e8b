//! Projects Grid Component
//!
//! Gallery section: category filter, featured row, paginated grid and the
//! project detail dialog.

use leptos::prelude::*;
use leptos_disclosure::{create_disclosure_signals, derive_categories};

use crate::components::{CategoryFilter, ProjectCard, ProjectDialog, SectionHeader, ShowMoreButton};
use crate::context::use_app_context;
use crate::dom;

#[component]
pub fn ProjectsGrid() -> impl IntoView {
    let ctx = use_app_context();
    let disclosure = create_disclosure_signals(ctx.config().gallery_page_size);

    let labels = ctx.select(|c| c.labels.clone());
    let projects = ctx.select(|c| c.projects.clone());
    let categories = Memo::new(move |_| projects.with(|p| derive_categories(p)));
    let gallery = Memo::new(move |_| projects.with(|p| disclosure.view(p)));

    let selected = Memo::new(move |_| {
        let id = disclosure.selection()?;
        projects.with(|p| p.iter().find(|project| project.id == id).cloned())
    });

    dom::bind_escape_key(move || disclosure.dismiss());

    let on_open = Callback::new(move |id: String| disclosure.toggle_selection(&id));
    let on_close = Callback::new(move |_: ()| disclosure.dismiss());
    let on_more = Callback::new(move |_: ()| disclosure.reveal_more(gallery.with_untracked(|g| g.total)));

    let label = move |pick: fn(&crate::models::Labels) -> &String| {
        Signal::derive(move || labels.with(|l| pick(l).clone()))
    };

    view! {
        <section id="projects" class="section projects-section">
            <div class="container">
                <SectionHeader
                    kicker=label(|l| &l.projects_kicker)
                    title=label(|l| &l.projects_title)
                    intro=label(|l| &l.projects_intro)
                />

                <CategoryFilter categories=categories disclosure=disclosure labels=labels show_label=true />

                <Show when=move || gallery.with(|g| !g.featured.is_empty())>
                    <div class="featured-projects">
                        <h3 class="featured-heading">
                            <span class="featured-star">"★"</span>
                            {move || labels.with(|l| l.featured_heading.clone())}
                        </h3>
                        <div class="projects-grid featured-grid">
                            <For
                                each=move || gallery.with(|g| g.featured.clone())
                                key=|project| project.id.clone()
                                children=move |project| view! { <ProjectCard project=project on_open=on_open featured=true /> }
                            />
                        </div>
                    </div>
                </Show>

                <div class="projects-grid">
                    <For
                        each=move || gallery.with(|g| g.items.clone())
                        key=|project| project.id.clone()
                        children=move |project| view! { <ProjectCard project=project on_open=on_open /> }
                    />
                </div>

                <Show when=move || gallery.with(|g| g.items.is_empty() && g.featured.is_empty())>
                    <p class="empty-filter">{move || labels.with(|l| l.empty_filter.clone())}</p>
                </Show>

                <ShowMoreButton
                    visible=Signal::derive(move || gallery.with(|g| g.has_more))
                    label=label(|l| &l.show_more)
                    progress=Signal::derive(move || gallery.with(|g| (g.revealed, g.total)))
                    on_click=on_more
                />
            </div>

            <ProjectDialog project=selected labels=labels on_close=on_close />
        </section>
    }
}
