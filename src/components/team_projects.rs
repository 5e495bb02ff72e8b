//! Team Projects Component
//!
//! Collaborative work, filterable by engagement kind. NDA projects show a
//! badge instead of a link.

use leptos::prelude::*;
use leptos_disclosure::{create_disclosure_signals, derive_categories};

use crate::components::{CategoryFilter, SectionHeader, ShowMoreButton, TechBadges};
use crate::context::use_app_context;
use crate::models::{Labels, TeamProject};

#[component]
fn TeamProjectCard(project: TeamProject, labels: Memo<Labels>) -> impl IntoView {
    let ctx = use_app_context();
    let image = ctx.asset_url(&project.image);
    let kind = project.kind.as_str();
    let link = project.public_link().map(str::to_string);
    let nda = project.nda;

    view! {
        <article class="team-card">
            <div class="card-media">
                <img src=image alt=project.title.clone() loading="lazy" />
                <span class=format!("badge kind-badge {}", kind)>
                    {move || labels.with(|l| l.category_name(kind))}
                </span>
            </div>
            <div class="card-body">
                <h3 class="card-title">{project.title.clone()}</h3>
                <p class="team-company">{project.company.clone()} " · " {project.period.clone()}</p>
                <p class="team-role">
                    {project.role.clone()}
                    <span class="team-size">
                        " · " {move || labels.with(|l| l.team_size.clone())} " " {project.team_size.clone()}
                    </span>
                </p>
                <p class="card-description">{project.description.clone()}</p>
                <ul class="team-achievements">
                    {project
                        .achievements
                        .iter()
                        .map(|a| view! { <li>{a.clone()}</li> })
                        .collect_view()}
                </ul>
                <TechBadges technologies=project.technologies.clone() limit=5 />
            </div>
            <div class="card-footer">
                {nda.then(|| view! {
                    <span class="badge nda-badge">"🔒 " {move || labels.with(|l| l.nda.clone())}</span>
                })}
                {link.map(|href| view! {
                    <a class="btn btn-outline" href=href target="_blank" rel="noopener noreferrer">
                        {move || labels.with(|l| l.view_demo.clone())}
                    </a>
                })}
            </div>
        </article>
    }
}

#[component]
pub fn TeamProjects() -> impl IntoView {
    let ctx = use_app_context();
    let disclosure = create_disclosure_signals(ctx.config().team_page_size);

    let labels = ctx.select(|c| c.labels.clone());
    let team_projects = ctx.select(|c| c.team_projects.clone());
    let categories = Memo::new(move |_| team_projects.with(|t| derive_categories(t)));
    let listing = Memo::new(move |_| team_projects.with(|t| disclosure.view(t)));

    let on_more = Callback::new(move |_: ()| disclosure.reveal_more(listing.with_untracked(|l| l.total)));

    let label = move |pick: fn(&Labels) -> &String| {
        Signal::derive(move || labels.with(|l| pick(l).clone()))
    };

    view! {
        <section id="team-projects" class="section team-section">
            <div class="container">
                <SectionHeader
                    kicker=label(|l| &l.team_kicker)
                    title=label(|l| &l.team_title)
                    intro=label(|l| &l.team_intro)
                />

                <CategoryFilter categories=categories disclosure=disclosure labels=labels />

                <div class="team-grid">
                    <For
                        each=move || listing.with(|l| l.items.clone())
                        key=|project| project.id.clone()
                        children=move |project| view! { <TeamProjectCard project=project labels=labels /> }
                    />
                </div>

                <ShowMoreButton
                    visible=Signal::derive(move || listing.with(|l| l.has_more))
                    label=label(|l| &l.show_more)
                    progress=Signal::derive(move || listing.with(|l| (l.revealed, l.total)))
                    on_click=on_more
                />
            </div>
        </section>
    }
}
