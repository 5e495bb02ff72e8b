//! Project Card Component
//!
//! Gallery card. Clicking opens the project's detail dialog.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Project;

/// Technology badges, optionally capped with a "+N" overflow badge
#[component]
pub fn TechBadges(
    technologies: Vec<String>,
    #[prop(optional)] limit: Option<usize>,
) -> impl IntoView {
    let shown = limit.unwrap_or(technologies.len()).min(technologies.len());
    let overflow = technologies.len() - shown;
    let badges = technologies
        .into_iter()
        .take(shown)
        .map(|tech| view! { <span class="badge tech-badge">{tech}</span> })
        .collect_view();

    view! {
        <div class="tech-badges">
            {badges}
            {(overflow > 0).then(|| view! { <span class="badge tech-badge more">{format!("+{}", overflow)}</span> })}
        </div>
    }
}

#[component]
pub fn ProjectCard(
    project: Project,
    on_open: Callback<String>,
    #[prop(optional)] featured: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = project.id.clone();
    let image = ctx.asset_url(&project.image);
    let card_class = if featured { "project-card featured" } else { "project-card" };
    let media_class = if project.portrait { "card-media portrait" } else { "card-media" };

    view! {
        <article
            class=card_class
            data-project-id=project.id.clone()
            role="button"
            tabindex="0"
            on:click=move |_| on_open.run(id.clone())
        >
            <div class=media_class>
                <img src=image alt=project.title.clone() loading="lazy" />
            </div>
            <div class="card-header">
                <h3 class="card-title">{project.title.clone()}</h3>
            </div>
            <div class="card-body">
                <p class="card-description">{project.description.clone()}</p>
            </div>
            <div class="card-footer">
                <TechBadges technologies=project.technologies.clone() limit=4 />
            </div>
        </article>
    }
}
