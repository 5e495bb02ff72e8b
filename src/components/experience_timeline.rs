//! Experience Timeline Component
//!
//! Filterable, paginated timeline. Each entry expands in place to show its
//! achievements; opening one collapses the previously open entry.

use leptos::prelude::*;
use leptos_disclosure::{create_disclosure_signals, derive_categories, DisclosureSignals};

use crate::components::{CategoryFilter, SectionHeader, ShowMoreButton, TechBadges};
use crate::context::use_app_context;
use crate::models::{Experience, Labels};

fn kind_icon(kind: &str) -> &'static str {
    match kind {
        "professional" => "💼",
        "freelance" => "🚀",
        _ => "🧪",
    }
}

#[component]
fn ExperienceEntry(
    experience: Experience,
    disclosure: DisclosureSignals,
    labels: Memo<Labels>,
    side: &'static str,
) -> impl IntoView {
    let id = experience.id.clone();
    let toggle_id = id.clone();
    let is_open = Memo::new(move |_| disclosure.is_selected(&id));
    let kind = experience.kind.as_str();
    let has_achievements = !experience.achievements.is_empty();
    let achievements = experience.achievements.clone();

    view! {
        <div class=format!("timeline-entry {}", side)>
            <div class="timeline-dot">{kind_icon(kind)}</div>
            <div
                class=move || if is_open.get() { "timeline-card open" } else { "timeline-card" }
                on:click=move |_| disclosure.toggle_selection(&toggle_id)
            >
                <div class="timeline-meta">
                    <span class=format!("badge kind-badge {}", kind)>
                        {move || labels.with(|l| l.category_name(kind))}
                    </span>
                    <span class="timeline-period">{experience.period.clone()}</span>
                </div>
                <h3 class="timeline-role">{experience.role.clone()}</h3>
                <p class="timeline-company">
                    {experience.company.clone()}
                    <span class="timeline-location">" · " {experience.location.clone()}</span>
                </p>
                <p class="timeline-description">{experience.description.clone()}</p>

                <Show when=move || is_open.get() && has_achievements>
                    <div class="timeline-achievements">
                        <h4>{move || labels.with(|l| l.achievements.clone())}</h4>
                        <ul>
                            {achievements
                                .iter()
                                .map(|a| view! { <li>{a.clone()}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </Show>

                <TechBadges technologies=experience.technologies.clone() />
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let ctx = use_app_context();
    let disclosure = create_disclosure_signals(ctx.config().timeline_page_size);

    let labels = ctx.select(|c| c.labels.clone());
    let experiences = ctx.select(|c| c.experiences.clone());
    let categories = Memo::new(move |_| experiences.with(|e| derive_categories(e)));
    let timeline = Memo::new(move |_| experiences.with(|e| disclosure.view(e)));

    let on_more = Callback::new(move |_: ()| disclosure.reveal_more(timeline.with_untracked(|t| t.total)));

    let label = move |pick: fn(&Labels) -> &String| {
        Signal::derive(move || labels.with(|l| pick(l).clone()))
    };

    view! {
        <section id="experience" class="section experience-section">
            <div class="container">
                <SectionHeader
                    kicker=label(|l| &l.experience_kicker)
                    title=label(|l| &l.experience_title)
                    intro=label(|l| &l.experience_intro)
                />

                <CategoryFilter categories=categories disclosure=disclosure labels=labels />

                <div class="timeline">
                    <div class="timeline-line"></div>
                    <For
                        each=move || timeline.with(|t| t.items.iter().cloned().enumerate().collect::<Vec<_>>())
                        key=|(index, experience)| (*index, experience.id.clone())
                        children=move |(index, experience)| {
                            let side = if index % 2 == 0 { "left" } else { "right" };
                            view! { <ExperienceEntry experience=experience disclosure=disclosure labels=labels side=side /> }
                        }
                    />
                </div>

                <ShowMoreButton
                    visible=Signal::derive(move || timeline.with(|t| t.has_more))
                    label=label(|l| &l.experience_more)
                    progress=Signal::derive(move || timeline.with(|t| (t.revealed, t.total)))
                    on_click=on_more
                />
            </div>
        </section>
    }
}
