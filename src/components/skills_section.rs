//! Skills Section Component
//!
//! Skills grouped by category with proficiency bars, followed by the stat row.

use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::context::use_app_context;
use crate::models::{Labels, Skill, SkillCategory};

/// Clamp a proficiency to a CSS width
fn bar_width(proficiency: u8) -> String {
    format!("width: {}%", proficiency.min(100))
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let color = skill.color.clone().unwrap_or_else(|| "var(--accent)".to_string());
    let style = format!("{}; background: {}", bar_width(skill.proficiency), color);

    view! {
        <div class="skill">
            <div class="skill-head">
                <span class="skill-name">
                    {skill.icon.clone().map(|icon| view! { <span class="skill-icon">{icon}</span> })}
                    {skill.name.clone()}
                </span>
                <span class="skill-level">{format!("{}%", skill.proficiency.min(100))}</span>
            </div>
            <div class="skill-track">
                <div class="skill-fill" style=style></div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let ctx = use_app_context();
    let labels = ctx.select(|c| c.labels.clone());
    let skills = ctx.select(|c| c.skills.clone());
    let stats = ctx.select(|c| c.stats.clone());

    let label = move |pick: fn(&Labels) -> &String| {
        Signal::derive(move || labels.with(|l| pick(l).clone()))
    };

    let group = move |category: SkillCategory| {
        skills.with(|all| {
            all.iter()
                .filter(|s| s.category == category)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section id="skills" class="section skills-section">
            <div class="container">
                <SectionHeader
                    kicker=label(|l| &l.skills_kicker)
                    title=label(|l| &l.skills_title)
                    intro=label(|l| &l.skills_intro)
                />

                <div class="skills-grid">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| view! {
                            <div class="skill-group">
                                <h3 class="skill-group-title">
                                    {move || labels.with(|l| l.category_name(category.as_str()))}
                                </h3>
                                <For
                                    each=move || group(category)
                                    key=|skill| skill.name.clone()
                                    children=|skill| view! { <SkillBar skill=skill /> }
                                />
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class="stats-row">
                    <For
                        each=move || stats.get()
                        key=|stat| stat.label.clone()
                        children=|stat| view! {
                            <div class="stat-card">
                                {stat.icon.clone().map(|icon| view! { <span class="stat-icon">{icon}</span> })}
                                <span class="stat-value gradient-text">{stat.value.clone()}</span>
                                <span class="stat-label">{stat.label.clone()}</span>
                            </div>
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_is_clamped() {
        assert_eq!(bar_width(80), "width: 80%");
        assert_eq!(bar_width(250), "width: 100%");
    }
}
