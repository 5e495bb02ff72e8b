//! Testimonials Section Component

use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::context::use_app_context;
use crate::models::{Labels, Testimonial};

/// Star row for a 1..=5 rating; out-of-range values are clamped
fn stars(rating: u8) -> String {
    let filled = rating.clamp(1, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initials = testimonial.initials();
    let avatar = testimonial
        .avatar
        .clone()
        .filter(|url| !url.trim().is_empty());

    view! {
        <figure class="testimonial-card">
            <div class="testimonial-rating" aria-label=format!("{}/5", testimonial.rating)>
                {stars(testimonial.rating)}
            </div>
            <blockquote class="testimonial-content">{testimonial.content.clone()}</blockquote>
            <figcaption class="testimonial-author">
                {match avatar {
                    Some(url) => view! { <img class="avatar" src=url alt=testimonial.name.clone() loading="lazy" /> }.into_any(),
                    None => view! { <span class="avatar avatar-initials">{initials}</span> }.into_any(),
                }}
                <div>
                    <div class="author-name">{testimonial.name.clone()}</div>
                    <div class="author-role">{format!("{} · {}", testimonial.role, testimonial.company)}</div>
                    {testimonial.project_type.clone().map(|kind| view! { <span class="badge">{kind}</span> })}
                </div>
            </figcaption>
        </figure>
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let ctx = use_app_context();
    let labels = ctx.select(|c| c.labels.clone());
    let testimonials = ctx.select(|c| c.testimonials.clone());

    let label = move |pick: fn(&Labels) -> &String| {
        Signal::derive(move || labels.with(|l| pick(l).clone()))
    };

    view! {
        <section id="testimonials" class="section testimonials-section">
            <div class="container">
                <SectionHeader
                    kicker=label(|l| &l.testimonials_kicker)
                    title=label(|l| &l.testimonials_title)
                    intro=label(|l| &l.testimonials_intro)
                />
                <div class="testimonials-grid">
                    <For
                        each=move || testimonials.get()
                        key=|t| t.id.clone()
                        children=|t| view! { <TestimonialCard testimonial=t /> }
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
    fn test_stars() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "★☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
