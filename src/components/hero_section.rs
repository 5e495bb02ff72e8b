//! Hero Section Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom;

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_app_context();
    let profile = ctx.select(|c| c.profile.clone());
    let photo = move || profile.with(|p| ctx.asset_url(&p.photo));

    view! {
        <section id="hero" class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-inner">
                <div class="hero-text">
                    <span class="badge role-badge">{move || profile.with(|p| p.role_badge.clone())}</span>
                    <h1 class="hero-name gradient-text">{move || profile.with(|p| p.name.clone())}</h1>
                    <p class="hero-title">{move || profile.with(|p| p.title.clone())}</p>
                    <p class="hero-tagline">{move || profile.with(|p| p.tagline.clone())}</p>
                    <button class="btn btn-primary hero-cta" on:click=move |_| dom::scroll_to_section("contact")>
                        {move || profile.with(|p| p.cta.clone())}
                    </button>
                    <div class="hero-stats">
                        <For
                            each=move || profile.with(|p| p.hero_stats.clone())
                            key=|stat| stat.label.clone()
                            children=|stat| view! {
                                <div class="hero-stat">
                                    <span class="stat-value">{stat.value.clone()}</span>
                                    <span class="stat-label">{stat.label.clone()}</span>
                                </div>
                            }
                        />
                    </div>
                </div>
                <div class="hero-photo">
                    <img src=photo alt=move || profile.with(|p| p.name.clone()) />
                </div>
            </div>
            <button class="scroll-hint" aria-label="scroll" on:click=move |_| dom::scroll_to_section("bio")>
                "↓"
            </button>
        </section>
    }
}
