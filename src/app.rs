//! Portfolio App
//!
//! Root component: wires the UI store, the content for the active locale and
//! the window listeners, then lays out the page sections in scroll order.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    BioSection, ContactSection, ExperienceTimeline, Footer, HeroSection, NavHeader, ProjectsGrid,
    SkillsSection, TeamProjects, TestimonialsSection,
};
use crate::config::SiteConfig;
use crate::content::{load_content, Locale};
use crate::context::AppContext;
use crate::dom;
use crate::models::PortfolioContent;
use crate::store::{store_set_scrolled, UiState, UiStateStoreFields};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let store = Store::new(UiState::new(Locale::detect(&config.default_locale)));
    provide_context(store);

    // Content document for the active locale
    let loaded = Memo::new(move |_| {
        let locale = store.locale().get();
        load_content(locale).map_err(|e| {
            log::error!(target: "app", "{}", e);
            e.to_string()
        })
    });

    // Keep showing the last good document if a switch fails
    let content = Memo::new(move |prev: Option<&PortfolioContent>| {
        loaded.with(|result| match result {
            Ok(content) => content.clone(),
            Err(_) => prev.cloned().unwrap_or_default(),
        })
    });
    let load_error = Signal::derive(move || loaded.with(|result| result.as_ref().err().cloned()));

    let threshold = config.scroll_threshold_px;
    provide_context(AppContext::new(content, load_error, config));

    Effect::new(move |_| dom::set_dark_mode(store.dark_mode().get()));
    Effect::new(move |_| dom::set_document_lang(store.locale().get().as_str()));

    dom::bind_window_scroll(threshold, move |scrolled| store_set_scrolled(&store, scrolled));

    log::info!(target: "app", "mounted, locale {}", store.locale().get_untracked());

    view! {
        <NavHeader />
        <Show when=move || load_error.with(Option::is_some)>
            <div class="load-error" role="alert">
                {move || load_error.get().unwrap_or_default()}
            </div>
        </Show>
        <main class="page">
            <HeroSection />
            <BioSection />
            <SkillsSection />
            <ProjectsGrid />
            <ExperienceTimeline />
            <TeamProjects />
            <TestimonialsSection />
            <ContactSection />
        </main>
        <Footer />
    }
}
