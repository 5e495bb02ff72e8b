//! Navigation Header Component
//!
//! Fixed header with section links, theme and locale toggles, and the mobile
//! menu. Turns opaque once the page is scrolled.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom;
use crate::models::NavItem;
use crate::store::{
    store_close_mobile_menu, store_toggle_dark_mode, store_toggle_locale, store_toggle_mobile_menu,
    use_ui_store, UiStateStoreFields,
};

#[component]
fn NavLinks(items: Memo<Vec<NavItem>>, class: &'static str) -> impl IntoView {
    let store = use_ui_store();

    view! {
        <ul class=class>
            <For
                each=move || items.get()
                key=|item| item.id.clone()
                children=move |item| {
                    let target = item.id.clone();
                    view! {
                        <li>
                            <a
                                href=format!("#{}", item.id)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    dom::scroll_to_section(&target);
                                    store_close_mobile_menu(&store);
                                }
                            >
                                {item.label.clone()}
                            </a>
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
pub fn NavHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let nav = ctx.select(|c| c.nav.clone());
    let logo = ctx.select(|c| c.profile.logo.clone());
    let name = ctx.select(|c| c.profile.name.clone());

    let header_class = move || {
        if store.scrolled().get() {
            "nav-header scrolled"
        } else {
            "nav-header"
        }
    };

    view! {
        <header class=header_class>
            <nav class="container nav-inner">
                <a
                    class="nav-brand"
                    href="#hero"
                    on:click=move |ev| {
                        ev.prevent_default();
                        dom::scroll_to_section("hero");
                    }
                >
                    <img src=move || ctx.asset_url(&logo.get()) alt=move || name.get() />
                </a>

                <NavLinks items=nav class="nav-links desktop" />

                <div class="nav-actions">
                    <button
                        class="nav-btn locale-toggle"
                        title="Language"
                        on:click=move |_| store_toggle_locale(&store)
                    >
                        {move || store.locale().get().toggled().as_str().to_uppercase()}
                    </button>
                    <button
                        class="nav-btn theme-toggle"
                        title="Theme"
                        on:click=move |_| store_toggle_dark_mode(&store)
                    >
                        {move || if store.dark_mode().get() { "☀️" } else { "🌙" }}
                    </button>
                    <button
                        class="nav-btn menu-toggle"
                        aria-label="Menu"
                        aria-expanded=move || store.mobile_menu_open().get().to_string()
                        on:click=move |_| store_toggle_mobile_menu(&store)
                    >
                        {move || if store.mobile_menu_open().get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>

            <Show when=move || store.mobile_menu_open().get()>
                <div class="mobile-menu">
                    <NavLinks items=nav class="nav-links mobile" />
                </div>
            </Show>
        </header>
    }
}
