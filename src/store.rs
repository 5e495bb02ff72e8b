//! Page Chrome State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the state
//! that is not owned by a single section: theme, header, mobile menu, locale.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::content::Locale;

/// Page-wide UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    /// Header switches to its opaque style once the page is scrolled
    pub scrolled: bool,
    pub locale: Locale,
}

impl UiState {
    pub fn new(locale: Locale) -> Self {
        Self {
            dark_mode: true,
            locale,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_toggle_dark_mode(store: &UiStore) {
    store.dark_mode().update(|v| *v = !*v);
}

pub fn store_toggle_mobile_menu(store: &UiStore) {
    store.mobile_menu_open().update(|v| *v = !*v);
}

/// Close the mobile menu (after navigating)
pub fn store_close_mobile_menu(store: &UiStore) {
    if store.mobile_menu_open().get_untracked() {
        store.mobile_menu_open().set(false);
    }
}

/// Update the scrolled flag, notifying only on change
pub fn store_set_scrolled(store: &UiStore, scrolled: bool) {
    if store.scrolled().get_untracked() != scrolled {
        store.scrolled().set(scrolled);
    }
}

pub fn store_toggle_locale(store: &UiStore) {
    store.locale().update(|locale| *locale = locale.toggled());
    log::info!(target: "app", "locale -> {}", store.locale().get_untracked());
}
