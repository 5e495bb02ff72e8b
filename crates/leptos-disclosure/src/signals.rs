//! Leptos signal shell around [`DisclosureState`].
//!
//! One `DisclosureSignals` per gallery/timeline instance. Click handlers call the
//! mutators; views read through `view` / `filter` / `is_selected`, which track.

use leptos::prelude::*;

use crate::{CatalogItem, DisclosureState, DisclosureView, Filter};

/// Disclosure state signals
#[derive(Clone, Copy)]
pub struct DisclosureSignals {
    pub state_read: ReadSignal<DisclosureState>,
    pub state_write: WriteSignal<DisclosureState>,
}

pub fn create_disclosure_signals(page_size: usize) -> DisclosureSignals {
    let (state_read, state_write) = signal(DisclosureState::new(page_size));
    DisclosureSignals {
        state_read,
        state_write,
    }
}

impl DisclosureSignals {
    pub fn select_category(&self, label: &str) {
        self.state_write.update(|state| state.select_category(label));
    }

    pub fn reveal_more(&self, total: usize) {
        self.state_write.update(|state| state.reveal_more(total));
    }

    pub fn toggle_selection(&self, id: &str) {
        self.state_write.update(|state| state.toggle_selection(id));
    }

    pub fn open(&self, id: &str) {
        self.state_write.update(|state| state.open(id));
    }

    /// Close the open detail, if any. Does not notify when nothing was open.
    pub fn dismiss(&self) {
        if self.state_read.with_untracked(|state| state.selection().is_some()) {
            self.state_write.update(DisclosureState::dismiss);
        }
    }

    pub fn filter(&self) -> Filter {
        self.state_read.with(|state| state.filter().clone())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state_read.with(|state| state.is_selected(id))
    }

    pub fn selection(&self) -> Option<String> {
        self.state_read.with(|state| state.selection().map(str::to_string))
    }

    pub fn view<T: CatalogItem + Clone>(&self, catalog: &[T]) -> DisclosureView<T> {
        self.state_read.with(|state| state.derive(catalog))
    }
}
