//! Leptos Disclosure Utilities
//!
//! Category filtering, "show more" pagination and single-item detail selection
//! for static catalog views (project galleries, timelines).
//!
//! The derivation is a pure pipeline: filter -> partition (featured / regular) -> slice.
//! [`DisclosureState`] holds the three pieces of UI state for one view instance and
//! [`signals::DisclosureSignals`] wraps it in Leptos signals for click handlers.
//!
//! # Input contract
//! Item ids must be unique within one catalog. Nothing here enforces it; with
//! duplicates the functions still return, but keyed rendering and selection lookups
//! may match the wrong item.

pub mod signals;

pub use signals::{create_disclosure_signals, DisclosureSignals};

/// Label of the sentinel filter that disables category filtering
pub const ALL_LABEL: &str = "all";

/// Number of regular items revealed initially and per "show more" click
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// An entry of a static catalog
pub trait CatalogItem {
    /// Stable unique key, used for keyed rendering and selection
    fn id(&self) -> &str;

    /// Category tag. `None` means the item only shows up in the unfiltered view.
    fn category(&self) -> Option<&str>;

    fn is_featured(&self) -> bool {
        false
    }
}

/// Active category filter
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Filter::All
        } else {
            Filter::Category(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Filter::All => ALL_LABEL,
            Filter::Category(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(name) => item.category() == Some(name.as_str()),
        }
    }
}

/// Which rendering mode a view is in, derived from the filter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// "all": featured section plus paginated regular grid
    UnfilteredPaginated,
    /// a specific category: every match in one flat list, no pagination
    FilteredUnpaginated,
}

// ========================
// Pure derivation functions
// ========================

/// Filter options for a catalog: `All` first, then distinct categories in
/// first-occurrence order. Items without a category contribute nothing.
pub fn derive_categories<T: CatalogItem>(catalog: &[T]) -> Vec<Filter> {
    let mut categories = vec![Filter::All];
    for category in catalog.iter().filter_map(|item| item.category()) {
        if !categories.iter().any(|f| f.label() == category) {
            categories.push(Filter::Category(category.to_string()));
        }
    }
    categories
}

/// Items matching `filter`, in catalog order
pub fn apply_filter<'a, T: CatalogItem>(catalog: &'a [T], filter: &Filter) -> Vec<&'a T> {
    catalog.iter().filter(|item| filter.matches(*item)).collect()
}

/// Split into (featured, regular), both keeping their relative order
pub fn partition_featured<'a, T: CatalogItem>(items: &[&'a T]) -> (Vec<&'a T>, Vec<&'a T>) {
    items.iter().copied().partition(|item| item.is_featured())
}

/// The first `cursor` items, clamped to the slice length
pub fn visible_slice<T>(regular: &[T], cursor: usize) -> &[T] {
    &regular[..cursor.min(regular.len())]
}

pub fn has_more(cursor: usize, total: usize) -> bool {
    cursor < total
}

/// Advance the cursor by one page, saturating at `total`.
/// Never moves backwards, even if `cursor` already exceeds `total`.
pub fn reveal_more(cursor: usize, page_size: usize, total: usize) -> usize {
    if cursor >= total {
        cursor
    } else {
        cursor.saturating_add(page_size).min(total)
    }
}

// ========================
// Per-view state
// ========================

/// Filter, pagination cursor and open detail for one gallery/timeline instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureState {
    filter: Filter,
    cursor: usize,
    page_size: usize,
    selection: Option<String>,
}

impl Default for DisclosureState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DisclosureState {
    /// Initial state: unfiltered, one page revealed, nothing selected.
    /// A page size of 0 is treated as 1 so "show more" always makes progress.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            filter: Filter::All,
            cursor: page_size,
            page_size,
            selection: None,
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn mode(&self) -> Mode {
        if self.filter.is_all() {
            Mode::UnfilteredPaginated
        } else {
            Mode::FilteredUnpaginated
        }
    }

    /// Switch filter. The cursor always goes back to one page, even when
    /// re-selecting the current filter.
    pub fn select_category(&mut self, label: &str) {
        self.filter = Filter::from_label(label);
        self.cursor = self.page_size;
        log::debug!(target: "disclosure", "filter -> {}, cursor reset to {}", label, self.cursor);
    }

    /// Reveal one more page out of `total` regular items. Ignored under a category filter.
    pub fn reveal_more(&mut self, total: usize) {
        if self.mode() != Mode::UnfilteredPaginated {
            return;
        }
        self.cursor = reveal_more(self.cursor, self.page_size, total);
        log::debug!(target: "disclosure", "reveal more -> cursor {} of {}", self.cursor, total);
    }

    /// Open `id`'s detail, replacing any other open detail. Toggling the open item closes it.
    pub fn toggle_selection(&mut self, id: &str) {
        if self.is_selected(id) {
            self.dismiss();
        } else {
            self.open(id);
        }
    }

    pub fn open(&mut self, id: &str) {
        self.selection = Some(id.to_string());
        log::debug!(target: "disclosure", "detail open: {}", id);
    }

    pub fn dismiss(&mut self) {
        if let Some(id) = self.selection.take() {
            log::debug!(target: "disclosure", "detail closed: {}", id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.as_deref() == Some(id)
    }

    /// Compute what the view renders for `catalog` in the current state
    pub fn derive<T: CatalogItem + Clone>(&self, catalog: &[T]) -> DisclosureView<T> {
        let filtered = apply_filter(catalog, &self.filter);
        match self.mode() {
            Mode::UnfilteredPaginated => {
                let (featured, regular) = partition_featured(&filtered);
                let shown = visible_slice(&regular, self.cursor);
                DisclosureView {
                    featured: featured.into_iter().cloned().collect(),
                    items: shown.iter().map(|item| (*item).clone()).collect(),
                    has_more: has_more(self.cursor, regular.len()),
                    revealed: shown.len(),
                    total: regular.len(),
                }
            }
            Mode::FilteredUnpaginated => {
                let items: Vec<T> = filtered.into_iter().cloned().collect();
                let total = items.len();
                DisclosureView {
                    featured: Vec::new(),
                    items,
                    has_more: false,
                    revealed: total,
                    total,
                }
            }
        }
    }
}

/// Derived output of one view
#[derive(Clone, Debug, PartialEq)]
pub struct DisclosureView<T> {
    /// Featured section; only populated under "all"
    pub featured: Vec<T>,
    /// Main grid
    pub items: Vec<T>,
    /// Whether the "show more" control should render
    pub has_more: bool,
    /// Number of non-featured items currently in `items`
    pub revealed: usize,
    /// Number of non-featured items available under the current filter
    pub total: usize,
}

impl<T> Default for DisclosureView<T> {
    fn default() -> Self {
        Self {
            featured: Vec::new(),
            items: Vec::new(),
            has_more: false,
            revealed: 0,
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Debug, PartialEq)]
    struct Entry {
        id: String,
        category: Option<String>,
        featured: bool,
    }

    impl CatalogItem for Entry {
        fn id(&self) -> &str {
            &self.id
        }
        fn category(&self) -> Option<&str> {
            self.category.as_deref()
        }
        fn is_featured(&self) -> bool {
            self.featured
        }
    }

    fn entry(id: usize, category: &str, featured: bool) -> Entry {
        Entry {
            id: id.to_string(),
            category: Some(category.to_string()),
            featured,
        }
    }

    fn ids(items: &[Entry]) -> Vec<&str> {
        items.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_categories_keep_first_occurrence_order() {
        let catalog = vec![
            entry(1, "web", false),
            entry(2, "fintech", false),
            entry(3, "web", true),
            entry(4, "medical", false),
            Entry { id: "5".into(), category: None, featured: false },
        ];
        let labels: Vec<String> = derive_categories(&catalog)
            .iter()
            .map(|f| f.label().to_string())
            .collect();
        assert_eq!(labels, vec!["all", "web", "fintech", "medical"]);
    }

    #[test]
    fn test_empty_catalog_degrades_to_empty_views() {
        let catalog: Vec<Entry> = Vec::new();
        assert_eq!(derive_categories(&catalog), vec![Filter::All]);

        let view = DisclosureState::default().derive(&catalog);
        assert_eq!(view, DisclosureView::default());
        assert!(!view.has_more);
    }

    #[test]
    fn test_ten_regular_items_reveal_then_saturate() {
        let catalog: Vec<Entry> = (1..=10).map(|i| entry(i, "web", false)).collect();
        let mut state = DisclosureState::new(6);

        let view = state.derive(&catalog);
        assert_eq!(view.items.len(), 6);
        assert!(view.has_more);

        state.reveal_more(view.total);
        let view = state.derive(&catalog);
        assert_eq!(view.items.len(), 10);
        assert!(!view.has_more);

        state.reveal_more(view.total);
        assert_eq!(state.cursor(), 10);
        assert_eq!(state.derive(&catalog).items.len(), 10);
    }

    #[test]
    fn test_category_filter_is_flat_and_unpaginated() {
        let mut catalog: Vec<Entry> = (1..=3).map(|i| entry(i, "fintech", false)).collect();
        catalog.extend((4..=5).map(|i| entry(i, "medical", false)));
        let mut state = DisclosureState::new(1);

        state.select_category("medical");
        let view = state.derive(&catalog);
        assert_eq!(ids(&view.items), vec!["4", "5"]);
        assert!(view.items.iter().all(|e| e.category.as_deref() == Some("medical")));
        assert!(!view.has_more);
        assert_eq!(state.mode(), Mode::FilteredUnpaginated);
    }

    #[test]
    fn test_featured_split_only_under_all() {
        let mut catalog = vec![entry(1, "web", true), entry(2, "web", true)];
        catalog.extend((3..=10).map(|i| entry(i, "mobile", false)));
        let mut state = DisclosureState::new(6);

        let view = state.derive(&catalog);
        assert_eq!(ids(&view.featured), vec!["1", "2"]);
        assert_eq!(view.items.len(), 6);
        assert_eq!(view.total, 8);

        // Featured items lose their separate section under a specific filter
        state.select_category("web");
        let view = state.derive(&catalog);
        assert!(view.featured.is_empty());
        assert_eq!(ids(&view.items), vec!["1", "2"]);
    }

    #[test]
    fn test_switching_filter_resets_cursor() {
        let catalog: Vec<Entry> = (1..=20).map(|i| entry(i, "web", false)).collect();
        let mut state = DisclosureState::new(6);
        state.reveal_more(20);
        state.reveal_more(20);
        assert_eq!(state.cursor(), 18);

        state.select_category("web");
        assert_eq!(state.cursor(), 6);
        state.select_category("all");
        assert_eq!(state.cursor(), 6);
        assert_eq!(state.derive(&catalog).items.len(), 6);
    }

    #[test]
    fn test_reveal_more_ignored_under_filter() {
        let mut state = DisclosureState::new(2);
        state.select_category("web");
        state.reveal_more(10);
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_uncategorised_item_only_visible_under_all() {
        let catalog = vec![
            Entry { id: "x".into(), category: None, featured: false },
            entry(1, "web", false),
        ];
        assert_eq!(apply_filter(&catalog, &Filter::All).len(), 2);
        assert_eq!(apply_filter(&catalog, &Filter::from_label("web")).len(), 1);
        assert!(apply_filter(&catalog, &Filter::from_label("unknown")).is_empty());
    }

    #[test]
    fn test_selection_overwrites_and_dismisses() {
        let mut state = DisclosureState::default();
        state.toggle_selection("a");
        state.toggle_selection("b");
        assert_eq!(state.selection(), Some("b"));
        assert!(!state.is_selected("a"));

        state.dismiss();
        assert_eq!(state.selection(), None);

        state.toggle_selection("c");
        state.toggle_selection("c");
        assert_eq!(state.selection(), None);
    }

    #[test]
    fn test_selection_survives_filter_and_paging() {
        let mut state = DisclosureState::default();
        state.open("3");
        state.select_category("web");
        state.reveal_more(30);
        assert_eq!(state.selection(), Some("3"));
    }

    #[test]
    fn test_zero_page_size_still_progresses() {
        let mut state = DisclosureState::new(0);
        assert_eq!(state.page_size(), 1);
        state.reveal_more(3);
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_reveal_more_never_shrinks_oversized_cursor() {
        assert_eq!(reveal_more(6, 6, 4), 6);
        assert_eq!(reveal_more(4, 6, 4), 4);
        assert_eq!(reveal_more(0, 6, 4), 4);
    }
}
