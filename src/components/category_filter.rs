//! Category Filter Component
//!
//! Filter buttons for a catalog view, "all" first.

use leptos::prelude::*;
use leptos_disclosure::{DisclosureSignals, Filter};

use crate::models::Labels;

/// Filter bar bound to one view's disclosure state
#[component]
pub fn CategoryFilter(
    categories: Memo<Vec<Filter>>,
    disclosure: DisclosureSignals,
    labels: Memo<Labels>,
    #[prop(optional)] show_label: bool,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            {show_label.then(|| view! {
                <span class="filter-label">
                    <span class="filter-icon">"⏷"</span>
                    {move || labels.with(|l| l.filter_by.clone())}
                </span>
            })}
            <For
                each=move || categories.get()
                key=|filter| filter.label().to_string()
                children=move |filter| {
                    let tag = filter.label().to_string();
                    let click_tag = tag.clone();
                    let name_tag = tag.clone();
                    let is_active = move || disclosure.filter().label() == tag;
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| disclosure.select_category(&click_tag)
                        >
                            {move || labels.with(|l| l.category_name(&name_tag))}
                        </button>
                    }
                }
            />
        </div>
    }
}
