//! Show More Button Component
//!
//! Reveals the next page of a paginated view. Hidden once everything is shown.

use leptos::prelude::*;

#[component]
pub fn ShowMoreButton(
    visible: Signal<bool>,
    label: Signal<String>,
    /// (revealed, total)
    progress: Signal<(usize, usize)>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="show-more">
                <button class="show-more-btn" on:click=move |_| on_click.run(())>
                    <span>{move || label.get()}</span>
                    <span class="show-more-count">
                        {move || {
                            let (revealed, total) = progress.get();
                            format!("{} / {}", revealed, total)
                        }}
                    </span>
                    <span class="show-more-arrow">"↓"</span>
                </button>
            </div>
        </Show>
    }
}
