//! Footer Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let name = ctx.select(|c| c.profile.name.clone());
    let rights = ctx.select(|c| c.labels.footer_rights.clone());
    let year = dom::current_year();

    view! {
        <footer class="footer">
            <div class="container">
                <p>{move || format!("© {} {}. {}", year, name.get(), rights.get())}</p>
            </div>
        </footer>
    }
}
