//! Section Header Component
//!
//! Kicker line, two-tone title and optional intro paragraph shared by every section.

use leptos::prelude::*;

/// Split a title so its last word can be rendered with the accent gradient
pub fn split_accent(title: &str) -> (String, String) {
    let title = title.trim();
    match title.rsplit_once(' ') {
        Some((lead, last)) => (format!("{} ", lead), last.to_string()),
        None => (String::new(), title.to_string()),
    }
}

#[component]
pub fn SectionHeader(
    kicker: Signal<String>,
    title: Signal<String>,
    #[prop(optional)] intro: Option<Signal<String>>,
) -> impl IntoView {
    let parts = Memo::new(move |_| title.with(|t| split_accent(t)));

    view! {
        <div class="section-header">
            <div class="section-kicker">
                <span class="kicker-line"></span>
                <span class="kicker-text">{move || kicker.get()}</span>
                <span class="kicker-line"></span>
            </div>
            <h2 class="section-title">
                <span class="title-lead">{move || parts.get().0}</span>
                <span class="gradient-text">{move || parts.get().1}</span>
            </h2>
            {intro.map(|intro| view! { <p class="section-intro">{move || intro.get()}</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_accent() {
        assert_eq!(split_accent("Featured Projects"), ("Featured ".to_string(), "Projects".to_string()));
        assert_eq!(split_accent("Let's Connect"), ("Let's ".to_string(), "Connect".to_string()));
        assert_eq!(split_accent("Portfolio"), (String::new(), "Portfolio".to_string()));
        assert_eq!(split_accent(""), (String::new(), String::new()));
    }
}
