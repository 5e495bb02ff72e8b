//! Browser Helpers
//!
//! Window listeners and document tweaks used by the page shell.
//! Listeners are bound once at mount and live for the whole page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Header state: true once scrolled strictly past `threshold`
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Call `on_change` with the scrolled flag whenever it flips. Also evaluates once
/// immediately so a reload mid-page starts in the right state.
pub fn bind_window_scroll(threshold: f64, on_change: impl Fn(bool) + 'static) {
    let Some(win) = web_sys::window() else { return };

    let initial = is_scrolled(win.scroll_y().unwrap_or(0.0), threshold);
    on_change(initial);
    let last = std::cell::Cell::new(initial);

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let Some(win) = web_sys::window() else { return };
        let now = is_scrolled(win.scroll_y().unwrap_or(0.0), threshold);
        if now != last.get() {
            last.set(now);
            on_change(now);
        }
    });
    if win
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!(target: "dom", "could not bind scroll listener");
    }
    on_scroll.forget();
}

/// Call `on_escape` when Escape is pressed anywhere on the page
pub fn bind_escape_key(on_escape: impl Fn() + 'static) {
    let Some(win) = web_sys::window() else { return };

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_escape();
        }
    });
    if win
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!(target: "dom", "could not bind keydown listener");
    }
    on_keydown.forget();
}

/// Smooth-scroll to the element with `id`. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(el) => {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        None => log::warn!(target: "dom", "no section with id {:?}", id),
    }
}

/// Toggle the `dark` class on `<html>`
pub fn set_dark_mode(enabled: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if root.class_list().toggle_with_force("dark", enabled).is_err() {
            log::warn!(target: "dom", "could not toggle dark class");
        }
    }
}

/// Set `<html lang>` to the active content locale
pub fn set_document_lang(tag: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("lang", tag);
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }
}
