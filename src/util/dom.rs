//! Small DOM side effects: smooth scrolling and page reload.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Smoothly scroll an element into view. Best-effort: a detached element or a
/// non-browser build does nothing.
#[cfg(feature = "hydrate")]
pub fn scroll_into_view_smooth(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::End);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Reload the current page. Returns `false` when there is no window.
pub fn reload_page() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.location().reload().is_ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
