use gloo_timers::callback::Timeout;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::NodeRef;

use crate::config;

/// Smooth-scrolls `target` to the top of the viewport once the current
/// render has been committed.
pub fn scroll_into_view_later(target: &NodeRef) {
    let target = target.clone();
    let timeout = Timeout::new(config::SCROLL_DELAY_MS, move || {
        if let Some(element) = target.cast::<Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
    timeout.forget();
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
