use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Callback that pushes a route onto the history and scrolls back to the
/// top of the page. Does nothing outside a router.
#[hook]
pub fn use_push_route() -> Callback<Route> {
    let navigator = use_navigator();
    Callback::from(move |route: Route| {
        let Some(navigator) = &navigator else {
            tracing::warn!(?route, "No router available to navigate");
            return;
        };
        tracing::debug!(?route, "Navigating");
        navigator.push(&route);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}
