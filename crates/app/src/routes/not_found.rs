//! Catch-all page for unknown paths

use super::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFoundRoute(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        section {
            class: "page page-not-found",
            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link {
                to: Route::HomeRoute {},
                "Back home"
            }
        }
    }
}
