//! Application shell
//!
//! Fixed nesting, outermost first:
//!
//! ```text
//! FaultBoundary
//! └─ AppStateProvider
//!    └─ SceneStateProvider
//!       └─ Router::<Route>
//!          └─ ShellFrame: Navbar, Outlet (routed page), DebugPanel (development only)
//! ```
//!
//! A single boundary sits at the top. A provider that fails to mount takes its
//! whole subtree down with it, so scene state never mounts without application
//! state.

mod fault_boundary;

#[cfg(test)]
mod tests;

use dioxus::prelude::*;
use scenedeck_domain::BuildMode;

use crate::components::{DebugPanel, Navbar};
use crate::routes::Route;
use crate::state::{use_app_state, AppSeed, AppStateProvider, SceneStateProvider};

pub use fault_boundary::{ErrorFallback, FaultBoundary};

/// Root of the UI tree.
///
/// `build_mode` is decided by the caller once, before the first render, and
/// exposed to descendants as context.
#[component]
pub fn ApplicationShell(build_mode: BuildMode, #[props(default)] seed: AppSeed) -> Element {
    use_context_provider(|| build_mode);

    rsx! {
        FaultBoundary {
            build_mode,
            AppStateProvider {
                seed,
                SceneStateProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Layout shared by every route: navbar, routed content and, in development
/// builds, the debug panel.
#[component]
pub fn ShellFrame() -> Element {
    let build_mode = use_context::<BuildMode>();
    let app = use_app_state();
    let theme_class = app.theme.read().css_class();

    rsx! {
        div {
            class: "App {theme_class}",
            "data-layer": "frame",

            Navbar {}

            main {
                class: "content",
                "data-layer": "content",
                Outlet::<Route> {}
            }

            if build_mode.is_development() {
                DebugPanel {}
            }
        }
    }
}
