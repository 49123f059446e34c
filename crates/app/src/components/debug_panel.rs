//! Development-only debug panel
//!
//! Only mounted by `ShellFrame` in development builds; production output
//! contains no trace of it.

use dioxus::prelude::*;
use scenedeck_domain::BuildMode;

use crate::routes::Route;
use crate::state::{use_app_state, use_scene_state};

#[component]
pub fn DebugPanel() -> Element {
    let app = use_app_state();
    let scenes = use_scene_state();
    let route = use_route::<Route>();
    let build_mode = use_context::<BuildMode>();
    let mut expanded = use_signal(|| false);

    use_hook(|| tracing::debug!("Debug panel mounted"));

    let is_expanded = *expanded.read();
    let theme = *app.theme.read();
    let scene_count = scenes.scene_count();
    let active = scenes
        .active_scene()
        .map(|scene| scene.name)
        .unwrap_or_else(|| "none".to_string());

    rsx! {
        aside {
            class: "debug-panel",
            "data-layer": "debug-panel",

            button {
                class: "debug-toggle",
                onclick: move |_| {
                    let next = !*expanded.peek();
                    expanded.set(next);
                },
                if is_expanded { "Hide debug" } else { "Debug" }
            }

            if is_expanded {
                dl {
                    dt { "Route" }
                    dd { "{route}" }
                    dt { "Build" }
                    dd { "{build_mode}" }
                    dt { "Theme" }
                    dd { "{theme}" }
                    dt { "Scenes" }
                    dd { "{scene_count}" }
                    dt { "Active scene" }
                    dd { "{active}" }
                }
            }
        }
    }
}
