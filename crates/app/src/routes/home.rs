//! Landing page

use super::Route;
use crate::state::{use_app_state, use_scene_state};
use dioxus::prelude::*;

#[component]
pub fn HomeRoute() -> Element {
    let app = use_app_state();
    let scenes = use_scene_state();

    let title = app.title.read().clone();
    let count = scenes.scene_count();
    let active = scenes.active_scene();

    rsx! {
        section {
            class: "page page-home",
            h1 { "Welcome to {title}" }
            p {
                class: "summary",
                match count {
                    0 => rsx! { "No scenes yet." },
                    1 => rsx! { "1 scene in the catalog." },
                    n => rsx! { "{n} scenes in the catalog." },
                }
            }
            if let Some(scene) = active {
                p {
                    class: "active-scene",
                    "Active scene: "
                    Link {
                        to: Route::scene(scene.id),
                        "{scene.name}"
                    }
                }
            }
            Link {
                class: "button",
                to: Route::SceneListRoute {},
                "Browse scenes"
            }
        }
    }
}
