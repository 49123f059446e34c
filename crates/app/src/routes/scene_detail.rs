//! Scene detail page
//!
//! A path segment that is not a scene id is a render failure and is handled
//! by the fault boundary. A well-formed id with no matching scene renders an
//! inline message instead.

use super::Route;
use crate::state::use_scene_state;
use dioxus::prelude::*;
use scenedeck_domain::SceneId;

#[component]
pub fn SceneDetailRoute(id: String) -> Element {
    let mut scenes = use_scene_state();
    let navigator = use_navigator();

    let scene_id: SceneId = id.parse()?;

    let Some(scene) = scenes.find(scene_id) else {
        return rsx! {
            section {
                class: "page page-scene-missing",
                h1 { "Scene not found" }
                p { "No scene with id {scene_id} exists." }
                Link {
                    to: Route::SceneListRoute {},
                    "Back to scenes"
                }
            }
        };
    };

    let is_active = scenes.active_scene().map(|active| active.id) == Some(scene.id);

    rsx! {
        section {
            class: "page page-scene",
            h1 { "{scene.name}" }
            if scene.description.is_empty() {
                p { class: "muted", "No description." }
            } else {
                p { "{scene.description}" }
            }
            div {
                class: "actions",
                if is_active {
                    span { class: "badge", "Active" }
                } else {
                    button {
                        onclick: move |_| {
                            if let Err(err) = scenes.select(scene_id) {
                                tracing::warn!(error = %err, "Could not select scene");
                            }
                        },
                        "Make active"
                    }
                }
                button {
                    class: "danger",
                    onclick: move |_| {
                        if scenes.remove_scene(scene_id) {
                            navigator.push(Route::SceneListRoute {});
                        }
                    },
                    "Delete"
                }
            }
        }
    }
}
