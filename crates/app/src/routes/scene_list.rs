//! Scene list page: add, select and remove scenes

use super::Route;
use crate::state::{use_app_state, use_scene_state};
use dioxus::prelude::*;
use scenedeck_domain::{Notice, Scene};

#[component]
pub fn SceneListRoute() -> Element {
    let mut scenes = use_scene_state();
    let mut app = use_app_state();
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);

    let catalog = scenes.catalog.read().clone();
    let active_id = catalog.active_id();

    rsx! {
        section {
            class: "page page-scenes",
            h1 { "Scenes" }

            form {
                class: "scene-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let new_name = name.read().clone();
                    let new_description = description.read().clone();
                    match scenes.add_scene(&new_name, &new_description) {
                        Ok(_) => {
                            name.set(String::new());
                            description.set(String::new());
                        }
                        Err(err) => app.notify(Notice::warning(err.to_string())),
                    }
                },
                input {
                    r#type: "text",
                    placeholder: "Scene name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Description (optional)",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                button { r#type: "submit", "Add scene" }
            }

            if catalog.is_empty() {
                p { class: "muted", "No scenes yet. Add one above." }
            } else {
                ul {
                    class: "scene-list",
                    for scene in catalog.scenes().iter().cloned() {
                        SceneRow {
                            key: "{scene.id}",
                            active: active_id == Some(scene.id),
                            scene,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SceneRow(scene: Scene, active: bool) -> Element {
    let mut scenes = use_scene_state();
    let id = scene.id;

    rsx! {
        li {
            class: if active { "scene-row active" } else { "scene-row" },
            Link {
                to: Route::scene(id),
                "{scene.name}"
            }
            if active {
                span { class: "badge", "Active" }
            } else {
                button {
                    onclick: move |_| {
                        if let Err(err) = scenes.select(id) {
                            tracing::warn!(error = %err, "Could not select scene");
                        }
                    },
                    "Select"
                }
            }
            button {
                class: "danger",
                onclick: move |_| {
                    scenes.remove_scene(id);
                },
                "Remove"
            }
        }
    }
}
