//! Scene state
//!
//! Wraps the [`SceneCatalog`] in a signal. Mounted inside the application
//! state provider and posts notices to it; application state never reads
//! scene state.

use dioxus::prelude::*;
use scenedeck_domain::{DomainError, Notice, Scene, SceneCatalog, SceneId};

use super::app_state::{use_app_state, AppState};
use crate::lifecycle::{use_provider_observer, ProviderKind};

#[derive(Clone, Copy)]
pub struct SceneState {
    pub catalog: Signal<SceneCatalog>,
    app: AppState,
}

impl SceneState {
    /// Must be called inside an active Dioxus runtime.
    pub fn new(app: AppState) -> Self {
        Self {
            catalog: Signal::new(SceneCatalog::new()),
            app,
        }
    }

    pub fn add_scene(&mut self, name: &str, description: &str) -> Result<SceneId, DomainError> {
        let id = self.catalog.write().add(name, description)?;
        tracing::debug!(scene_id = %id, "Scene added");
        Ok(id)
    }

    /// Returns whether a scene was removed
    pub fn remove_scene(&mut self, id: SceneId) -> bool {
        let removed = self.catalog.write().remove(id);
        match removed {
            Some(scene) => {
                tracing::debug!(scene_id = %id, "Scene removed");
                self.app
                    .notify(Notice::info(format!("Removed scene {}", scene.name)));
                true
            }
            None => false,
        }
    }

    pub fn select(&mut self, id: SceneId) -> Result<(), DomainError> {
        let name = self.catalog.write().select(id)?.name.clone();
        self.app.notify(Notice::info(format!("Active scene: {name}")));
        Ok(())
    }

    pub fn find(&self, id: SceneId) -> Option<Scene> {
        self.catalog.read().get(id).cloned()
    }

    pub fn active_scene(&self) -> Option<Scene> {
        self.catalog.read().active().cloned()
    }

    pub fn scene_count(&self) -> usize {
        self.catalog.read().len()
    }
}

/// Hook to access the scene state from Dioxus context
pub fn use_scene_state() -> SceneState {
    use_context::<SceneState>()
}

/// Owns the scene state for everything nested beneath it.
#[component]
pub fn SceneStateProvider(children: Element) -> Element {
    let observer = use_provider_observer();
    let app = use_app_state();

    use_hook({
        let observer = observer.clone();
        move || {
            provide_context(SceneState::new(app));
            observer.on_mount(ProviderKind::SceneState);
        }
    });

    use_drop(move || observer.on_release(ProviderKind::SceneState));

    rsx! {
        div {
            class: "provider",
            "data-layer": "scene-state",
            {children}
        }
    }
}
