//! Scene catalog
//!
//! Ordered collection of scenes plus the currently active selection.

use crate::{DomainError, Scene, SceneId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneCatalog {
    scenes: Vec<Scene>,
    active: Option<SceneId>,
}

impl SceneCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scenes in insertion order
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Add a new scene.
    ///
    /// Names are unique within the catalog, compared case-insensitively.
    pub fn add(&mut self, name: &str, description: &str) -> Result<SceneId, DomainError> {
        let scene = Scene::new(name, description)?;
        if self.scenes.iter().any(|existing| existing.has_name(&scene.name)) {
            return Err(DomainError::validation(format!(
                "A scene named '{}' already exists",
                scene.name
            )));
        }
        let id = scene.id;
        self.scenes.push(scene);
        Ok(id)
    }

    /// Remove a scene, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: SceneId) -> Option<Scene> {
        let index = self.scenes.iter().position(|scene| scene.id == id)?;
        if self.active == Some(id) {
            self.active = None;
        }
        Some(self.scenes.remove(index))
    }

    pub fn get(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.id == id)
    }

    pub fn select(&mut self, id: SceneId) -> Result<&Scene, DomainError> {
        let scene = self
            .scenes
            .iter()
            .find(|scene| scene.id == id)
            .ok_or_else(|| DomainError::not_found("Scene", id.to_string()))?;
        self.active = Some(id);
        Ok(scene)
    }

    pub fn active_id(&self) -> Option<SceneId> {
        self.active
    }

    pub fn active(&self) -> Option<&Scene> {
        self.active.and_then(|id| self.get(id))
    }
}
