//! Scene records
//!
//! Scenes are flat records; the shell only lists, selects and removes them.

use serde::{Deserialize, Serialize};

use crate::{DomainError, SceneId};

/// Maximum length of a scene name, in characters
pub const MAX_SCENE_NAME_LEN: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
    pub description: String,
}

impl Scene {
    /// Create a scene with a fresh id.
    ///
    /// The name is trimmed and must be non-empty and at most
    /// [`MAX_SCENE_NAME_LEN`] characters.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self, DomainError> {
        let name = validate_scene_name(&name.into())?;
        Ok(Self {
            id: SceneId::new(),
            name,
            description: description.into().trim().to_string(),
        })
    }

    /// Case-insensitive name comparison used for duplicate detection
    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

fn validate_scene_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Scene name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_SCENE_NAME_LEN {
        return Err(DomainError::validation(format!(
            "Scene name cannot exceed {MAX_SCENE_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}
