//! State providers - application state and scene state
//!
//! Both containers are constructed explicitly by their provider component and
//! handed to descendants through Dioxus context.

pub mod app_state;
pub mod scene_state;

pub use app_state::{use_app_state, AppSeed, AppState, AppStateProvider, DEFAULT_TITLE};
pub use scene_state::{use_scene_state, SceneState, SceneStateProvider};
