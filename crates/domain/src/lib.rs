//! SceneDeck domain types.
//!
//! Pure value types shared by the UI crate. Nothing here depends on Dioxus.

pub mod build_mode;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod notice;
pub mod scene;
pub mod theme;

pub use build_mode::BuildMode;
pub use catalog::SceneCatalog;
pub use error::DomainError;
pub use ids::SceneId;
pub use notice::{Notice, NoticeLevel};
pub use scene::{Scene, MAX_SCENE_NAME_LEN};
pub use theme::Theme;
