//! Route table
//!
//! Every route renders inside [`ShellFrame`], so the navbar (and debug panel in
//! development builds) stays mounted across navigation.

mod about;
mod home;
mod not_found;
mod scene_detail;
mod scene_list;

use dioxus::prelude::*;

use crate::shell::ShellFrame;

pub use about::AboutRoute;
pub use home::HomeRoute;
pub use not_found::NotFoundRoute;
pub use scene_detail::SceneDetailRoute;
pub use scene_list::SceneListRoute;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ShellFrame)]
        #[route("/")]
        HomeRoute {},
        #[route("/scenes")]
        SceneListRoute {},
        #[route("/scenes/:id")]
        SceneDetailRoute { id: String },
        #[route("/about")]
        AboutRoute {},
        #[route("/:..segments")]
        NotFoundRoute { segments: Vec<String> },
}

/// Navbar section a route belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Scenes,
    About,
    /// Routes without a navbar entry
    None,
}

impl Route {
    pub fn section(&self) -> NavSection {
        match self {
            Route::HomeRoute {} => NavSection::Home,
            Route::SceneListRoute {} | Route::SceneDetailRoute { .. } => NavSection::Scenes,
            Route::AboutRoute {} => NavSection::About,
            Route::NotFoundRoute { .. } => NavSection::None,
        }
    }

    pub fn scene(id: impl std::fmt::Display) -> Self {
        Route::SceneDetailRoute { id: id.to_string() }
    }
}
