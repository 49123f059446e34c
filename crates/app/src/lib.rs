//! SceneDeck application crate.
//!
//! The UI is a Dioxus app rooted at [`ApplicationShell`]. Multi-platform
//! support (desktop and web) is selected at compile time via `cfg`.

pub mod components;
pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod routes;
pub mod shell;
pub mod state;

use dioxus::prelude::*;

pub use config::ShellConfig;
pub use routes::Route;
pub use shell::ApplicationShell;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Launch entrypoint. Expects a [`ShellConfig`] in root context.
pub fn app() -> Element {
    // Provided by the composition root (see `crates/app/src/main.rs`).
    let config = use_context::<ShellConfig>();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        ApplicationShell {
            build_mode: config.build_mode,
            seed: config.seed(),
        }
    }
}
