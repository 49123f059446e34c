//! Shell components shared by every route.

mod debug_panel;
mod navbar;

pub use debug_panel::DebugPanel;
pub use navbar::Navbar;
