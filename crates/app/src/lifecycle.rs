//! Provider lifecycle notifications
//!
//! Each state provider reports exactly one mount and one release per mount
//! cycle. The composition root may install its own observer as root context;
//! otherwise mounts and releases are only logged.

use dioxus::prelude::*;
use std::sync::Arc;

/// Which state provider a lifecycle notification refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    AppState,
    SceneState,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::AppState => "app-state",
            ProviderKind::SceneState => "scene-state",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ProviderObserver: Send + Sync {
    /// Called once after the provider has installed its context
    fn on_mount(&self, kind: ProviderKind);

    /// Called once when a successfully mounted provider is dropped
    fn on_release(&self, kind: ProviderKind);
}

pub type SharedObserver = Arc<dyn ProviderObserver>;

/// Default observer: logs lifecycle events
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl ProviderObserver for TracingObserver {
    fn on_mount(&self, kind: ProviderKind) {
        tracing::debug!(provider = kind.as_str(), "Provider mounted");
    }

    fn on_release(&self, kind: ProviderKind) {
        tracing::debug!(provider = kind.as_str(), "Provider released");
    }
}

/// Hook returning the installed observer, or a [`TracingObserver`].
pub fn use_provider_observer() -> SharedObserver {
    use_hook(|| {
        try_consume_context::<SharedObserver>()
            .unwrap_or_else(|| Arc::new(TracingObserver) as SharedObserver)
    })
}
