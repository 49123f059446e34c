//! Application state
//!
//! Global, non-scene state: the title shown in the navbar, the color theme and
//! the current notice. Created by [`AppStateProvider`] from an [`AppSeed`].

use dioxus::prelude::*;
use scenedeck_domain::{DomainError, Notice, Theme};

use crate::lifecycle::{use_provider_observer, ProviderKind};

pub const DEFAULT_TITLE: &str = "SceneDeck";

/// Initial values for [`AppState`]
#[derive(Clone, Debug, PartialEq)]
pub struct AppSeed {
    pub title: String,
    pub theme: Theme,
}

impl Default for AppSeed {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
        }
    }
}

impl AppSeed {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("Application title cannot be empty"));
        }
        Ok(())
    }
}

/// Application state stored as Dioxus signals
#[derive(Clone, Copy)]
pub struct AppState {
    pub title: Signal<String>,
    pub theme: Signal<Theme>,
    /// Notice shown in the navbar until dismissed
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    /// Must be called inside an active Dioxus runtime.
    pub fn from_seed(seed: &AppSeed) -> Result<Self, DomainError> {
        seed.validate()?;
        Ok(Self {
            title: Signal::new(seed.title.trim().to_string()),
            theme: Signal::new(seed.theme),
            notice: Signal::new(None),
        })
    }

    pub fn toggle_theme(&mut self) {
        let next = self.theme.peek().toggled();
        self.theme.set(next);
        tracing::debug!(theme = %next, "Theme changed");
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice.set(Some(notice));
    }

    pub fn clear_notice(&mut self) {
        self.notice.set(None);
    }
}

/// Hook to access the application state from Dioxus context
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

/// Owns the application state for everything nested beneath it.
///
/// An invalid seed fails the render; the enclosing fault boundary then shows
/// its fallback and nothing below this provider is mounted.
#[component]
pub fn AppStateProvider(seed: AppSeed, children: Element) -> Element {
    let observer = use_provider_observer();

    let mounted = use_hook({
        let observer = observer.clone();
        move || match AppState::from_seed(&seed) {
            Ok(state) => {
                provide_context(state);
                observer.on_mount(ProviderKind::AppState);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Application state failed to mount");
                Err(err)
            }
        }
    });

    let is_mounted = mounted.is_ok();
    use_drop(move || {
        if is_mounted {
            observer.on_release(ProviderKind::AppState);
        }
    });

    mounted?;

    rsx! {
        div {
            class: "provider",
            "data-layer": "app-state",
            {children}
        }
    }
}
