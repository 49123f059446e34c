//! Shell configuration
//!
//! Resolved once by the composition root before launch and provided to the
//! UI as root context. Native builds read environment variables (optionally
//! from `.env.local` / `.env` at the workspace root); web builds use the
//! compile-time build mode and defaults.

use scenedeck_domain::{BuildMode, Theme};

use crate::state::{AppSeed, DEFAULT_TITLE};

pub const ENV_BUILD_MODE: &str = "SCENEDECK_BUILD_MODE";
pub const ENV_TITLE: &str = "SCENEDECK_TITLE";
pub const ENV_THEME: &str = "SCENEDECK_THEME";

#[derive(Clone, Debug, PartialEq)]
pub struct ShellConfig {
    pub build_mode: BuildMode,
    pub title: String,
    pub theme: Theme,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            build_mode: BuildMode::detect(),
            title: DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    /// Build a config from a variable lookup.
    ///
    /// Unparseable values are logged and replaced by their default; blank
    /// values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let build_mode = read(ENV_BUILD_MODE)
            .and_then(|raw| match raw.parse::<BuildMode>() {
                Ok(mode) => Some(mode),
                Err(err) => {
                    tracing::warn!(error = %err, var = ENV_BUILD_MODE, "Ignoring invalid value");
                    None
                }
            })
            .unwrap_or(defaults.build_mode);

        let theme = read(ENV_THEME)
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    tracing::warn!(error = %err, var = ENV_THEME, "Ignoring invalid value");
                    None
                }
            })
            .unwrap_or(defaults.theme);

        let title = read(ENV_TITLE).unwrap_or(defaults.title);

        Self {
            build_mode,
            title,
            theme,
        }
    }

    pub fn seed(&self) -> AppSeed {
        AppSeed {
            title: self.title.clone(),
            theme: self.theme,
        }
    }
}

/// A dotenv file that exists but could not be loaded.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DotenvFailure {
    pub path: std::path::PathBuf,
    pub error: dotenvy::Error,
}

/// Load `.env.local` then `.env` from the workspace root, if present.
///
/// Runs before logging is up, so failures are returned for the caller to
/// report once the subscriber is installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv_from_repo_root() -> Vec<DotenvFailure> {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");
    load_dotenv_files(&repo_root)
}

/// Load `.env.local` then `.env` from `dir`. Existing process variables win
/// over file values; missing files are skipped.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv_files(dir: &std::path::Path) -> Vec<DotenvFailure> {
    [".env.local", ".env"]
        .into_iter()
        .map(|filename| dir.join(filename))
        .filter(|path| path.exists())
        .filter_map(|path| match dotenvy::from_path(&path) {
            Ok(()) => None,
            Err(error) => Some(DotenvFailure { path, error }),
        })
        .collect()
}
