//! Build mode flag
//!
//! Distinguishes development from production behavior. The value is resolved
//! once by the composition root and then only ever passed around by value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Build mode of the current binary, taken from `debug_assertions`.
    pub const fn detect() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" | "debug" => Ok(BuildMode::Development),
            "prod" | "production" | "release" => Ok(BuildMode::Production),
            other => Err(DomainError::parse(format!("Unknown build mode: {other}"))),
        }
    }
}
