//! Deployment-mode signal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable classifying the running process.
pub const DEPLOYMENT_MODE_ENV: &str = "ENV_MODE";

/// Coarse classification of the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Local development. Also used for absent or unrecognized signals.
    #[default]
    Local,
    Staging,
    Production,
}

impl DeploymentMode {
    /// Parse a signal value, ignoring ASCII case. Surrounding whitespace is
    /// not stripped.
    pub fn parse(raw: &str) -> Option<Self> {
        [Self::Local, Self::Staging, Self::Production]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(raw))
    }

    /// Classify an optional signal value. Never fails: anything that is not a
    /// known mode is treated as `Local`.
    pub fn from_signal(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Local,
            Some(value) => Self::parse(value).unwrap_or_else(|| {
                tracing::debug!(value, "Unrecognized deployment mode, using local");
                Self::Local
            }),
        }
    }

    /// Read the signal from `ENV_MODE`.
    pub fn from_env() -> Self {
        Self::from_env_var(DEPLOYMENT_MODE_ENV)
    }

    /// Read the signal from an arbitrary environment variable.
    pub fn from_env_var(key: &str) -> Self {
        // Non-unicode values count as unrecognized.
        let raw = std::env::var_os(key).map(|value| value.to_string_lossy().into_owned());
        Self::from_signal(raw.as_deref())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
