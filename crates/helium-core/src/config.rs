use crate::error::HeliumError;
use crate::selection::{ModelPool, PoolEntry, SelectionError, SelectionPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The same model served by equivalent backends.
const DEFAULT_PRODUCTION_POOL: [&str; 3] = [
    "vertexai/gemini-2.5-pro",
    "gemini/gemini-2.5-pro",
    "openrouter/google/gemini-2.5-pro",
];

/// Serialized operator settings from ~/.helium/config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub production_pool: Vec<PoolEntry>,
    pub selection_policy: SelectionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            production_pool: DEFAULT_PRODUCTION_POOL
                .iter()
                .map(|model| PoolEntry::new(*model))
                .collect(),
            selection_policy: SelectionPolicy::Uniform,
        }
    }
}

impl Config {
    /// Build the production selector described by this config.
    pub fn model_pool(&self) -> Result<ModelPool, SelectionError> {
        ModelPool::new(self.production_pool.clone(), self.selection_policy)
    }
}

/// Helper struct for storing the location to read/write operator settings
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".helium");
        path.push("config.json");
        Self { path }
    }

    /// Use an explicit file location (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved config. A missing file yields Default; an unreadable
    /// or malformed file is an error.
    pub fn try_load(&self) -> Result<Config, HeliumError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the saved config, or fallback to Default
    pub fn load(&self) -> Config {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), "Ignoring unreadable config: {e}");
            Config::default()
        })
    }

    /// Save the config back to disk
    pub fn save(&self, config: &Config) -> Result<(), HeliumError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
