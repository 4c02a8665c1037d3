//! helium-core: Default agent persona and deployment-aware model resolution.

pub mod agent_profile;
pub mod config;
pub mod default_profile;
pub mod deployment;
mod error;
pub mod model_resolver;
pub mod prompts;
pub mod selection;
pub mod tool_flags;

pub use agent_profile::{AgentProfile, McpDescriptor, ProfileOverrides};
pub use config::{Config, ConfigStore};
pub use default_profile::default_profile;
pub use deployment::{DeploymentMode, DEPLOYMENT_MODE_ENV};
pub use error::HeliumError;
pub use model_resolver::{resolve_model, ModelResolver};
pub use selection::{ModelPool, ModelSelector, PoolEntry, SelectionError, SelectionPolicy};
pub use tool_flags::{Tool, ToolFlags, ToolStatus};
