//! The canonical Helium persona.

use crate::agent_profile::AgentProfile;
use crate::prompts::HELIUM_SYSTEM_PROMPT;
use crate::tool_flags::{Tool, ToolFlags};
use once_cell::sync::Lazy;

const NAME: &str = "Helium";
const DESCRIPTION: &str = "Helium is your AI assistant with access to various tools \
and integrations to help you with tasks across domains.";
const AVATAR: &str = "🎈";
const AVATAR_COLOR: &str = "#6366F1";
const FALLBACK_MODEL: &str = "vertexai/gemini-2.5-pro";

// Built from constants only: no environment reads and no I/O.
static DEFAULT_PROFILE: Lazy<AgentProfile> = Lazy::new(|| AgentProfile {
    name: NAME.to_string(),
    description: DESCRIPTION.to_string(),
    avatar: AVATAR.to_string(),
    avatar_color: AVATAR_COLOR.to_string(),
    fallback_model: FALLBACK_MODEL.to_string(),
    system_prompt: HELIUM_SYSTEM_PROMPT.to_string(),
    configured_mcps: Vec::new(),
    custom_mcps: Vec::new(),
    tool_flags: ToolFlags::all(&Tool::ALL, true),
    is_default: true,
});

/// Returns the process-wide default profile.
///
/// Derive variants with [`AgentProfile::with_overrides`]; the shared value is
/// only reachable through a shared reference.
pub fn default_profile() -> &'static AgentProfile {
    &DEFAULT_PROFILE
}
