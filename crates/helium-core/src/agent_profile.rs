//! Agent persona record and structural overrides.

use crate::tool_flags::ToolFlags;
use serde::{Deserialize, Serialize};

/// External tool-integration descriptor attached to a profile.
///
/// The contents are owned by the agent-config service; this crate only
/// carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpDescriptor {
    /// Display name of the integration.
    pub name: String,
    /// Fully qualified integration identifier.
    #[serde(default)]
    pub qualified_name: String,
    /// Integration-specific settings.
    #[serde(default)]
    pub config: serde_json::Value,
    /// Tools exposed by the integration that the agent may call.
    #[serde(default)]
    pub enabled_tools: Vec<String>,
}

/// Identity, instructions and tool capabilities of an agent persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Display identifier of the persona.
    pub name: String,
    /// Short description for selection UIs.
    pub description: String,
    pub avatar: String,
    pub avatar_color: String,
    /// Model used outside production. Callers should go through
    /// [`crate::ModelResolver`] rather than reading this directly.
    pub fallback_model: String,
    /// Instruction text handed to the reasoning engine as-is.
    pub system_prompt: String,
    #[serde(default)]
    pub configured_mcps: Vec<McpDescriptor>,
    #[serde(default)]
    pub custom_mcps: Vec<McpDescriptor>,
    #[serde(default)]
    pub tool_flags: ToolFlags,
    /// Whether this is the platform's fallback persona. Uniqueness across
    /// profiles is the hosting system's concern.
    #[serde(default)]
    pub is_default: bool,
}

/// Field overrides used to derive a variant persona.
///
/// Unset fields are copied from the base profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub avatar_color: Option<String>,
    pub fallback_model: Option<String>,
    pub system_prompt: Option<String>,
    pub configured_mcps: Option<Vec<McpDescriptor>>,
    pub custom_mcps: Option<Vec<McpDescriptor>>,
    /// Individual flags to set on top of the base mapping.
    pub tool_flags: Vec<(String, bool)>,
    pub is_default: Option<bool>,
}

impl ProfileOverrides {
    pub fn tool_flag(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.tool_flags.push((name.into(), enabled));
        self
    }
}

impl AgentProfile {
    /// Build a new profile from this one with `overrides` applied.
    ///
    /// The receiver is never modified. The result is not a default profile
    /// unless the overrides say so.
    pub fn with_overrides(&self, overrides: ProfileOverrides) -> AgentProfile {
        let tool_flags = overrides
            .tool_flags
            .into_iter()
            .fold(self.tool_flags.clone(), |flags, (name, enabled)| {
                flags.with(name, enabled)
            });

        AgentProfile {
            name: overrides.name.unwrap_or_else(|| self.name.clone()),
            description: overrides
                .description
                .unwrap_or_else(|| self.description.clone()),
            avatar: overrides.avatar.unwrap_or_else(|| self.avatar.clone()),
            avatar_color: overrides
                .avatar_color
                .unwrap_or_else(|| self.avatar_color.clone()),
            fallback_model: overrides
                .fallback_model
                .unwrap_or_else(|| self.fallback_model.clone()),
            system_prompt: overrides
                .system_prompt
                .unwrap_or_else(|| self.system_prompt.clone()),
            configured_mcps: overrides
                .configured_mcps
                .unwrap_or_else(|| self.configured_mcps.clone()),
            custom_mcps: overrides
                .custom_mcps
                .unwrap_or_else(|| self.custom_mcps.clone()),
            tool_flags,
            is_default: overrides.is_default.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AgentProfile, McpDescriptor, ProfileOverrides};
    use crate::tool_flags::{Tool, ToolFlags, ToolStatus};

    fn base() -> AgentProfile {
        AgentProfile {
            name: "Base".to_string(),
            description: "Base persona".to_string(),
            avatar: "B".to_string(),
            avatar_color: "#000000".to_string(),
            fallback_model: "vertexai/gemini-2.5-pro".to_string(),
            system_prompt: "You are a test persona.".to_string(),
            configured_mcps: Vec::new(),
            custom_mcps: Vec::new(),
            tool_flags: ToolFlags::all(&[Tool::Shell, Tool::Browser], true),
            is_default: true,
        }
    }

    #[test]
    fn test_overrides_copy_unset_fields() {
        let base = base();
        let variant = base.with_overrides(ProfileOverrides {
            name: Some("Variant".to_string()),
            ..Default::default()
        });

        assert_eq!(variant.name, "Variant");
        assert_eq!(variant.description, base.description);
        assert_eq!(variant.fallback_model, base.fallback_model);
        assert_eq!(variant.tool_flags, base.tool_flags);
    }

    #[test]
    fn test_overrides_do_not_touch_base() {
        let base = base();
        let snapshot = base.clone();
        let variant = base.with_overrides(
            ProfileOverrides::default()
                .tool_flag(Tool::Shell.key(), false)
                .tool_flag(Tool::Vision.key(), true),
        );

        assert_eq!(base, snapshot);
        assert_eq!(variant.tool_flags.status_of(Tool::Shell), ToolStatus::Disabled);
        assert_eq!(variant.tool_flags.status_of(Tool::Vision), ToolStatus::Enabled);
        assert_eq!(variant.tool_flags.status_of(Tool::Browser), ToolStatus::Enabled);
    }

    #[test]
    fn test_variant_is_not_default_unless_requested() {
        let base = base();
        assert!(!base.with_overrides(ProfileOverrides::default()).is_default);

        let promoted = base.with_overrides(ProfileOverrides {
            is_default: Some(true),
            ..Default::default()
        });
        assert!(promoted.is_default);
    }

    #[test]
    fn test_mcp_descriptor_uses_camel_case() {
        let raw = r#"{
            "name": "Exa Search",
            "qualifiedName": "exa",
            "config": {"apiKey": "k"},
            "enabledTools": ["web_search_exa"]
        }"#;

        let parsed: McpDescriptor = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.qualified_name, "exa");
        assert_eq!(parsed.enabled_tools, vec!["web_search_exa".to_string()]);
    }

    #[test]
    fn test_profile_missing_optional_fields_defaults() {
        let raw = r##"{
            "name": "Lite",
            "description": "d",
            "avatar": "L",
            "avatar_color": "#fff",
            "fallback_model": "m",
            "system_prompt": "p"
        }"##;

        let parsed: AgentProfile = serde_json::from_str(raw).unwrap();
        assert!(parsed.configured_mcps.is_empty());
        assert!(parsed.tool_flags.is_empty());
        assert!(!parsed.is_default);
    }
}
