//! Named tool capability switches exposed to the tool-dispatch layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tool capabilities known to the Helium persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tool {
    Shell,
    Files,
    Deploy,
    WebSearch,
    Vision,
    ImageEdit,
    Sheets,
    Browser,
    DataProviders,
    CredentialProfiles,
    Workflows,
    Triggers,
    Presentation,
    WebDev,
}

impl Tool {
    /// Every known capability, in declaration order.
    pub const ALL: [Tool; 14] = [
        Tool::Shell,
        Tool::Files,
        Tool::Deploy,
        Tool::WebSearch,
        Tool::Vision,
        Tool::ImageEdit,
        Tool::Sheets,
        Tool::Browser,
        Tool::DataProviders,
        Tool::CredentialProfiles,
        Tool::Workflows,
        Tool::Triggers,
        Tool::Presentation,
        Tool::WebDev,
    ];

    /// Key used for this capability in a flags mapping.
    pub fn key(self) -> &'static str {
        match self {
            Tool::Shell => "sb_shell_tool",
            Tool::Files => "sb_files_tool",
            Tool::Deploy => "sb_deploy_tool",
            Tool::WebSearch => "web_search_tool",
            Tool::Vision => "sb_vision_tool",
            Tool::ImageEdit => "sb_image_edit_tool",
            Tool::Sheets => "sb_sheets_tool",
            Tool::Browser => "browser_tool",
            Tool::DataProviders => "data_providers_tool",
            Tool::CredentialProfiles => "credential_profile_tool",
            Tool::Workflows => "workflow_tool",
            Tool::Triggers => "trigger_tool",
            Tool::Presentation => "sb_presentation_tool",
            Tool::WebDev => "sb_web_dev_tool",
        }
    }

    /// Look up a known capability by its key.
    pub fn from_key(key: &str) -> Option<Tool> {
        Self::ALL.into_iter().find(|tool| tool.key() == key)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolved state of a capability in a flags mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Enabled,
    Disabled,
    /// The key is absent. This is not the same as disabled.
    Unsupported,
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ToolStatus::Enabled => "enabled",
            ToolStatus::Disabled => "disabled",
            ToolStatus::Unsupported => "unsupported",
        };
        f.write_str(label)
    }
}

/// Mapping from capability name to enabled/disabled.
///
/// Keys are unique and iterate in sorted order, so two reads of the same
/// mapping always produce the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolFlags(BTreeMap<String, bool>);

impl ToolFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags for the given capabilities, all set to `enabled`.
    pub fn all(tools: &[Tool], enabled: bool) -> Self {
        tools.iter().map(|tool| (tool.key(), enabled)).collect()
    }

    /// Raw flag value, `None` if the key is not part of this mapping.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    pub fn status(&self, name: &str) -> ToolStatus {
        match self.get(name) {
            Some(true) => ToolStatus::Enabled,
            Some(false) => ToolStatus::Disabled,
            None => ToolStatus::Unsupported,
        }
    }

    pub fn status_of(&self, tool: Tool) -> ToolStatus {
        self.status(tool.key())
    }

    /// Names of enabled capabilities in key order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, enabled)| (name.as_str(), *enabled))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this mapping with one flag set.
    pub fn with(&self, name: impl Into<String>, enabled: bool) -> Self {
        let mut flags = self.0.clone();
        flags.insert(name.into(), enabled);
        Self(flags)
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for ToolFlags {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
