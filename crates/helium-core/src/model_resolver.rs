//! Deployment-aware model resolution.

use crate::agent_profile::AgentProfile;
use crate::default_profile::default_profile;
use crate::deployment::DeploymentMode;
use crate::selection::ModelSelector;

/// Picks the model a profile should run on.
///
/// Outside production this is the profile's fallback model. In production
/// the choice is delegated to the selector, and whatever it returns (or the
/// error it raises) is passed back untouched.
pub struct ModelResolver<'a, S> {
    profile: &'a AgentProfile,
    selector: S,
}

impl<'a, S: ModelSelector> ModelResolver<'a, S> {
    pub fn new(profile: &'a AgentProfile, selector: S) -> Self {
        Self { profile, selector }
    }

    pub fn profile(&self) -> &AgentProfile {
        self.profile
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Resolve using the process deployment-mode signal.
    pub fn resolve(&self) -> Result<String, S::Error> {
        self.resolve_for(DeploymentMode::from_env())
    }

    /// Resolve for an explicit deployment mode.
    pub fn resolve_for(&self, mode: DeploymentMode) -> Result<String, S::Error> {
        if mode.is_production() {
            tracing::debug!(profile = %self.profile.name, "Delegating production model selection");
            return self.selector.select_model();
        }

        tracing::debug!(
            profile = %self.profile.name,
            %mode,
            model = %self.profile.fallback_model,
            "Using fallback model"
        );
        Ok(self.profile.fallback_model.clone())
    }
}

/// Resolve the model for the default profile.
pub fn resolve_model<S: ModelSelector>(selector: S) -> Result<String, S::Error> {
    ModelResolver::new(default_profile(), selector).resolve()
}
