//! Production model selection.
//!
//! [`ModelSelector`] is the capability the resolver delegates to in
//! production. [`ModelPool`] is the stock implementation: a fixed pool of
//! equivalent model deployments and a policy for spreading load across them.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Chooses one model identifier for a production request.
///
/// Implementations must be synchronous and must not retain per-request
/// state visible to the caller.
pub trait ModelSelector: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Select one model identifier.
    fn select_model(&self) -> Result<String, Self::Error>;
}

impl<F, E> ModelSelector for F
where
    F: Fn() -> Result<String, E> + Send + Sync,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn select_model(&self) -> Result<String, E> {
        self()
    }
}

/// Errors raised by [`ModelPool`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// No models configured
    #[error("Model pool is empty")]
    EmptyPool,

    /// Entry without a usable identifier
    #[error("Invalid model identifier: {0:?}")]
    InvalidModel(String),

    /// Weights cannot produce a choice
    #[error("Invalid pool weights: {0}")]
    InvalidWeights(String),
}

/// How a [`ModelPool`] picks among its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Every entry equally likely.
    #[default]
    Uniform,
    /// Probability proportional to each entry's weight.
    Weighted,
    /// Entries in order, wrapping around.
    RoundRobin,
}

/// One model deployment in a pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Provider-qualified model identifier.
    pub model: String,
    /// Relative weight, only consulted by [`SelectionPolicy::Weighted`].
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

impl PoolEntry {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            weight: default_weight(),
        }
    }

    pub fn weighted(model: impl Into<String>, weight: u32) -> Self {
        Self {
            model: model.into(),
            weight,
        }
    }
}

/// Fixed pool of equivalent production models.
#[derive(Debug)]
pub struct ModelPool {
    entries: Vec<PoolEntry>,
    policy: SelectionPolicy,
    cursor: AtomicUsize,
}

impl ModelPool {
    /// Build a pool, rejecting entries no policy could serve.
    pub fn new(entries: Vec<PoolEntry>, policy: SelectionPolicy) -> Result<Self, SelectionError> {
        if entries.is_empty() {
            return Err(SelectionError::EmptyPool);
        }
        if let Some(bad) = entries.iter().find(|entry| entry.model.trim().is_empty()) {
            return Err(SelectionError::InvalidModel(bad.model.clone()));
        }
        if policy == SelectionPolicy::Weighted {
            let total = entries
                .iter()
                .try_fold(0u32, |total, entry| total.checked_add(entry.weight));
            match total {
                None => {
                    return Err(SelectionError::InvalidWeights(
                        "total weight overflows u32".to_string(),
                    ))
                }
                Some(0) => {
                    return Err(SelectionError::InvalidWeights(
                        "at least one entry needs a positive weight".to_string(),
                    ))
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            entries,
            policy,
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    fn pick(&self) -> Result<&PoolEntry, SelectionError> {
        match self.policy {
            SelectionPolicy::Uniform => self
                .entries
                .choose(&mut rand::rng())
                .ok_or(SelectionError::EmptyPool),
            SelectionPolicy::Weighted => self
                .entries
                .choose_weighted(&mut rand::rng(), |entry| entry.weight)
                .map_err(|e| SelectionError::InvalidWeights(e.to_string())),
            SelectionPolicy::RoundRobin => {
                let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.entries.len();
                Ok(&self.entries[index])
            }
        }
    }
}

impl ModelSelector for ModelPool {
    type Error = SelectionError;

    fn select_model(&self) -> Result<String, SelectionError> {
        let entry = self.pick()?;
        tracing::debug!(model = %entry.model, policy = ?self.policy, "Selected production model");
        Ok(entry.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{ModelPool, ModelSelector, PoolEntry, SelectionError, SelectionPolicy};

    fn models(pool: &ModelPool) -> Vec<String> {
        pool.entries().iter().map(|e| e.model.clone()).collect()
    }

    #[test]
    fn test_empty_pool_rejected() {
        let err = ModelPool::new(Vec::new(), SelectionPolicy::Uniform).unwrap_err();
        assert_eq!(err, SelectionError::EmptyPool);
    }

    #[test]
    fn test_blank_model_rejected() {
        let err = ModelPool::new(
            vec![PoolEntry::new("vertexai/model-a"), PoolEntry::new("  ")],
            SelectionPolicy::RoundRobin,
        )
        .unwrap_err();
        assert!(matches!(err, SelectionError::InvalidModel(_)));
    }

    #[test]
    fn test_all_zero_weights_rejected_for_weighted_only() {
        let entries = vec![PoolEntry::weighted("a", 0), PoolEntry::weighted("b", 0)];
        assert!(matches!(
            ModelPool::new(entries.clone(), SelectionPolicy::Weighted),
            Err(SelectionError::InvalidWeights(_))
        ));
        assert!(ModelPool::new(entries, SelectionPolicy::Uniform).is_ok());
    }

    #[test]
    fn test_overflowing_weights_rejected() {
        let entries = vec![
            PoolEntry::weighted("vertexai/model-a", u32::MAX),
            PoolEntry::weighted("vertexai/model-b", 1),
        ];
        let err = ModelPool::new(entries, SelectionPolicy::Weighted).unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidWeights("total weight overflows u32".to_string())
        );
    }

    #[test]
    fn test_max_single_weight_still_selects() {
        let pool = ModelPool::new(
            vec![
                PoolEntry::weighted("vertexai/model-a", u32::MAX),
                PoolEntry::weighted("vertexai/model-b", 0),
            ],
            SelectionPolicy::Weighted,
        )
        .unwrap();
        assert_eq!(pool.select_model().unwrap(), "vertexai/model-a");
    }

    #[test]
    fn test_round_robin_cycles_in_order() {
        let pool = ModelPool::new(
            vec![
                PoolEntry::new("vertexai/model-a"),
                PoolEntry::new("vertexai/model-b"),
                PoolEntry::new("vertexai/model-c"),
            ],
            SelectionPolicy::RoundRobin,
        )
        .unwrap();

        let picks = (0..6)
            .map(|_| pool.select_model().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            picks,
            vec![
                "vertexai/model-a",
                "vertexai/model-b",
                "vertexai/model-c",
                "vertexai/model-a",
                "vertexai/model-b",
                "vertexai/model-c",
            ]
        );
    }

    #[test]
    fn test_uniform_picks_pool_members() {
        let pool = ModelPool::new(
            vec![PoolEntry::new("vertexai/model-a"), PoolEntry::new("vertexai/model-b")],
            SelectionPolicy::Uniform,
        )
        .unwrap();
        let members = models(&pool);

        for _ in 0..50 {
            assert!(members.contains(&pool.select_model().unwrap()));
        }
    }

    #[test]
    fn test_weighted_skips_zero_weight_entries() {
        let pool = ModelPool::new(
            vec![
                PoolEntry::weighted("vertexai/drained", 0),
                PoolEntry::weighted("vertexai/live", 3),
            ],
            SelectionPolicy::Weighted,
        )
        .unwrap();

        for _ in 0..50 {
            assert_eq!(pool.select_model().unwrap(), "vertexai/live");
        }
    }

    #[test]
    fn test_closure_selector() {
        let selector = || Ok::<_, SelectionError>("vertexai/model-b".to_string());
        assert_eq!(selector.select_model().unwrap(), "vertexai/model-b");
    }

    #[test]
    fn test_pool_entry_weight_defaults_to_one() {
        let entry: PoolEntry = serde_json::from_str(r#"{"model":"vertexai/model-a"}"#).unwrap();
        assert_eq!(entry.weight, 1);
    }

    #[test]
    fn test_policy_serializes_kebab_case() {
        let json = serde_json::to_string(&SelectionPolicy::RoundRobin).unwrap();
        assert_eq!(json, "\"round-robin\"");
    }
}
