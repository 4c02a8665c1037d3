//! Error types for the helium-core crate.

/// Core error type for Helium configuration handling.
///
/// [`crate::ModelResolver`] never wraps selector failures in this type; they
/// surface as the selector's own error.
#[derive(Debug, thiserror::Error)]
pub enum HeliumError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configured production pool is unusable
    #[error("Model pool error: {0}")]
    Pool(#[from] crate::selection::SelectionError),
}
