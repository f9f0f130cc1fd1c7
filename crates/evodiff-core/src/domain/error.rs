//! Domain-level error taxonomy for evodiff.

/// Evodiff domain errors.
#[derive(Debug, thiserror::Error)]
pub enum EvodiffError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to construct {kind} differencer: {reason}")]
    EngineConstruction { kind: String, reason: String },

    #[error("run tracker error: {0}")]
    Tracker(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid version spec: {0}")]
    InvalidVersionSpec(String),
}

/// Result type for evodiff domain operations.
pub type Result<T> = std::result::Result<T, EvodiffError>;
