//! Error types for the voyager engine
//!
//! Every fallible library call returns `SimResult<T>`. The binary wraps these
//! in `anyhow` with file context

use thiserror::Error;

use crate::simulation::states::BodyKind;

/// Result alias used across the library
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// `update()` was called before the previous-acceleration history was seeded
    #[error("previous accelerations are not seeded; call initialize() before update()")]
    HistoryNotSeeded,

    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("mass of {kind:?} must be finite and positive, got {mass}")]
    InvalidMass { kind: BodyKind, mass: f64 },

    /// A configured vector did not have exactly two components
    #[error("{field} of {kind:?} must have 2 components, got {len}")]
    InvalidVector {
        kind: BodyKind,
        field: &'static str,
        len: usize,
    },

    #[error("no body of kind {0:?} in the system")]
    UnknownBody(BodyKind),

    #[error("body kind {0:?} appears more than once")]
    DuplicateBody(BodyKind),

    #[error("body {body} cannot be influenced by {influencer} (system has {len} bodies)")]
    InvalidInfluencer {
        body: usize,
        influencer: usize,
        len: usize,
    },

    #[error("influence graph covers {graph} bodies but the system has {bodies}")]
    InfluenceSizeMismatch { graph: usize, bodies: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
