//! Configuration error type.
//!
//! Every `ConfigError` is raised before the first round executes; a run that
//! has started always completes.

use thiserror::Error;

/// Rejected node lists and run configurations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("node list has no base station")]
    MissingBaseStation,

    #[error("node list has more than one base station ({first} and {second})")]
    MultipleBaseStations { first: String, second: String },

    #[error("duplicate node id {0:?}")]
    DuplicateNodeId(String),

    #[error("round count must be at least 1")]
    ZeroRounds,

    #[error("{field} must be a positive finite number, got {value}")]
    NonPositiveEnergy { field: &'static str, value: f64 },

    #[error("initial energy must be finite and non-negative, got {0}")]
    InvalidInitialEnergy(f64),

    #[error("cluster head probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("unknown node role {0:?} (expected sensor, base or relay)")]
    UnknownRole(String),
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
