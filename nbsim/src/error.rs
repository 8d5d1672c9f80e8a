//! Error types for the simulator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NbodyError {
    /// The universe text ended early, held an unparsable number, or described
    /// a body/universe that cannot exist (non-positive mass, negative radius).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("unknown body index {index} (universe holds {count} bodies)")]
    UnknownBody { index: usize, count: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, NbodyError>;
