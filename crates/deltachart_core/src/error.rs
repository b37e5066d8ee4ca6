use thiserror::Error;

/// Errors raised while building chart models or parsing chart settings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("at least one series is required")]
    EmptySeriesList,

    #[error("series '{0}' has no data points")]
    EmptySeries(String),

    #[error("time range bounds must be finite (got {from}..{to})")]
    NonFiniteRange { from: f64, to: f64 },

    #[error("unknown y-axis scaling mode: {0}")]
    UnknownScalingMode(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using deltachart's Error.
pub type Result<T> = std::result::Result<T, Error>;
