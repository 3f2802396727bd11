use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("model has not been trained")]
    NotTrained,

    #[error("expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("feature `{feature}` is not a finite number")]
    NonFinite { feature: &'static str },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address `{value}`: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid log filter `{value}`: {reason}")]
    InvalidLogFilter { value: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}
