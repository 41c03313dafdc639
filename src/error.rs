use thiserror::Error;

/// Failures surfaced by the auth forms. Validation errors are produced
/// locally and never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),
    /// API-reported failure, carrying the response body's error message.
    #[error("{0}")]
    Api(String),
    #[error("Request failed: {0}")]
    Network(String),
}

impl AuthError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_))
    }
}

/// Data-loader failures. These are never shown to the user: every loader
/// swallows them and substitutes the fixed demo dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
}
