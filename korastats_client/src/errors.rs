use thiserror::Error;

/// The unified error type for the `korastats_client` crate.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered, but with a non-success envelope or no data.
    #[error("Provider error from {endpoint}: {message}")]
    Api { endpoint: String, message: String },

    /// A credential or base-URL environment variable is missing.
    #[error(transparent)]
    MissingEnvVar(#[from] shared_utils::env::MissingEnvVarError),
}
