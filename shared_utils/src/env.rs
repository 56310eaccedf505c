use thiserror::Error;

/// A required environment variable is not set.
///
/// Carries the variable name so a failed startup says exactly which
/// credential or override is missing.
#[derive(Debug, Error)]
#[error("missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads a required environment variable (API keys and the like).
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an optional environment variable, falling back to `default`.
/// Used for overridable settings such as the provider base URL.
pub fn get_env_var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
