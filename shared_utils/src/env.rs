use std::path::PathBuf;

use thiserror::Error;

/// Errors returned when reading process environment variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvVarError {
    /// The variable is not set (or is not valid unicode).
    #[error("Missing environment variable: {0}")]
    Missing(String),

    /// The variable is set but holds only whitespace.
    #[error("Environment variable is empty: {0}")]
    Empty(String),
}

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, EnvVarError> {
    std::env::var(name).map_err(|_| EnvVarError::Missing(name.to_string()))
}

/// Reads an environment variable holding a filesystem path.
///
/// Surrounding whitespace is trimmed; a blank value is reported as
/// [`EnvVarError::Empty`] rather than resolving to the current directory.
pub fn get_env_path(name: &str) -> Result<PathBuf, EnvVarError> {
    let raw = get_env_var(name)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvVarError::Empty(name.to_string()));
    }
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name so they can run in parallel.

    #[test]
    fn missing_var_is_reported_by_name() {
        let err = get_env_var("SHARED_UTILS_TEST_DEFINITELY_UNSET").unwrap_err();
        assert_eq!(
            err,
            EnvVarError::Missing("SHARED_UTILS_TEST_DEFINITELY_UNSET".into())
        );
    }

    #[test]
    fn path_is_trimmed() {
        // SAFETY: no other test touches this variable.
        unsafe { std::env::set_var("SHARED_UTILS_TEST_PATH", "  /tmp/chart.toml \n") };
        let p = get_env_path("SHARED_UTILS_TEST_PATH").unwrap();
        assert_eq!(p, PathBuf::from("/tmp/chart.toml"));
    }

    #[test]
    fn blank_path_is_rejected() {
        // SAFETY: no other test touches this variable.
        unsafe { std::env::set_var("SHARED_UTILS_TEST_BLANK", "   ") };
        assert_eq!(
            get_env_path("SHARED_UTILS_TEST_BLANK").unwrap_err(),
            EnvVarError::Empty("SHARED_UTILS_TEST_BLANK".into())
        );
    }
}
