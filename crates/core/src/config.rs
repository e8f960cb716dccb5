//! Environment variable helpers shared by the server and database config.

use std::str::FromStr;

/// A configuration value was present but could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub key: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Read `key` from the environment, falling back to `default` when unset.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse `key` from the environment, falling back to `default` when unset.
pub fn env_parse<T: FromStr>(
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError {
            key,
            expected,
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_uses_default() {
        let port: u16 = env_parse("MOVIES_CORE_TEST_UNSET_PORT", 3000, "u16").unwrap();
        assert_eq!(port, 3000);
        assert_eq!(env_or("MOVIES_CORE_TEST_UNSET_HOST", "localhost"), "localhost");
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ConfigError {
            key: "PORT",
            expected: "u16",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "PORT must be a valid u16, got 'abc'");
    }
}
