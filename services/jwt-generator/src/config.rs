//! Centralized configuration for the JWT generator.
//!
//! All configuration is loaded from environment variables and validated
//! at startup. The signing core itself takes no configuration.

use crate::error::TokenError;
use crate::observability::TracingConfig;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Server settings
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Maximum accepted request body, in bytes
    pub max_body_bytes: usize,

    // Logging
    /// Log level filter
    pub log_level: String,
    /// Emit JSON logs
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout: Duration::from_secs(10),
            max_body_bytes: 64 * 1024,
            log_level: "info".to_string(),
            log_json: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TokenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            request_timeout: Duration::from_secs(parse_var(
                &lookup,
                "REQUEST_TIMEOUT",
                defaults.request_timeout.as_secs(),
            )?),
            max_body_bytes: parse_var(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: parse_var(&lookup, "LOG_JSON", defaults.log_json)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), TokenError> {
        if self.port == 0 {
            return Err(TokenError::config("PORT must be between 1 and 65535"));
        }
        if self.request_timeout.is_zero() {
            return Err(TokenError::config("REQUEST_TIMEOUT must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(TokenError::config("MAX_BODY_BYTES must be greater than 0"));
        }
        Ok(())
    }

    /// Address the HTTP server binds to.
    ///
    /// # Errors
    ///
    /// Returns an error if `host:port` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, TokenError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid HOST {}: {}", self.host, e)))
    }

    /// Logging settings derived from this configuration.
    #[must_use]
    pub fn tracing(&self) -> TracingConfig {
        TracingConfig::default()
            .with_log_level(self.log_level.clone())
            .with_json_output(self.log_json)
    }
}

/// Parse a variable with a default value.
fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, TokenError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(val) => val
            .trim()
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {}: {}", name, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("REQUEST_TIMEOUT", "3"),
            ("MAX_BODY_BYTES", "1024"),
            ("LOG_LEVEL", "debug"),
            ("LOG_JSON", "false"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.max_body_bytes, 1024);

        let tracing = config.tracing();
        assert_eq!(tracing.log_level, "debug");
        assert!(!tracing.json_output);
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        assert!(Config::from_lookup(lookup(&[("PORT", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup(&[("REQUEST_TIMEOUT", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("MAX_BODY_BYTES", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LOG_JSON", "maybe")])).is_err());
    }

    #[test]
    fn test_invalid_host() {
        let config = Config::from_lookup(lookup(&[("HOST", "not a host")])).unwrap();
        assert!(matches!(config.socket_addr(), Err(TokenError::ConfigError(_))));
    }
}
