//! Configuration management for the contact manager.
//!
//! Configuration is read from environment variables, optionally seeded from a
//! `.env` file. Storage, listener, and identity-service settings are resolved
//! here once at startup; the core only ever sees the resolved values.

use crate::domain::PhonePattern;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Deployment environment, selects the log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Human-readable logs at debug level
    #[default]
    Local,
    /// JSON logs at debug level
    Dev,
    /// JSON logs at info level
    Prod,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => Err(format!("Must be one of local, dev, prod, got: {}", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Connection parameters for the SSO identity service.
#[derive(Debug, Clone)]
pub struct SsoConfig {
    /// Service URI, e.g. `http://localhost:44043`
    pub address: String,

    /// Per-attempt timeout in seconds (default: 5)
    pub timeout_secs: u64,

    /// Maximum attempts on transient failures (default: 3)
    pub retries_count: u32,

    /// Application identifier registered with the SSO service
    pub app_id: i32,
}

impl Default for SsoConfig {
    fn default() -> Self {
        SsoConfig {
            address: "http://localhost:44043".to_string(),
            timeout_secs: 5,
            retries_count: 3,
            app_id: 1,
        }
    }
}

/// Configuration for the contact manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment (default: local)
    pub env: Environment,

    /// SQLite database file
    pub storage_path: PathBuf,

    /// gRPC listening port (default: 44044)
    pub grpc_port: u16,

    /// Server-side per-call timeout in seconds (default: 5)
    pub grpc_timeout_secs: u64,

    /// Strict phone number pattern, compiled at load time
    pub phone_pattern: PhonePattern,

    /// Identity service settings
    pub sso: SsoConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CM_STORAGE_PATH`: SQLite database file
    /// - `SSO_ADDRESS`: identity service URI (`http://` or `https://`)
    /// - `SSO_APP_ID`: application identifier
    ///
    /// Optional environment variables:
    /// - `CM_ENV`: `local`, `dev` or `prod` (default: local)
    /// - `CM_GRPC_PORT`: listening port (default: 44044)
    /// - `CM_GRPC_TIMEOUT_SECS`: per-call timeout (default: 5)
    /// - `CM_PHONE_PATTERN`: phone regex (default: `^\+7\d{10}$`)
    /// - `SSO_TIMEOUT_SECS`: per-attempt identity timeout (default: 5)
    /// - `SSO_RETRIES_COUNT`: identity attempts (default: 3)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let env = Self::parse_env("CM_ENV", Environment::Local)?;

        let storage_path = Self::required("CM_STORAGE_PATH")?;
        let address = Self::required("SSO_ADDRESS")?;

        if !address.starts_with("http://") && !address.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SSO_ADDRESS".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let app_id = Self::required("SSO_APP_ID")?
            .parse::<i32>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "SSO_APP_ID".to_string(),
                reason: "Must be an integer".to_string(),
            })?;

        let grpc_port = Self::parse_env("CM_GRPC_PORT", 44044u16)?;
        let grpc_timeout_secs = Self::parse_env("CM_GRPC_TIMEOUT_SECS", 5u64)?;
        let timeout_secs = Self::parse_env("SSO_TIMEOUT_SECS", 5u64)?;
        let retries_count = Self::parse_env("SSO_RETRIES_COUNT", 3u32)?;

        if retries_count == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SSO_RETRIES_COUNT".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let phone_pattern = match env::var("CM_PHONE_PATTERN") {
            Ok(pattern) => PhonePattern::new(&pattern).map_err(|e| ConfigError::InvalidValue {
                var: "CM_PHONE_PATTERN".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => PhonePattern::default(),
        };

        Ok(Config {
            env,
            storage_path: PathBuf::from(storage_path),
            grpc_port,
            grpc_timeout_secs,
            phone_pattern,
            sso: SsoConfig {
                address,
                timeout_secs,
                retries_count,
                app_id,
            },
        })
    }

    /// Read a required, non-blank environment variable.
    fn required(var_name: &str) -> ConfigResult<String> {
        let value =
            env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;

        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        Ok(value)
    }

    /// Parse an optional environment variable with a default value.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Cannot parse {:?}: {}", val, e),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            env: Environment::Local,
            storage_path: PathBuf::from("./storage/contacts.db"),
            grpc_port: 44044,
            grpc_timeout_secs: 5,
            phone_pattern: PhonePattern::default(),
            sso: SsoConfig::default(),
        }
    }
}
