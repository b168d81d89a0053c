use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Error raised when an environment variable holds an unusable value.
///
/// Configuration is validated once at startup; any of these aborts the
/// process before the listener is bound.
#[derive(Debug, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl ConfigError {
    fn new(var: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self {
            var,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Log verbosity accepted by `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    ///
    /// `tracing` has no level above `error`, so `Critical` shares it.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err("expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL".into()),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development and the struct
/// is never mutated after startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Human-readable application name (default: `Todo List API`).
    pub app_name: String,
    /// Verbose HTTP tracing (default: `false`).
    pub debug: bool,
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Default log verbosity when `RUST_LOG` is unset (default: `INFO`).
    pub log_level: LogLevel,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `APP_NAME`             | `Todo List API`          |
    /// | `DEBUG`                | `false`                  |
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `8000`                   |
    /// | `LOG_LEVEL`            | `INFO`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:8501`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let app_name = get("APP_NAME", "Todo List API");
        if app_name.trim().is_empty() {
            return Err(ConfigError::new("APP_NAME", &app_name, "must not be empty"));
        }

        let debug = parse_bool("DEBUG", &get("DEBUG", "false"))?;

        let raw_host = get("HOST", "0.0.0.0");
        let host: IpAddr = raw_host
            .trim()
            .parse()
            .map_err(|e| ConfigError::new("HOST", &raw_host, format!("{e}")))?;

        let raw_port = get("PORT", "8000");
        let port: u16 = raw_port
            .trim()
            .parse()
            .map_err(|_| ConfigError::new("PORT", &raw_port, "must be an integer in 1..=65535"))?;
        if port == 0 {
            return Err(ConfigError::new("PORT", &raw_port, "must be an integer in 1..=65535"));
        }

        let raw_level = get("LOG_LEVEL", "INFO");
        let log_level: LogLevel = raw_level
            .parse()
            .map_err(|reason: String| ConfigError::new("LOG_LEVEL", &raw_level, reason))?;

        let raw_origins = get("CORS_ORIGINS", "http://localhost:8501");
        let cors_origins = raw_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                if origin == "*" {
                    return Err(ConfigError::new(
                        "CORS_ORIGINS",
                        origin,
                        "wildcard origin cannot be combined with credentials",
                    ));
                }
                HeaderValue::from_str(origin)
                    .map_err(|e| ConfigError::new("CORS_ORIGINS", origin, format!("{e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let raw_timeout = get("REQUEST_TIMEOUT_SECS", "30");
        let request_timeout_secs: u64 = raw_timeout
            .trim()
            .parse()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                ConfigError::new("REQUEST_TIMEOUT_SECS", &raw_timeout, "must be a positive integer")
            })?;

        Ok(Self {
            app_name,
            debug,
            host,
            port,
            log_level,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::new(var, raw, "expected a boolean")),
    }
}
