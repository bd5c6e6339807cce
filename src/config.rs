//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! default paths, logging, and HTTP behavior. `AppConfig` is the root
//! configuration struct containing all settings. Every field has a default so
//! the service runs without a config file at all.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pulse=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

// =============================================================================
// HTTP Response Constants
// =============================================================================

/// Cache-Control for the health route. Liveness probes must never be served
/// from an intermediary cache.
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// How long browsers may cache a preflight response, in seconds.
pub const CORS_PREFLIGHT_MAX_AGE_SECS: u64 = 600;

/// Drain window for in-flight connections during graceful shutdown.
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Cross-origin policy
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

/// Cross-origin policy configuration.
///
/// The default is fully permissive: every origin, method, and header is
/// allowed and credentials are permitted. A wildcard entry (`"*"`) in
/// `allowed_origins` selects the permissive policy; any other values are
/// treated as an exact origin allow-list.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "CorsConfig::default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "CorsConfig::default_allow_credentials")]
    pub allow_credentials: bool,
}

impl CorsConfig {
    fn default_allowed_origins() -> Vec<String> {
        vec!["*".to_string()]
    }

    fn default_allow_credentials() -> bool {
        true
    }

    /// Whether the origin list is the wildcard policy.
    pub fn is_wildcard(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Self::default_allowed_origins(),
            allow_credentials: Self::default_allow_credentials(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the service has no mandatory settings,
    /// so built-in defaults are used. A file that exists but cannot be read
    /// or parsed is still an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        if config.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Validation(
                "cors.allowed_origins must not be empty; use [\"*\"] for the permissive policy"
                    .to_string(),
            ));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
