//! HTTP Server Configuration
//!
//! Host, port, shared API token, deployment environment, dataset location
//! and CORS settings. Values come from an optional JSON file, then
//! environment variables, then command line flags.

use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shared secret expected in `Authorization: Bearer <token>`
pub const ENV_API_TOKEN: &str = "API_TOKEN";
/// `production` selects terse errors and short access logs
pub const ENV_ENVIRONMENT: &str = "APP_ENV";
pub const ENV_HOST: &str = "MOVIEDEX_HOST";
pub const ENV_PORT: &str = "MOVIEDEX_PORT";
pub const ENV_DATASET: &str = "MOVIEDEX_DATASET";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API token is not configured (set API_TOKEN)")]
    MissingToken,

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// Anything other than "production" is a development deployment
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Whether 500 responses may carry the underlying error text
    pub fn exposes_error_details(&self) -> bool {
        !self.is_production()
    }
}

/// HTTP server configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared bearer token; must be non-empty
    #[serde(default)]
    pub api_token: String,

    #[serde(default)]
    pub environment: Environment,

    /// JSON array of movie records
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("./data/movies-data-small.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_token: String::new(),
            environment: Environment::default(),
            dataset_path: default_dataset_path(),
            cors_origins: Vec::new(),
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_token", &"<redacted>")
            .field("environment", &self.environment)
            .field("dataset_path", &self.dataset_path)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl ServerConfig {
    /// Default config carrying the given token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            api_token: token.into(),
            ..Default::default()
        }
    }

    /// Load a JSON config file; missing keys take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Override fields from the process environment
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Override fields from `lookup`; unset or empty variables are skipped
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(token) = var(ENV_API_TOKEN) {
            self.api_token = token;
        }
        if let Some(env) = var(ENV_ENVIRONMENT) {
            self.environment = Environment::from_name(&env);
        }
        if let Some(host) = var(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = var(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(dataset) = var(ENV_DATASET) {
            self.dataset_path = PathBuf::from(dataset);
        }

        Ok(self)
    }

    /// Check the config can start a server
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Resolve the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}
