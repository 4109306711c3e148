//! Configuration settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub parser: ParserConfig,
    pub graph: GraphConfig,
    pub source: SourceConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            PathBuf::from("lattice.toml"),
            PathBuf::from("config.toml"),
            dirs::config_dir()
                .map(|p| p.join("lattice/config.toml"))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|p| p.join(".lattice/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.parser.endpoint.is_empty() {
            return Err(ConfigError::MissingField("parser.endpoint".to_string()).into());
        }
        if self.source.column.is_empty() {
            return Err(ConfigError::Invalid("source.column must not be empty".to_string()).into());
        }
        if self.parser.timeout_secs == 0 {
            return Err(ConfigError::Invalid("parser.timeout_secs must be > 0".to_string()).into());
        }
        Ok(())
    }

    /// Expand the graph data file path.
    pub fn graph_file(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.graph.data_file);
        PathBuf::from(expanded.as_ref())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen port.
    pub port: u16,
    /// API route prefix.
    pub prefix: String,
    /// Enable CORS.
    pub enable_cors: bool,
    /// Allowed origins for CORS.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            prefix: "/api".to_string(),
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Remote language parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Parser service endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9090/parse".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Persisted graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Path of the node-link document file.
    pub data_file: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            data_file: "knowledge_graph.json".to_string(),
        }
    }
}

/// Text-unit source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// CSV file holding the text units.
    pub path: String,
    /// Column containing one paragraph per row.
    pub column: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: "paragraphs.csv".to_string(),
            column: "paragraphs".to_string(),
        }
    }
}
