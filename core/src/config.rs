// Resource configuration for the Cube API client

use serde::{Deserialize, Serialize};
use std::env;

/// Default local Cube API address
pub const DEFAULT_INSTANCE_URL: &str = "http://localhost:4000/";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid resource configuration: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("environment variable {name} is not set")]
    MissingEnv { name: String },
}

/// A string given either literally or by environment variable name
///
/// ```json
/// "https://example.cubecloud.dev/cubejs-api/"
/// { "env": "CUBE_API_KEY" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringSource {
    Value(String),
    Env { env: String },
}

impl StringSource {
    /// Resolve to the final string, reading the environment if needed
    pub fn resolve(&self) -> Result<String, ConfigError> {
        match self {
            StringSource::Value(value) => Ok(value.clone()),
            StringSource::Env { env: name } => {
                env::var(name).map_err(|_| ConfigError::MissingEnv { name: name.clone() })
            }
        }
    }
}

impl From<&str> for StringSource {
    fn from(value: &str) -> Self {
        StringSource::Value(value.to_string())
    }
}

fn default_instance_url() -> StringSource {
    StringSource::Value(DEFAULT_INSTANCE_URL.to_string())
}

/// Resource configuration as supplied by the hosting framework
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CubeResourceConfig {
    /// Instance URL for API requests
    #[serde(default = "default_instance_url")]
    pub instance_url: StringSource,

    /// Cube API key
    pub api_key: StringSource,
}

impl CubeResourceConfig {
    /// Parse a configuration document
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        Ok(Self::deserialize(value)?)
    }

    /// Resolve every string source
    pub fn resolve(&self) -> Result<CubeSettings, ConfigError> {
        Ok(CubeSettings {
            instance_url: self.instance_url.resolve()?,
            api_key: self.api_key.resolve()?,
        })
    }
}

/// Resolved construction parameters for a client
#[derive(Clone, PartialEq, Eq)]
pub struct CubeSettings {
    pub instance_url: String,
    pub api_key: String,
}

impl std::fmt::Debug for CubeSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CubeSettings")
            .field("instance_url", &self.instance_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
