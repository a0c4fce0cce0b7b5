// Client errors

use cube_resource_core::ConfigError;
use reqwest::StatusCode;

/// Terminal failures raised by the Cube API client
#[derive(Debug, thiserror::Error)]
pub enum CubeError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Received 422 status from Cube: {0}")]
    Unprocessable(String),

    #[error("{source}")]
    Status {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response from Cube API. Failed to decode to JSON.")]
    Decode(#[source] serde_json::Error),

    #[error("Request to Cube API failed: {0}")]
    Transport(String),

    #[error("Cube API response is not JSON (content type: {})", .content_type.as_deref().unwrap_or("none"))]
    NotJson { content_type: Option<String> },
}

impl CubeError {
    /// HTTP status behind this failure, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CubeError::Unprocessable(_) => Some(StatusCode::UNPROCESSABLE_ENTITY),
            CubeError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
