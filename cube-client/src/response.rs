// Classified outcome of a Cube API request

use crate::errors::CubeError;
use serde_json::Value;

/// Non-terminal outcome of [`CubeClient::make_request`](crate::CubeClient::make_request)
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Success response with a JSON body
    Json(Value),

    /// Success response whose declared content type is not JSON
    NotJson {
        content_type: Option<String>,
        body: String,
    },

    /// The request never produced a response; already logged at error level
    TransportFailed { reason: String },
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, ApiResponse::TransportFailed { .. })
    }

    /// Treat anything but a JSON body as a terminal failure
    pub fn require_json(self) -> Result<Value, CubeError> {
        match self {
            ApiResponse::Json(value) => Ok(value),
            ApiResponse::NotJson { content_type, .. } => Err(CubeError::NotJson { content_type }),
            ApiResponse::TransportFailed { reason } => Err(CubeError::Transport(reason)),
        }
    }
}
