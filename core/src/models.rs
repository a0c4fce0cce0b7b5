// Request models for the Cube REST API

use serde_json::{Map, Value};
use std::fmt;

/// Key/value payload attached to a request
pub type Payload = Map<String, Value>;

/// HTTP method of a request
///
/// Parsing is case-sensitive: only the exact tokens `"GET"` and `"POST"`
/// select the dedicated variants, everything else is carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Other(String),
}

impl RequestMethod {
    /// Classify a method token
    pub fn parse(token: &str) -> Self {
        match token {
            "GET" => RequestMethod::Get,
            "POST" => RequestMethod::Post,
            other => RequestMethod::Other(other.to_string()),
        }
    }

    /// The method token as sent on the wire
    pub fn as_str(&self) -> &str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Other(token) => token,
        }
    }

    /// How a payload travels with this method
    pub fn payload_encoding(&self) -> PayloadEncoding {
        match self {
            RequestMethod::Get => PayloadEncoding::Query,
            RequestMethod::Post => PayloadEncoding::Json,
            RequestMethod::Other(_) => PayloadEncoding::Form,
        }
    }
}

impl From<&str> for RequestMethod {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload placement on the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// URL query parameters, empty body
    Query,
    /// JSON request body
    Json,
    /// Raw form-urlencoded body, no JSON encoding
    Form,
}

/// Flatten a payload into key/value pairs for query strings and form bodies
///
/// - strings are sent verbatim
/// - `null` entries are dropped
/// - arrays expand into one pair per non-null element
/// - any other value is sent as compact JSON text
pub fn encode_pairs(payload: &Payload) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(payload.len());

    for (key, value) in payload {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }

    pairs
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
