// HTTP client for the Cube REST API

use crate::errors::CubeError;
use crate::response::ApiResponse;
use cube_resource_core::{encode_pairs, Payload, PayloadEncoding, RequestMethod, ResourceLog};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client exposing requests on top of the Cube REST API
pub struct CubeClient {
    http: reqwest::Client,
    instance_url: String,
    api_key: String,
    log: Arc<dyn ResourceLog>,
}

impl CubeClient {
    /// Create a new Cube client
    ///
    /// # Arguments
    /// * `instance_url` - Base URL for the API (e.g., "https://example.cubecloud.dev/cubejs-api/")
    /// * `api_key` - Cube API token, sent verbatim as the `Authorization` header
    /// * `log` - Sink for diagnostic messages
    ///
    /// No timeout is configured on the underlying transport.
    pub fn new(
        instance_url: impl Into<String>,
        api_key: impl Into<String>,
        log: Arc<dyn ResourceLog>,
    ) -> Result<Self, CubeError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(CubeError::ClientBuild)?;

        Ok(Self::with_http_client(http, instance_url, api_key, log))
    }

    /// Create a client on top of a caller-configured transport
    pub fn with_http_client(
        http: reqwest::Client,
        instance_url: impl Into<String>,
        api_key: impl Into<String>,
        log: Arc<dyn ResourceLog>,
    ) -> Self {
        Self {
            http,
            instance_url: instance_url.into(),
            api_key: api_key.into(),
            log,
        }
    }

    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Send a request to a Cube API endpoint
    ///
    /// # Arguments
    /// * `method` - HTTP method token; `"GET"` sends `data` as query
    ///   parameters, `"POST"` as a JSON body, anything else as a form body
    /// * `endpoint` - Path joined against the instance URL; an absolute URL
    ///   replaces it
    /// * `data` - Optional payload
    ///
    /// # Returns
    /// The classified response. Transport failures are logged and returned
    /// as [`ApiResponse::TransportFailed`]; 422 responses, other error
    /// statuses and undecodable JSON bodies are errors.
    pub async fn make_request(
        &self,
        method: &str,
        endpoint: &str,
        data: Option<&Payload>,
    ) -> Result<ApiResponse, CubeError> {
        let method = RequestMethod::parse(method);

        let request = match self.build_request(&method, endpoint, data) {
            Ok(request) => request,
            Err(reason) => return Ok(self.transport_failure(reason)),
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Ok(self.transport_failure(e.to_string())),
        };

        self.classify(response).await
    }

    fn build_request(
        &self,
        method: &RequestMethod,
        endpoint: &str,
        data: Option<&Payload>,
    ) -> Result<RequestBuilder, String> {
        let url = resolve_url(&self.instance_url, endpoint)
            .map_err(|e| format!("invalid URL for endpoint {:?}: {}", endpoint, e))?;

        let http_method = match method {
            RequestMethod::Get => Method::GET,
            RequestMethod::Post => Method::POST,
            RequestMethod::Other(token) => Method::from_bytes(token.as_bytes())
                .map_err(|e| format!("invalid method {:?}: {}", token, e))?,
        };

        let headers = self.headers()?;

        self.log.debug(&format!("{} {}", method, url));

        let mut request = self.http.request(http_method, url);
        if let Some(data) = data {
            request = match method.payload_encoding() {
                PayloadEncoding::Query => request.query(&encode_pairs(data)),
                PayloadEncoding::Json => request.json(data),
                PayloadEncoding::Form => request.form(&encode_pairs(data)),
            };
        }

        // Applied last so they replace the content type set by the body encoder
        Ok(request.headers(headers))
    }

    fn headers(&self) -> Result<HeaderMap, String> {
        let mut authorization = HeaderValue::from_str(&self.api_key)
            .map_err(|e| format!("invalid Authorization header: {}", e))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(headers)
    }

    async fn classify(&self, response: Response) -> Result<ApiResponse, CubeError> {
        let status = response.status();

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => return Ok(self.transport_failure(e.to_string())),
            };
            let message = match serde_json::from_str::<Value>(&body) {
                Ok(value) => value.to_string(),
                Err(_) => body,
            };
            return Err(CubeError::Unprocessable(message));
        }

        if let Err(source) = response.error_for_status_ref() {
            return Err(CubeError::Status { status, source });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Ok(self.transport_failure(e.to_string())),
        };

        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with(JSON_CONTENT_TYPE));
        if !is_json {
            return Ok(ApiResponse::NotJson { content_type, body });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(ApiResponse::Json(value)),
            Err(source) => {
                self.log.error("Failed to decode response from API.");
                self.log.error(&format!("API returned: {}", body));
                Err(CubeError::Decode(source))
            }
        }
    }

    fn transport_failure(&self, reason: String) -> ApiResponse {
        self.log.error(&format!("Request to Cube API failed: {}", reason));
        ApiResponse::TransportFailed { reason }
    }
}

impl fmt::Debug for CubeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubeClient")
            .field("instance_url", &self.instance_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Join an endpoint against the base URL; an absolute endpoint wins
fn resolve_url(base: &str, endpoint: &str) -> Result<Url, url::ParseError> {
    match Url::parse(endpoint) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(base)?.join(endpoint),
        Err(e) => Err(e),
    }
}
