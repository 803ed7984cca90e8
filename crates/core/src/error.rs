use std::fmt;

use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The service answered 4XX/5XX with an OData error document.
    #[error("Graph API error ({status}): {error}")]
    OData {
        status: StatusCode,
        headers: HeaderMap,
        error: ODataError,
    },

    /// The service answered 4XX/5XX with a body that is not an OData error.
    #[error("request failed with status {status}: {body}")]
    Status {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    },

    #[error("invalid URL template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("URL template requires a base URL but none was set")]
    MissingBaseUrl,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to deserialize response: {message}")]
    Deserialization { message: String, body: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl GraphError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::OData { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response headers of a failed request, e.g. `Retry-After` or `request-id`.
    pub fn response_headers(&self) -> Option<&HeaderMap> {
        match self {
            Self::OData { headers, .. } | Self::Status { headers, .. } => Some(headers),
            _ => None,
        }
    }

    /// Seconds to wait from a `Retry-After` header given in seconds.
    pub fn retry_after(&self) -> Option<u64> {
        self.response_headers()?
            .get(http::header::RETRY_AFTER)?
            .to_str()
            .ok()?
            .trim()
            .parse()
            .ok()
    }

    /// The OData error code (e.g. `Request_ResourceNotFound`), when the service sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::OData { error, .. } => Some(error.error.code.as_str()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Error document returned by Microsoft Graph for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ODataError {
    pub error: MainError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetails>,
    #[serde(rename = "innerError", skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<InnerError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerError {
    #[serde(rename = "request-id", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "client-request-id", skip_serializing_if = "Option::is_none")]
    pub client_request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.code, self.error.message)?;
        if let Some(request_id) = self
            .error
            .inner_error
            .as_ref()
            .and_then(|inner| inner.request_id.as_deref())
        {
            write!(f, " (request-id: {request_id})")?;
        }
        Ok(())
    }
}

impl ODataError {
    /// Parse an error body. Returns `None` when the body is not an OData error document.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}
