use std::str::FromStr;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{GraphError, GraphResult, ODataError};
use crate::request::RequestInformation;

/// A response as received from the transport, before error mapping.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    fn has_content(&self) -> bool {
        self.status != StatusCode::NO_CONTENT && !self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Turns a [`RequestInformation`] into an HTTP exchange.
///
/// Implementations fill in the `baseurl` path parameter, authenticate and
/// dispatch the request. Status codes are not interpreted here.
#[async_trait]
pub trait RequestAdapter: Send + Sync {
    fn base_url(&self) -> &str;

    async fn execute(&self, request: RequestInformation) -> GraphResult<RawResponse>;
}

/// Typed send operations on top of [`RequestAdapter::execute`].
///
/// Every 4XX/5XX status is mapped to [`GraphError::OData`] when the body is an
/// OData error document and to [`GraphError::Status`] otherwise.
#[async_trait]
pub trait RequestAdapterExt: RequestAdapter {
    /// Deserialize a JSON body. `None` when the service sent no content.
    async fn send_json<T>(&self, request: RequestInformation) -> GraphResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.execute(request).await.and_then(map_error_status)?;
        if !response.has_content() {
            return Ok(None);
        }
        serde_json::from_slice(&response.body)
            .map(Some)
            .map_err(|e| GraphError::Deserialization {
                message: e.to_string(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            })
    }

    /// Parse a text body such as the result of a `$count` segment.
    async fn send_primitive<T>(&self, request: RequestInformation) -> GraphResult<Option<T>>
    where
        T: FromStr + Send,
        T::Err: std::fmt::Display,
    {
        let response = self.execute(request).await.and_then(map_error_status)?;
        if !response.has_content() {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&response.body);
        let text = text.trim();
        text.parse()
            .map(Some)
            .map_err(|e: T::Err| GraphError::Deserialization {
                message: e.to_string(),
                body: text.to_string(),
            })
    }

    /// Raw body bytes, e.g. `$value` content.
    async fn send_bytes(&self, request: RequestInformation) -> GraphResult<Option<Bytes>> {
        let response = self.execute(request).await.and_then(map_error_status)?;
        if response.status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        Ok(Some(response.body))
    }

    async fn send_no_content(&self, request: RequestInformation) -> GraphResult<()> {
        self.execute(request).await.and_then(map_error_status)?;
        Ok(())
    }
}

impl<A: RequestAdapter + ?Sized> RequestAdapterExt for A {}

fn map_error_status(response: RawResponse) -> GraphResult<RawResponse> {
    let status = response.status;
    if !(status.is_client_error() || status.is_server_error()) {
        debug!(status = %status, bytes = response.body.len(), "response");
        return Ok(response);
    }

    warn!(status = %status, "request failed");
    let RawResponse { headers, body, .. } = response;
    match ODataError::from_body(&body) {
        Some(error) => Err(GraphError::OData {
            status,
            headers,
            error,
        }),
        None => Err(GraphError::Status {
            status,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use http::Method;
    use serde::Deserialize;

    use super::*;
    use crate::uri_template::PathParameters;

    struct Canned {
        response: Mutex<Option<RawResponse>>,
    }

    impl Canned {
        fn new(status: u16, body: &'static str) -> Self {
            Self::with_response(RawResponse::new(StatusCode::from_u16(status).unwrap(), body))
        }

        fn with_response(response: RawResponse) -> Self {
            Self {
                response: Mutex::new(Some(response)),
            }
        }
    }

    #[async_trait]
    impl RequestAdapter for Canned {
        fn base_url(&self) -> &str {
            "https://graph.test/v1.0"
        }

        async fn execute(&self, _request: RequestInformation) -> GraphResult<RawResponse> {
            Ok(self.response.lock().unwrap().take().unwrap())
        }
    }

    fn request() -> RequestInformation {
        RequestInformation::new(Method::GET, "/identity", PathParameters::new())
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        #[serde(rename = "displayName")]
        display_name: String,
    }

    #[tokio::test]
    async fn send_json_parses_body() {
        let adapter = Canned::new(200, r#"{"displayName":"Corp network"}"#);
        let named: Named = adapter.send_json(request()).await.unwrap().unwrap();
        assert_eq!(named.display_name, "Corp network");
    }

    #[tokio::test]
    async fn send_json_returns_none_for_no_content() {
        let adapter = Canned::new(204, "");
        let named: Option<Named> = adapter.send_json(request()).await.unwrap();
        assert!(named.is_none());
    }

    #[tokio::test]
    async fn odata_error_is_mapped() {
        let adapter = Canned::new(
            403,
            r#"{"error":{"code":"Authorization_RequestDenied","message":"Insufficient privileges"}}"#,
        );
        let err = adapter.send_no_content(request()).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        assert_eq!(err.code(), Some("Authorization_RequestDenied"));
    }

    #[tokio::test]
    async fn plain_error_body_is_kept() {
        let adapter = Canned::new(502, "upstream unavailable");
        let err = adapter.send_bytes(request()).await.unwrap_err();
        match err {
            GraphError::Status { status, body, .. } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "upstream unavailable");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn throttled_error_keeps_headers() {
        let mut response = RawResponse::new(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":"TooManyRequests","message":"Too many requests"}}"#,
        );
        response
            .headers
            .insert(http::header::RETRY_AFTER, "30".parse().unwrap());
        response
            .headers
            .insert("request-id", "5e2a7c1d".parse().unwrap());
        let adapter = Canned::with_response(response);

        let err = adapter.send_no_content(request()).await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(err.retry_after(), Some(30));
        let headers = err.response_headers().unwrap();
        assert_eq!(headers.get("request-id").unwrap(), "5e2a7c1d");
    }

    #[tokio::test]
    async fn plain_error_keeps_headers() {
        let mut response = RawResponse::new(StatusCode::SERVICE_UNAVAILABLE, "try later");
        response
            .headers
            .insert(http::header::RETRY_AFTER, "5".parse().unwrap());
        let adapter = Canned::with_response(response);

        let err = adapter.send_bytes(request()).await.unwrap_err();

        assert!(matches!(err, GraphError::Status { .. }));
        assert_eq!(err.retry_after(), Some(5));
    }

    #[tokio::test]
    async fn primitive_count() {
        let adapter = Canned::new(200, "42\n");
        let count: i32 = adapter.send_primitive(request()).await.unwrap().unwrap();
        assert_eq!(count, 42);
    }

    #[tokio::test]
    async fn malformed_json_reports_body() {
        let adapter = Canned::new(200, "{not json");
        let err = adapter
            .send_json::<Named>(request())
            .await
            .unwrap_err();
        assert!(matches!(err, GraphError::Deserialization { body, .. } if body == "{not json"));
    }
}
