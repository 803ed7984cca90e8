use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use graphid_core::request::BASE_URL_KEY;
use graphid_core::{GraphError, GraphResult, RawResponse, RequestAdapter, RequestInformation};
use http::HeaderValue;
use tracing::debug;

use crate::auth::AccessTokenProvider;
use crate::cloud::NationalCloud;

const CLIENT_REQUEST_ID: &str = "client-request-id";
const SDK_VERSION: &str = "sdkversion";
const SDK_VERSION_VALUE: &str = concat!("graphid-rust/", env!("CARGO_PKG_VERSION"));

/// [`RequestAdapter`] backed by `reqwest`.
///
/// Tokens are only attached to requests whose host is a Microsoft Graph host
/// or the host of the configured base URL, so following a foreign
/// `@odata.nextLink` never leaks credentials.
#[derive(Clone)]
pub struct HttpRequestAdapter {
    http: reqwest::Client,
    auth: Arc<dyn AccessTokenProvider>,
    base_url: String,
    allowed_hosts: Vec<String>,
}

impl fmt::Debug for HttpRequestAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequestAdapter")
            .field("base_url", &self.base_url)
            .field("allowed_hosts", &self.allowed_hosts)
            .finish_non_exhaustive()
    }
}

impl HttpRequestAdapter {
    pub fn new(auth: Arc<dyn AccessTokenProvider>) -> GraphResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| GraphError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(http, auth))
    }

    pub fn with_client(http: reqwest::Client, auth: Arc<dyn AccessTokenProvider>) -> Self {
        Self {
            http,
            auth,
            base_url: NationalCloud::Global.base_url(),
            allowed_hosts: NationalCloud::allowed_hosts(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_cloud(self, cloud: NationalCloud) -> Self {
        self.with_base_url(cloud.base_url())
    }

    fn is_allowed_host(&self, url: &reqwest::Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        let base_host = reqwest::Url::parse(&self.base_url)
            .ok()
            .and_then(|base| base.host_str().map(str::to_owned));
        base_host.as_deref() == Some(host)
            || self
                .allowed_hosts
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(host))
    }
}

#[async_trait]
impl RequestAdapter for HttpRequestAdapter {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, mut request: RequestInformation) -> GraphResult<RawResponse> {
        request
            .path_parameters
            .insert(BASE_URL_KEY.to_string(), self.base_url.clone());
        let raw_url = request.uri()?;
        let url = reqwest::Url::parse(&raw_url)
            .map_err(|e| GraphError::Http(format!("invalid URL '{raw_url}': {e}")))?;

        let mut headers = request.headers;
        if !headers.contains_key(CLIENT_REQUEST_ID) {
            let id = uuid::Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                headers.insert(CLIENT_REQUEST_ID, value);
            }
        }
        headers.insert(SDK_VERSION, HeaderValue::from_static(SDK_VERSION_VALUE));

        let mut builder = self
            .http
            .request(request.method.clone(), url.clone())
            .headers(headers);
        if self.is_allowed_host(&url) {
            let token = self.auth.get_token().await?;
            builder = builder.bearer_auth(token);
        } else {
            debug!(host = ?url.host_str(), "host not allowed, sending without token");
        }
        if let Some(content) = request.content {
            builder = builder.body(content);
        }

        debug!(method = %request.method, url = %url, "sending request");
        let resp = builder
            .send()
            .await
            .map_err(|e| GraphError::Http(format!("{} {url} failed: {e}", request.method)))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| GraphError::Http(format!("failed to read response body: {e}")))?;
        debug!(url = %url, status = %status, "received response");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
