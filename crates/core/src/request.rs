use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::Method;
use serde::Serialize;

use crate::error::{GraphError, GraphResult};
use crate::query::QueryParameters;
use crate::uri_template::{self, PathParameters, QueryMap};

/// Path parameter holding an absolute URL that replaces template expansion.
pub const RAW_URL_KEY: &str = "request-raw-url";
/// Path parameter the adapter fills with its base URL.
pub const BASE_URL_KEY: &str = "baseurl";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Headers and query parameters a caller can attach to a single request.
#[derive(Debug, Clone)]
pub struct RequestConfiguration<Q> {
    pub headers: HeaderMap,
    pub query_parameters: Option<Q>,
}

pub type DefaultRequestConfiguration = RequestConfiguration<()>;

impl<Q> Default for RequestConfiguration<Q> {
    fn default() -> Self {
        Self {
            headers: HeaderMap::new(),
            query_parameters: None,
        }
    }
}

impl<Q> RequestConfiguration<Q> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: Q) -> Self {
        self.query_parameters = Some(query);
        self
    }

    /// Append a header. Invalid names or values are rejected.
    pub fn with_header(mut self, name: &str, value: &str) -> GraphResult<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| GraphError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| GraphError::InvalidHeader(format!("{name}: {e}")))?;
        self.headers.append(name, value);
        Ok(self)
    }
}

impl<Q> From<Q> for RequestConfiguration<Q>
where
    Q: QueryParameters,
{
    fn from(query: Q) -> Self {
        Self::new().with_query(query)
    }
}

/// Everything needed to issue one HTTP request, independent of the HTTP client.
#[derive(Debug, Clone)]
pub struct RequestInformation {
    pub method: Method,
    pub url_template: String,
    pub path_parameters: PathParameters,
    pub query_parameters: QueryMap,
    pub headers: HeaderMap,
    pub content: Option<Bytes>,
}

impl RequestInformation {
    pub fn new(
        method: Method,
        url_template: impl Into<String>,
        path_parameters: PathParameters,
    ) -> Self {
        Self {
            method,
            url_template: url_template.into(),
            path_parameters,
            query_parameters: QueryMap::new(),
            headers: HeaderMap::new(),
            content: None,
        }
    }

    /// A request against an absolute URL, bypassing the template.
    pub fn from_raw_url(method: Method, raw_url: impl Into<String>) -> Self {
        let mut path_parameters = PathParameters::new();
        path_parameters.insert(RAW_URL_KEY.to_string(), raw_url.into());
        Self::new(method, "", path_parameters)
    }

    /// Resolve the final request URL.
    pub fn uri(&self) -> GraphResult<String> {
        if let Some(raw) = self.path_parameters.get(RAW_URL_KEY) {
            return Ok(raw.clone());
        }
        if self.url_template.contains("{+baseurl}")
            && !self.path_parameters.contains_key(BASE_URL_KEY)
        {
            return Err(GraphError::MissingBaseUrl);
        }
        uri_template::expand(&self.url_template, &self.path_parameters, &self.query_parameters)
    }

    pub fn add_query_parameters<Q: QueryParameters + ?Sized>(&mut self, query: &Q) {
        query.write_to(&mut self.query_parameters);
    }

    /// Merge a caller supplied configuration into this request.
    pub fn configure<Q: QueryParameters>(&mut self, config: Option<RequestConfiguration<Q>>) {
        let Some(config) = config else {
            return;
        };
        if let Some(query) = &config.query_parameters {
            self.add_query_parameters(query);
        }
        let mut last_name = None;
        for (name, value) in config.headers {
            // HeaderMap iteration yields the name once, followed by `None` for repeated values.
            if let Some(name) = name {
                last_name = Some(name);
            }
            if let Some(name) = &last_name {
                self.headers.append(name.clone(), value);
            }
        }
    }

    /// Insert a header only when the caller has not set one.
    pub fn try_add_header(&mut self, name: HeaderName, value: &'static str) {
        if !self.headers.contains_key(&name) {
            self.headers.insert(name, HeaderValue::from_static(value));
        }
    }

    pub fn set_json_content<T: Serialize + ?Sized>(&mut self, body: &T) -> GraphResult<()> {
        let bytes = serde_json::to_vec(body)?;
        self.content = Some(Bytes::from(bytes));
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(())
    }

    pub fn set_stream_content(&mut self, content: Bytes, content_type: &str) -> GraphResult<()> {
        let value = HeaderValue::from_str(content_type)
            .map_err(|e| GraphError::InvalidHeader(format!("content-type: {e}")))?;
        self.content = Some(content);
        self.headers.insert(CONTENT_TYPE, value);
        Ok(())
    }

    pub fn accepts(&self) -> Option<&str> {
        self.headers.get(ACCEPT).and_then(|v| v.to_str().ok())
    }
}
