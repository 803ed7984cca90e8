use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use http::Method;
use http::header::ACCEPT;
use serde::Serialize;

use crate::adapter::RequestAdapter;
use crate::error::GraphResult;
use crate::query::QueryParameters;
use crate::request::{JSON_CONTENT_TYPE, RAW_URL_KEY, RequestConfiguration, RequestInformation};
use crate::uri_template::PathParameters;

/// Implemented by every request builder.
pub trait RequestBuilder: Sized {
    const URL_TEMPLATE: &'static str;

    fn from_base(base: BaseRequestBuilder) -> Self;

    fn base(&self) -> &BaseRequestBuilder;

    /// A builder of this type bound to an arbitrary URL. Other path and query
    /// parameters are ignored.
    fn from_raw_url(raw_url: impl Into<String>, adapter: Arc<dyn RequestAdapter>) -> Self {
        Self::from_base(BaseRequestBuilder::with_raw_url(
            adapter,
            Self::URL_TEMPLATE,
            raw_url,
        ))
    }
}

/// State shared by all request builders: the adapter, the URL template of the
/// node and the path parameters collected while navigating to it.
#[derive(Clone)]
pub struct BaseRequestBuilder {
    adapter: Arc<dyn RequestAdapter>,
    url_template: &'static str,
    path_parameters: PathParameters,
}

impl fmt::Debug for BaseRequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseRequestBuilder")
            .field("url_template", &self.url_template)
            .field("path_parameters", &self.path_parameters)
            .finish_non_exhaustive()
    }
}

impl BaseRequestBuilder {
    pub fn new(
        adapter: Arc<dyn RequestAdapter>,
        url_template: &'static str,
        path_parameters: PathParameters,
    ) -> Self {
        Self {
            adapter,
            url_template,
            path_parameters,
        }
    }

    pub fn with_raw_url(
        adapter: Arc<dyn RequestAdapter>,
        url_template: &'static str,
        raw_url: impl Into<String>,
    ) -> Self {
        let mut path_parameters = PathParameters::new();
        path_parameters.insert(RAW_URL_KEY.to_string(), raw_url.into());
        Self::new(adapter, url_template, path_parameters)
    }

    pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        &self.adapter
    }

    pub fn url_template(&self) -> &'static str {
        self.url_template
    }

    pub fn path_parameters(&self) -> &PathParameters {
        &self.path_parameters
    }

    /// Navigate to a child node, keeping the current path parameters.
    pub fn child<B: RequestBuilder>(&self) -> B {
        B::from_base(Self::new(
            self.adapter.clone(),
            B::URL_TEMPLATE,
            self.path_parameters.clone(),
        ))
    }

    /// Navigate to a child node that adds one path parameter.
    pub fn child_with<B: RequestBuilder>(&self, key: &str, value: impl Into<String>) -> B {
        let mut path_parameters = self.path_parameters.clone();
        path_parameters.insert(key.to_string(), value.into());
        B::from_base(Self::new(
            self.adapter.clone(),
            B::URL_TEMPLATE,
            path_parameters,
        ))
    }

    /// Build request information for this node, defaulting `Accept` to JSON.
    pub fn request_information<Q: QueryParameters>(
        &self,
        method: Method,
        config: Option<RequestConfiguration<Q>>,
    ) -> RequestInformation {
        self.request_information_accepting(method, config, JSON_CONTENT_TYPE)
    }

    pub fn request_information_accepting<Q: QueryParameters>(
        &self,
        method: Method,
        config: Option<RequestConfiguration<Q>>,
        accept: &'static str,
    ) -> RequestInformation {
        let mut info = RequestInformation::new(
            method,
            self.url_template,
            self.path_parameters.clone(),
        );
        info.configure(config);
        info.try_add_header(ACCEPT, accept);
        info
    }

    pub fn request_information_with_body<B, Q>(
        &self,
        method: Method,
        body: &B,
        config: Option<RequestConfiguration<Q>>,
    ) -> GraphResult<RequestInformation>
    where
        B: Serialize + ?Sized,
        Q: QueryParameters,
    {
        let mut info = self.request_information(method, config);
        info.set_json_content(body)?;
        Ok(info)
    }

    pub fn request_information_with_stream<Q: QueryParameters>(
        &self,
        method: Method,
        content: Bytes,
        content_type: &str,
        config: Option<RequestConfiguration<Q>>,
    ) -> GraphResult<RequestInformation> {
        let mut info = self.request_information(method, config);
        info.set_stream_content(content, content_type)?;
        Ok(info)
    }
}
