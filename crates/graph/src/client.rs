use std::sync::Arc;

use graphid_core::{BaseRequestBuilder, GraphResult, PathParameters, RequestAdapter, RequestBuilder};

use crate::adapter::HttpRequestAdapter;
use crate::auth::{ClientCredentials, ClientCredentialsProvider};
use crate::identity::IdentityRequestBuilder;

/// Root of the request builder tree, bound to `{+baseurl}`.
///
/// ```no_run
/// # async fn run(client: graphid_graph::GraphServiceClient) -> graphid_graph::GraphResult<()> {
/// let policies = client
///     .identity()
///     .conditional_access()
///     .policies()
///     .get_all(None)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GraphServiceClient {
    base: BaseRequestBuilder,
}

impl RequestBuilder for GraphServiceClient {
    const URL_TEMPLATE: &'static str = "{+baseurl}";

    fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseRequestBuilder {
        &self.base
    }
}

impl GraphServiceClient {
    pub fn new(adapter: Arc<dyn RequestAdapter>) -> Self {
        Self {
            base: BaseRequestBuilder::new(adapter, Self::URL_TEMPLATE, PathParameters::new()),
        }
    }

    /// Client for an app registration using the client-credentials grant
    /// against the credentials' national cloud.
    pub fn with_credentials(credentials: ClientCredentials) -> GraphResult<Self> {
        let cloud = credentials.cloud;
        let auth = Arc::new(ClientCredentialsProvider::new(credentials));
        let adapter = HttpRequestAdapter::new(auth)?.with_cloud(cloud);
        Ok(Self::new(Arc::new(adapter)))
    }

    pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        self.base.adapter()
    }

    pub fn identity(&self) -> IdentityRequestBuilder {
        self.base.child()
    }

    /// Builder of type `B` bound to an arbitrary URL, such as an
    /// `@odata.nextLink` or an id returned by another call.
    pub fn with_url<B: RequestBuilder>(&self, raw_url: impl Into<String>) -> B {
        B::from_raw_url(raw_url, self.base.adapter().clone())
    }
}
