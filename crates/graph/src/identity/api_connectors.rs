use graphid_core::ItemQueryParameters;

use crate::models::{IdentityApiConnector, UploadClientCertificatePostRequestBody};

pub const IDENTITY_API_CONNECTOR_ID: &str = "identityApiConnector%2Did";

request_builder! {
    /// Provides operations to manage the apiConnectors property of the microsoft.graph.identityContainer entity.
    ApiConnectorsRequestBuilder => "{+baseurl}/identity/apiConnectors{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Read the properties of an identityApiConnector object.
    list(IdentityApiConnector);
    /// Create a new identityApiConnector object.
    post(IdentityApiConnector) -> IdentityApiConnector;
}

impl ApiConnectorsRequestBuilder {
    pub fn by_identity_api_connector_id(
        &self,
        id: impl Into<String>,
    ) -> IdentityApiConnectorItemRequestBuilder {
        self.base.child_with(IDENTITY_API_CONNECTOR_ID, id)
    }

    pub fn count(&self) -> ApiConnectorsCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    ApiConnectorsCountRequestBuilder => "{+baseurl}/identity/apiConnectors/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    /// Provides operations to manage the apiConnectors property of the microsoft.graph.identityContainer entity.
    IdentityApiConnectorItemRequestBuilder => "{+baseurl}/identity/apiConnectors/{identityApiConnector%2Did}{?%24expand,%24select}";
    /// Read the properties and relationships of an identityApiConnector object.
    get(ItemQueryParameters) -> IdentityApiConnector;
    /// Update the properties of an identityApiConnector object.
    patch(IdentityApiConnector) -> IdentityApiConnector;
    /// Delete an identityApiConnector object.
    delete;
}

impl IdentityApiConnectorItemRequestBuilder {
    pub fn upload_client_certificate(&self) -> UploadClientCertificateRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    /// Provides operations to call the uploadClientCertificate method.
    UploadClientCertificateRequestBuilder => "{+baseurl}/identity/apiConnectors/{identityApiConnector%2Did}/uploadClientCertificate";
    /// Upload a PKCS 12 format key (.pfx) to an API connector's authentication
    /// configuration. The connector switches to client certificate authentication.
    post(UploadClientCertificatePostRequestBody) -> IdentityApiConnector;
}
