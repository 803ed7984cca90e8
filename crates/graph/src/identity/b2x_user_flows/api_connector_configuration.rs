//! API connectors plugged into the steps of a user flow. Each step is a
//! single-valued navigation property read with GET and set through `$ref`.

use graphid_core::ItemQueryParameters;

use crate::models::{IdentityApiConnector, ReferenceUpdate};

request_builder! {
    /// Provides operations to manage the apiConnectorConfiguration property of the microsoft.graph.b2xIdentityUserFlow entity.
    ApiConnectorConfigurationRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/apiConnectorConfiguration";
}

impl ApiConnectorConfigurationRequestBuilder {
    pub fn post_attribute_collection(&self) -> PostAttributeCollectionRequestBuilder {
        self.base.child()
    }

    pub fn post_federation_signup(&self) -> PostFederationSignupRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    PostAttributeCollectionRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/apiConnectorConfiguration/postAttributeCollection{?%24expand,%24select}";
    /// Get postAttributeCollection from identity
    get(ItemQueryParameters) -> IdentityApiConnector;
}

impl PostAttributeCollectionRequestBuilder {
    pub fn reference(&self) -> PostAttributeCollectionRefRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    PostAttributeCollectionRefRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/apiConnectorConfiguration/postAttributeCollection/$ref";
    /// Update the ref of navigation property postAttributeCollection in identity
    put(ReferenceUpdate);
    /// Delete ref of navigation property postAttributeCollection for identity
    delete;
}

request_builder! {
    PostFederationSignupRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/apiConnectorConfiguration/postFederationSignup{?%24expand,%24select}";
    /// Get postFederationSignup from identity
    get(ItemQueryParameters) -> IdentityApiConnector;
}

impl PostFederationSignupRequestBuilder {
    pub fn reference(&self) -> PostFederationSignupRefRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    PostFederationSignupRefRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/apiConnectorConfiguration/postFederationSignup/$ref";
    /// Update the ref of navigation property postFederationSignup in identity
    put(ReferenceUpdate);
    /// Delete ref of navigation property postFederationSignup for identity
    delete;
}
