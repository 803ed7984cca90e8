use graphid_core::{FunctionQueryParameters, ItemQueryParameters};

use crate::models::IdentityProviderBase;

pub const IDENTITY_PROVIDER_BASE_ID: &str = "identityProviderBase%2Did";

request_builder! {
    /// Provides operations to manage the identityProviders property of the microsoft.graph.identityContainer entity.
    IdentityProvidersRequestBuilder => "{+baseurl}/identity/identityProviders{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get a collection of identity provider resources that are configured for
    /// a tenant, and that are derived from identityProviderBase.
    list(IdentityProviderBase);
    /// Create an identity provider object of the type given by `@odata.type`.
    post(IdentityProviderBase) -> IdentityProviderBase;
}

impl IdentityProvidersRequestBuilder {
    pub fn by_identity_provider_base_id(
        &self,
        id: impl Into<String>,
    ) -> IdentityProviderBaseItemRequestBuilder {
        self.base.child_with(IDENTITY_PROVIDER_BASE_ID, id)
    }

    pub fn count(&self) -> IdentityProvidersCountRequestBuilder {
        self.base.child()
    }

    pub fn available_provider_types(&self) -> AvailableProviderTypesRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    IdentityProvidersCountRequestBuilder => "{+baseurl}/identity/identityProviders/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    /// Provides operations to call the availableProviderTypes method.
    AvailableProviderTypesRequestBuilder => "{+baseurl}/identity/identityProviders/availableProviderTypes(){?%24count,%24filter,%24search,%24skip,%24top}";
    /// Get all identity providers supported in a directory.
    list(String, FunctionQueryParameters);
}

request_builder! {
    IdentityProviderBaseItemRequestBuilder => "{+baseurl}/identity/identityProviders/{identityProviderBase%2Did}{?%24expand,%24select}";
    /// Retrieve the properties and relationships of the specified identity provider.
    get(ItemQueryParameters) -> IdentityProviderBase;
    /// Update the properties of the specified identity provider. The
    /// `@odata.type` of the body must match the provider.
    patch(IdentityProviderBase) -> IdentityProviderBase;
    delete;
}
