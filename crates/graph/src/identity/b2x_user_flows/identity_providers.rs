use graphid_core::ItemQueryParameters;

use crate::models::IdentityProvider;

pub const IDENTITY_PROVIDER_ID: &str = "identityProvider%2Did";

request_builder! {
    /// Provides operations to manage the identityProviders property of the microsoft.graph.b2xIdentityUserFlow entity.
    UserFlowIdentityProvidersRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/identityProviders{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get the identity providers in a b2xIdentityUserFlow object.
    list(IdentityProvider);
}

impl UserFlowIdentityProvidersRequestBuilder {
    pub fn by_identity_provider_id(
        &self,
        id: impl Into<String>,
    ) -> UserFlowIdentityProviderItemRequestBuilder {
        self.base.child_with(IDENTITY_PROVIDER_ID, id)
    }

    pub fn count(&self) -> UserFlowIdentityProvidersCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    UserFlowIdentityProvidersCountRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/identityProviders/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    UserFlowIdentityProviderItemRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/identityProviders/{identityProvider%2Did}{?%24expand,%24select}";
    get(ItemQueryParameters) -> IdentityProvider;
}
