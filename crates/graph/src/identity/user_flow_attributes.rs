use graphid_core::ItemQueryParameters;

use crate::models::IdentityUserFlowAttribute;

pub const IDENTITY_USER_FLOW_ATTRIBUTE_ID: &str = "identityUserFlowAttribute%2Did";

request_builder! {
    /// Provides operations to manage the userFlowAttributes property of the microsoft.graph.identityContainer entity.
    UserFlowAttributesRequestBuilder => "{+baseurl}/identity/userFlowAttributes{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Retrieve a list of identityUserFlowAttribute objects.
    list(IdentityUserFlowAttribute);
    /// Create a new custom identityUserFlowAttribute object.
    post(IdentityUserFlowAttribute) -> IdentityUserFlowAttribute;
}

impl UserFlowAttributesRequestBuilder {
    pub fn by_identity_user_flow_attribute_id(
        &self,
        id: impl Into<String>,
    ) -> IdentityUserFlowAttributeItemRequestBuilder {
        self.base.child_with(IDENTITY_USER_FLOW_ATTRIBUTE_ID, id)
    }

    pub fn count(&self) -> UserFlowAttributesCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    UserFlowAttributesCountRequestBuilder => "{+baseurl}/identity/userFlowAttributes/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    IdentityUserFlowAttributeItemRequestBuilder => "{+baseurl}/identity/userFlowAttributes/{identityUserFlowAttribute%2Did}{?%24expand,%24select}";
    /// Retrieve the properties and relationships of a identityUserFlowAttribute object.
    get(ItemQueryParameters) -> IdentityUserFlowAttribute;
    /// Update the properties of a custom identityUserFlowAttribute object.
    patch(IdentityUserFlowAttribute) -> IdentityUserFlowAttribute;
    /// Delete a custom identityUserFlowAttribute.
    delete;
}
