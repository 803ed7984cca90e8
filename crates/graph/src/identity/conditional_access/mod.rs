//! `identity/conditionalAccess`.

pub mod authentication_context_class_references;
pub mod authentication_strength;
pub mod named_locations;
pub mod policies;
pub mod templates;

use graphid_core::ItemQueryParameters;

use crate::models::ConditionalAccessRoot;

pub use self::authentication_context_class_references::*;
pub use self::authentication_strength::*;
pub use self::named_locations::*;
pub use self::policies::*;
pub use self::templates::*;

request_builder! {
    /// Provides operations to manage the conditionalAccess property of the microsoft.graph.identityContainer entity.
    ConditionalAccessRequestBuilder => "{+baseurl}/identity/conditionalAccess{?%24expand,%24select}";
    /// the entry point for the Conditional Access (CA) object model.
    get(ItemQueryParameters) -> ConditionalAccessRoot;
    /// Update the navigation property conditionalAccess in identity
    patch(ConditionalAccessRoot) -> ConditionalAccessRoot;
}

impl ConditionalAccessRequestBuilder {
    pub fn authentication_context_class_references(
        &self,
    ) -> AuthenticationContextClassReferencesRequestBuilder {
        self.base.child()
    }

    pub fn authentication_strength(&self) -> AuthenticationStrengthRequestBuilder {
        self.base.child()
    }

    pub fn named_locations(&self) -> NamedLocationsRequestBuilder {
        self.base.child()
    }

    pub fn policies(&self) -> ConditionalAccessPoliciesRequestBuilder {
        self.base.child()
    }

    pub fn templates(&self) -> TemplatesRequestBuilder {
        self.base.child()
    }
}
