//! Request builders for the `/identity` tree.
//!
//! Navigation mirrors the URL: every segment is a method returning the
//! builder of the next node, and `by_*_id` methods add the key of a
//! collection item to the path parameters.

pub mod api_connectors;
pub mod authentication_event_listeners;
pub mod authentication_events_flows;
pub mod b2x_user_flows;
pub mod conditional_access;
pub mod identity_providers;
pub mod user_flow_attributes;

use graphid_core::ItemQueryParameters;

use crate::models::IdentityContainer;

use self::api_connectors::ApiConnectorsRequestBuilder;
use self::authentication_event_listeners::AuthenticationEventListenersRequestBuilder;
use self::authentication_events_flows::AuthenticationEventsFlowsRequestBuilder;
use self::b2x_user_flows::B2xUserFlowsRequestBuilder;
use self::conditional_access::ConditionalAccessRequestBuilder;
use self::identity_providers::IdentityProvidersRequestBuilder;
use self::user_flow_attributes::UserFlowAttributesRequestBuilder;

request_builder! {
    /// Provides operations to manage the identityContainer singleton.
    IdentityRequestBuilder => "{+baseurl}/identity{?%24expand,%24select}";
    /// Get identity
    get(ItemQueryParameters) -> IdentityContainer;
    /// Update identity
    patch(IdentityContainer) -> IdentityContainer;
}

impl IdentityRequestBuilder {
    pub fn api_connectors(&self) -> ApiConnectorsRequestBuilder {
        self.base.child()
    }

    pub fn authentication_event_listeners(&self) -> AuthenticationEventListenersRequestBuilder {
        self.base.child()
    }

    pub fn authentication_events_flows(&self) -> AuthenticationEventsFlowsRequestBuilder {
        self.base.child()
    }

    pub fn b2x_user_flows(&self) -> B2xUserFlowsRequestBuilder {
        self.base.child()
    }

    pub fn conditional_access(&self) -> ConditionalAccessRequestBuilder {
        self.base.child()
    }

    pub fn identity_providers(&self) -> IdentityProvidersRequestBuilder {
        self.base.child()
    }

    pub fn user_flow_attributes(&self) -> UserFlowAttributesRequestBuilder {
        self.base.child()
    }
}
