use serde::{Deserialize, Serialize};

use super::{
    AdditionalData, AuthenticationEventListener, AuthenticationEventsFlow, B2xIdentityUserFlow,
    ConditionalAccessRoot, IdentityApiConnector, IdentityProviderBase, IdentityUserFlowAttribute,
};

/// The `identity` singleton. Navigation collections are only populated when
/// requested with `$expand`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityContainer {
    #[serde(rename = "@odata.context", skip_serializing_if = "Option::is_none")]
    pub odata_context: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub api_connectors: Vec<IdentityApiConnector>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authentication_event_listeners: Vec<AuthenticationEventListener>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authentication_events_flows: Vec<AuthenticationEventsFlow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub b2x_user_flows: Vec<B2xIdentityUserFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_access: Option<ConditionalAccessRoot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identity_providers: Vec<IdentityProviderBase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_flow_attributes: Vec<IdentityUserFlowAttribute>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}
