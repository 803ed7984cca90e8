//! `identity/b2xUserFlows` and everything below a single user flow.

pub mod api_connector_configuration;
pub mod identity_providers;
pub mod languages;
pub mod user_attribute_assignments;

use graphid_core::ItemQueryParameters;

use crate::models::B2xIdentityUserFlow;

use self::api_connector_configuration::ApiConnectorConfigurationRequestBuilder;
use self::identity_providers::UserFlowIdentityProvidersRequestBuilder;
use self::languages::LanguagesRequestBuilder;
use self::user_attribute_assignments::UserAttributeAssignmentsRequestBuilder;

pub const B2X_IDENTITY_USER_FLOW_ID: &str = "b2xIdentityUserFlow%2Did";

request_builder! {
    /// Provides operations to manage the b2xUserFlows property of the microsoft.graph.identityContainer entity.
    B2xUserFlowsRequestBuilder => "{+baseurl}/identity/b2xUserFlows{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Retrieve a list of b2xIdentityUserFlow objects.
    list(B2xIdentityUserFlow);
    /// Create a new b2xIdentityUserFlow object.
    post(B2xIdentityUserFlow) -> B2xIdentityUserFlow;
}

impl B2xUserFlowsRequestBuilder {
    pub fn by_b2x_identity_user_flow_id(
        &self,
        id: impl Into<String>,
    ) -> B2xIdentityUserFlowItemRequestBuilder {
        self.base.child_with(B2X_IDENTITY_USER_FLOW_ID, id)
    }

    pub fn count(&self) -> B2xUserFlowsCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    B2xUserFlowsCountRequestBuilder => "{+baseurl}/identity/b2xUserFlows/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    B2xIdentityUserFlowItemRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}{?%24expand,%24select}";
    /// Retrieve the properties and relationships of a b2xIdentityUserFlow object.
    get(ItemQueryParameters) -> B2xIdentityUserFlow;
    /// Update the navigation property b2xUserFlows in identity
    patch(B2xIdentityUserFlow) -> B2xIdentityUserFlow;
    /// Delete a b2xIdentityUserFlow object.
    delete;
}

impl B2xIdentityUserFlowItemRequestBuilder {
    pub fn api_connector_configuration(&self) -> ApiConnectorConfigurationRequestBuilder {
        self.base.child()
    }

    pub fn identity_providers(&self) -> UserFlowIdentityProvidersRequestBuilder {
        self.base.child()
    }

    pub fn languages(&self) -> LanguagesRequestBuilder {
        self.base.child()
    }

    pub fn user_attribute_assignments(&self) -> UserAttributeAssignmentsRequestBuilder {
        self.base.child()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::UserFlowType;
    use crate::testing::RecordingAdapter;

    #[tokio::test]
    async fn create_user_flow() {
        let (client, recorded) = RecordingAdapter::client();
        recorded.respond_json(json!({
            "id": "B2X_1_Partner",
            "userFlowType": "signUpOrSignIn",
            "userFlowTypeVersion": 1
        }));

        let body = B2xIdentityUserFlow::sign_up_or_sign_in("Partner");
        let created = client
            .identity()
            .b2x_user_flows()
            .post(&body, None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.user_flow_type, Some(UserFlowType::SignUpOrSignIn));
        assert_eq!(
            recorded.last().body,
            Some(json!({
                "id": "Partner",
                "userFlowType": "signUpOrSignIn",
                "userFlowTypeVersion": 1.0
            }))
        );
    }

    #[test]
    fn item_navigation_carries_user_flow_id() {
        let (client, _) = RecordingAdapter::client();
        let languages = client
            .identity()
            .b2x_user_flows()
            .by_b2x_identity_user_flow_id("B2X_1_Partner")
            .languages();
        let base = graphid_core::RequestBuilder::base(&languages);
        assert_eq!(
            base.path_parameters().get(B2X_IDENTITY_USER_FLOW_ID).map(String::as_str),
            Some("B2X_1_Partner")
        );
    }
}
