use graphid_core::ItemQueryParameters;

use crate::models::AuthenticationEventsFlow;

pub const AUTHENTICATION_EVENTS_FLOW_ID: &str = "authenticationEventsFlow%2Did";

request_builder! {
    /// Provides operations to manage the authenticationEventsFlows property of the microsoft.graph.identityContainer entity.
    AuthenticationEventsFlowsRequestBuilder => "{+baseurl}/identity/authenticationEventsFlows{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get a collection of authentication events policies derived from authenticationEventsFlow.
    list(AuthenticationEventsFlow);
    /// Create a new authenticationEventsFlow object. Only the
    /// externalUsersSelfServiceSignUpEventsFlow type is supported.
    post(AuthenticationEventsFlow) -> AuthenticationEventsFlow;
}

impl AuthenticationEventsFlowsRequestBuilder {
    pub fn by_authentication_events_flow_id(
        &self,
        id: impl Into<String>,
    ) -> AuthenticationEventsFlowItemRequestBuilder {
        self.base.child_with(AUTHENTICATION_EVENTS_FLOW_ID, id)
    }

    pub fn count(&self) -> AuthenticationEventsFlowsCountRequestBuilder {
        self.base.child()
    }

    /// Casts the collection to microsoft.graph.externalUsersSelfServiceSignUpEventsFlow.
    pub fn external_users_self_service_sign_up_events_flow(
        &self,
    ) -> ExternalUsersSelfServiceSignUpEventsFlowsRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    AuthenticationEventsFlowsCountRequestBuilder => "{+baseurl}/identity/authenticationEventsFlows/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    /// Casts the previous resource to externalUsersSelfServiceSignUpEventsFlow.
    ExternalUsersSelfServiceSignUpEventsFlowsRequestBuilder => "{+baseurl}/identity/authenticationEventsFlows/graph.externalUsersSelfServiceSignUpEventsFlow{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get the items of type microsoft.graph.externalUsersSelfServiceSignUpEventsFlow in the collection.
    list(AuthenticationEventsFlow);
}

impl ExternalUsersSelfServiceSignUpEventsFlowsRequestBuilder {
    pub fn count(&self) -> ExternalUsersSelfServiceSignUpEventsFlowsCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    ExternalUsersSelfServiceSignUpEventsFlowsCountRequestBuilder => "{+baseurl}/identity/authenticationEventsFlows/graph.externalUsersSelfServiceSignUpEventsFlow/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    AuthenticationEventsFlowItemRequestBuilder => "{+baseurl}/identity/authenticationEventsFlows/{authenticationEventsFlow%2Did}{?%24expand,%24select}";
    /// Retrieve the properties and relationships of a specific user flow.
    get(ItemQueryParameters) -> AuthenticationEventsFlow;
    /// Update the properties of an authenticationEventsFlow object. The
    /// `@odata.type` of the body must be sent.
    patch(AuthenticationEventsFlow) -> AuthenticationEventsFlow;
    /// Delete a specific authenticationEventsFlow resource.
    delete;
}

impl AuthenticationEventsFlowItemRequestBuilder {
    /// Casts the item to microsoft.graph.externalUsersSelfServiceSignUpEventsFlow.
    pub fn external_users_self_service_sign_up_events_flow(
        &self,
    ) -> ExternalUsersSelfServiceSignUpEventsFlowItemRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    ExternalUsersSelfServiceSignUpEventsFlowItemRequestBuilder => "{+baseurl}/identity/authenticationEventsFlows/{authenticationEventsFlow%2Did}/graph.externalUsersSelfServiceSignUpEventsFlow{?%24expand,%24select}";
    get(ItemQueryParameters) -> AuthenticationEventsFlow;
}

#[cfg(test)]
mod tests {
    use graphid_core::{CountQueryParameters, RequestConfiguration};
    use http::StatusCode;
    use serde_json::json;

    use crate::testing::RecordingAdapter;

    #[tokio::test]
    async fn cast_collection_and_count() {
        let (client, recorded) = RecordingAdapter::client();
        recorded.respond_json(json!({
            "value": [{
                "@odata.type": "#microsoft.graph.externalUsersSelfServiceSignUpEventsFlow",
                "id": "0313cc37"
            }]
        }));
        recorded.respond(StatusCode::OK, "1");

        let flows = client
            .identity()
            .authentication_events_flows()
            .external_users_self_service_sign_up_events_flow();
        let page = flows.get(None).await.unwrap().unwrap();
        assert!(page.value[0].is_external_users_self_service_sign_up());
        assert_eq!(
            recorded.last().url,
            "https://graph.test/v1.0/identity/authenticationEventsFlows/graph.externalUsersSelfServiceSignUpEventsFlow"
        );

        let query = CountQueryParameters::new().filter("displayName eq 'Woodgrove'");
        let count = flows
            .count()
            .get(Some(RequestConfiguration::from(query)))
            .await
            .unwrap();
        assert_eq!(count, Some(1));
        assert_eq!(
            recorded.last().url,
            "https://graph.test/v1.0/identity/authenticationEventsFlows/graph.externalUsersSelfServiceSignUpEventsFlow/$count?%24filter=displayName%20eq%20%27Woodgrove%27"
        );
    }

    #[tokio::test]
    async fn item_cast_keeps_id() {
        let (client, recorded) = RecordingAdapter::client();
        client
            .identity()
            .authentication_events_flows()
            .by_authentication_events_flow_id("0313cc37")
            .external_users_self_service_sign_up_events_flow()
            .get(None)
            .await
            .unwrap();

        assert_eq!(
            recorded.last().url,
            "https://graph.test/v1.0/identity/authenticationEventsFlows/0313cc37/graph.externalUsersSelfServiceSignUpEventsFlow"
        );
    }
}
