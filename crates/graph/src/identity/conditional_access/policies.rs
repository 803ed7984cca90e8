use graphid_core::ItemQueryParameters;

use crate::models::ConditionalAccessPolicy;

pub const CONDITIONAL_ACCESS_POLICY_ID: &str = "conditionalAccessPolicy%2Did";

request_builder! {
    /// Provides operations to manage the policies property of the microsoft.graph.conditionalAccessRoot entity.
    ConditionalAccessPoliciesRequestBuilder => "{+baseurl}/identity/conditionalAccess/policies{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Retrieve a list of conditionalAccessPolicy objects.
    list(ConditionalAccessPolicy);
    /// Create a new conditionalAccessPolicy.
    post(ConditionalAccessPolicy) -> ConditionalAccessPolicy;
}

impl ConditionalAccessPoliciesRequestBuilder {
    pub fn by_conditional_access_policy_id(
        &self,
        id: impl Into<String>,
    ) -> ConditionalAccessPolicyItemRequestBuilder {
        self.base.child_with(CONDITIONAL_ACCESS_POLICY_ID, id)
    }

    pub fn count(&self) -> ConditionalAccessPoliciesCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    ConditionalAccessPoliciesCountRequestBuilder => "{+baseurl}/identity/conditionalAccess/policies/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    ConditionalAccessPolicyItemRequestBuilder => "{+baseurl}/identity/conditionalAccess/policies/{conditionalAccessPolicy%2Did}{?%24expand,%24select}";
    /// Retrieve the properties and relationships of a conditionalAccessPolicy object.
    get(ItemQueryParameters) -> ConditionalAccessPolicy;
    /// Update the properties of a conditionalAccessPolicy object.
    patch(ConditionalAccessPolicy) -> ConditionalAccessPolicy;
    /// Delete a conditionalAccessPolicy object.
    delete;
}

#[cfg(test)]
mod tests {
    use graphid_core::{CollectionQueryParameters, RequestConfiguration};
    use http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::models::ConditionalAccessPolicyState;
    use crate::testing::RecordingAdapter;

    #[tokio::test]
    async fn list_enabled_policies() {
        let (client, recorded) = RecordingAdapter::client();
        recorded.respond_json(json!({
            "@odata.count": 1,
            "value": [{ "id": "p1", "displayName": "Block legacy auth", "state": "enabled" }]
        }));

        let query = CollectionQueryParameters::new()
            .count(true)
            .filter("state eq 'enabled'")
            .select(["id", "displayName", "state"]);
        let page = client
            .identity()
            .conditional_access()
            .policies()
            .get(Some(RequestConfiguration::from(query)))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(page.count, Some(1));
        assert_eq!(page.value[0].state, Some(ConditionalAccessPolicyState::Enabled));
        assert_eq!(
            recorded.last().url,
            "https://graph.test/v1.0/identity/conditionalAccess/policies?%24count=true&%24filter=state%20eq%20%27enabled%27&%24select=id,displayName,state"
        );
    }

    #[tokio::test]
    async fn patch_state_returns_none_on_no_content() {
        let (client, recorded) = RecordingAdapter::client();
        recorded.respond(StatusCode::NO_CONTENT, "");

        let updated = client
            .identity()
            .conditional_access()
            .policies()
            .by_conditional_access_policy_id("p1")
            .patch(
                &ConditionalAccessPolicy::state_update(
                    ConditionalAccessPolicyState::EnabledForReportingButNotEnforced,
                ),
                None,
            )
            .await
            .unwrap();

        assert!(updated.is_none());
        assert_eq!(
            recorded.last().body,
            Some(json!({ "state": "enabledForReportingButNotEnforced" }))
        );
    }

    #[tokio::test]
    async fn server_error_without_odata_body() {
        let (client, recorded) = RecordingAdapter::client();
        recorded.respond(StatusCode::BAD_GATEWAY, "upstream unavailable");

        let err = client
            .identity()
            .conditional_access()
            .policies()
            .get(None)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(err.code().is_none());
    }
}
