//! `identity/conditionalAccess/authenticationStrength`: authentication
//! method modes and the strength policies built from them.

use graphid_core::ItemQueryParameters;

use crate::models::{
    AuthenticationMethodModeDetail, AuthenticationStrengthPolicy, AuthenticationStrengthRoot,
    UpdateAllowedCombinationsPostRequestBody, UpdateAllowedCombinationsResult,
};

pub const AUTHENTICATION_METHOD_MODE_DETAIL_ID: &str = "authenticationMethodModeDetail%2Did";
pub const AUTHENTICATION_STRENGTH_POLICY_ID: &str = "authenticationStrengthPolicy%2Did";
pub const AUTHENTICATION_METHOD_MODES_KEY: &str = "authenticationMethodModes";

request_builder! {
    /// Provides operations to manage the authenticationStrength property of the microsoft.graph.conditionalAccessRoot entity.
    AuthenticationStrengthRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationStrength{?%24expand,%24select}";
    /// Defines the authentication strength policies, valid authentication
    /// method combinations, and authentication method mode details.
    get(ItemQueryParameters) -> AuthenticationStrengthRoot;
    patch(AuthenticationStrengthRoot) -> AuthenticationStrengthRoot;
    delete;
}

impl AuthenticationStrengthRequestBuilder {
    pub fn authentication_method_modes(&self) -> AuthenticationMethodModesRequestBuilder {
        self.base.child()
    }

    pub fn policies(&self) -> AuthenticationStrengthPoliciesRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    AuthenticationMethodModesRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationStrength/authenticationMethodModes{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Names and descriptions of all valid authentication method modes in the system.
    list(AuthenticationMethodModeDetail);
    post(AuthenticationMethodModeDetail) -> AuthenticationMethodModeDetail;
}

impl AuthenticationMethodModesRequestBuilder {
    pub fn by_authentication_method_mode_detail_id(
        &self,
        id: impl Into<String>,
    ) -> AuthenticationMethodModeDetailItemRequestBuilder {
        self.base.child_with(AUTHENTICATION_METHOD_MODE_DETAIL_ID, id)
    }

    pub fn count(&self) -> AuthenticationMethodModesCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    AuthenticationMethodModesCountRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationStrength/authenticationMethodModes/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    AuthenticationMethodModeDetailItemRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationStrength/authenticationMethodModes/{authenticationMethodModeDetail%2Did}{?%24expand,%24select}";
    get(ItemQueryParameters) -> AuthenticationMethodModeDetail;
    patch(AuthenticationMethodModeDetail) -> AuthenticationMethodModeDetail;
    delete;
}

request_builder! {
    /// Provides operations to manage the policies property of the microsoft.graph.authenticationStrengthRoot entity.
    AuthenticationStrengthPoliciesRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationStrength/policies{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// A collection of authentication strength policies that exist for this tenant,
    /// including both built-in and custom policies.
    list(AuthenticationStrengthPolicy);
    post(AuthenticationStrengthPolicy) -> AuthenticationStrengthPolicy;
}

impl AuthenticationStrengthPoliciesRequestBuilder {
    pub fn by_authentication_strength_policy_id(
        &self,
        id: impl Into<String>,
    ) -> AuthenticationStrengthPolicyItemRequestBuilder {
        self.base.child_with(AUTHENTICATION_STRENGTH_POLICY_ID, id)
    }

    pub fn count(&self) -> AuthenticationStrengthPoliciesCountRequestBuilder {
        self.base.child()
    }

    /// Policies whose allowed combinations include the given method modes,
    /// e.g. `"password,voice"`.
    pub fn find_by_method_mode(
        &self,
        authentication_method_modes: impl Into<String>,
    ) -> FindByMethodModeRequestBuilder {
        self.base
            .child_with(AUTHENTICATION_METHOD_MODES_KEY, authentication_method_modes)
    }
}

request_builder! {
    AuthenticationStrengthPoliciesCountRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationStrength/policies/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    /// Provides operations to call the findByMethodMode method.
    FindByMethodModeRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationStrength/policies/findByMethodMode(authenticationMethodModes='{authenticationMethodModes}'){?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Invoke function findByMethodMode
    list(AuthenticationStrengthPolicy);
}

request_builder! {
    AuthenticationStrengthPolicyItemRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationStrength/policies/{authenticationStrengthPolicy%2Did}{?%24expand,%24select}";
    get(ItemQueryParameters) -> AuthenticationStrengthPolicy;
    /// Only the display name and description of a custom policy can be
    /// patched. Combinations are changed with `update_allowed_combinations`.
    patch(AuthenticationStrengthPolicy) -> AuthenticationStrengthPolicy;
    delete;
}

impl AuthenticationStrengthPolicyItemRequestBuilder {
    pub fn update_allowed_combinations(&self) -> UpdateAllowedCombinationsRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    /// Provides operations to call the updateAllowedCombinations method.
    UpdateAllowedCombinationsRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationStrength/policies/{authenticationStrengthPolicy%2Did}/updateAllowedCombinations";
    /// Update the allowedCombinations property of an authenticationStrengthPolicy object.
    post(UpdateAllowedCombinationsPostRequestBody) -> UpdateAllowedCombinationsResult;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::RecordingAdapter;

    #[tokio::test]
    async fn find_by_method_mode_encodes_argument() {
        let (client, recorded) = RecordingAdapter::client();
        recorded.respond_json(json!({ "value": [{ "id": "00000000-0000-0000-0000-000000000002" }] }));

        let policies = client
            .identity()
            .conditional_access()
            .authentication_strength()
            .policies()
            .find_by_method_mode("password,voice")
            .get_all(None)
            .await
            .unwrap();

        assert_eq!(policies.len(), 1);
        assert_eq!(
            recorded.last().url,
            "https://graph.test/v1.0/identity/conditionalAccess/authenticationStrength/policies/findByMethodMode(authenticationMethodModes='password%2Cvoice')"
        );
    }

    #[tokio::test]
    async fn update_allowed_combinations() {
        let (client, recorded) = RecordingAdapter::client();
        recorded.respond_json(json!({
            "currentCombinations": ["password,voice"],
            "previousCombinations": ["fido2"],
            "conditionalAccessReferences": []
        }));

        let body = UpdateAllowedCombinationsPostRequestBody {
            allowed_combinations: vec!["password,voice".into()],
        };
        let result = client
            .identity()
            .conditional_access()
            .authentication_strength()
            .policies()
            .by_authentication_strength_policy_id("5a2e2a0d")
            .update_allowed_combinations()
            .post(&body, None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.previous_combinations, vec!["fido2"]);
        let request = recorded.last();
        assert_eq!(
            request.url,
            "https://graph.test/v1.0/identity/conditionalAccess/authenticationStrength/policies/5a2e2a0d/updateAllowedCombinations"
        );
        assert_eq!(
            request.body,
            Some(json!({ "allowedCombinations": ["password,voice"] }))
        );
    }

    #[tokio::test]
    async fn method_mode_count() {
        let (client, recorded) = RecordingAdapter::client();
        recorded.respond(http::StatusCode::OK, "18");

        let count = client
            .identity()
            .conditional_access()
            .authentication_strength()
            .authentication_method_modes()
            .count()
            .get(None)
            .await
            .unwrap();

        assert_eq!(count, Some(18));
        assert_eq!(
            recorded.last().url,
            "https://graph.test/v1.0/identity/conditionalAccess/authenticationStrength/authenticationMethodModes/$count"
        );
    }
}
