use graphid_core::ItemQueryParameters;

use crate::models::AuthenticationContextClassReference;

pub const AUTHENTICATION_CONTEXT_CLASS_REFERENCE_ID: &str =
    "authenticationContextClassReference%2Did";

request_builder! {
    /// Provides operations to manage the authenticationContextClassReferences property of the microsoft.graph.conditionalAccessRoot entity.
    AuthenticationContextClassReferencesRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationContextClassReferences{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Retrieve a list of authenticationContextClassReference objects.
    list(AuthenticationContextClassReference);
    post(AuthenticationContextClassReference) -> AuthenticationContextClassReference;
}

impl AuthenticationContextClassReferencesRequestBuilder {
    pub fn by_authentication_context_class_reference_id(
        &self,
        id: impl Into<String>,
    ) -> AuthenticationContextClassReferenceItemRequestBuilder {
        self.base
            .child_with(AUTHENTICATION_CONTEXT_CLASS_REFERENCE_ID, id)
    }

    pub fn count(&self) -> AuthenticationContextClassReferencesCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    AuthenticationContextClassReferencesCountRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationContextClassReferences/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    AuthenticationContextClassReferenceItemRequestBuilder => "{+baseurl}/identity/conditionalAccess/authenticationContextClassReferences/{authenticationContextClassReference%2Did}{?%24expand,%24select}";
    /// Retrieve the properties and relationships of a authenticationContextClassReference object.
    get(ItemQueryParameters) -> AuthenticationContextClassReference;
    /// Create an authenticationContextClassReference object, if the ID has not
    /// been used. If the ID has been used, this call updates the object.
    patch(AuthenticationContextClassReference) -> AuthenticationContextClassReference;
    /// Delete an authenticationContextClassReference object that's not used
    /// in any Conditional Access policy.
    delete;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::RecordingAdapter;

    #[tokio::test]
    async fn upsert_by_patch() {
        let (client, recorded) = RecordingAdapter::client();
        let body = AuthenticationContextClassReference {
            display_name: Some("Contoso medium".into()),
            description: Some("Medium protection level defined for Contoso policy".into()),
            is_available: Some(true),
            ..Default::default()
        };
        client
            .identity()
            .conditional_access()
            .authentication_context_class_references()
            .by_authentication_context_class_reference_id("c1")
            .patch(&body, None)
            .await
            .unwrap();

        let request = recorded.last();
        assert_eq!(
            request.url,
            "https://graph.test/v1.0/identity/conditionalAccess/authenticationContextClassReferences/c1"
        );
        assert_eq!(
            request.body,
            Some(json!({
                "displayName": "Contoso medium",
                "description": "Medium protection level defined for Contoso policy",
                "isAvailable": true
            }))
        );
    }
}
