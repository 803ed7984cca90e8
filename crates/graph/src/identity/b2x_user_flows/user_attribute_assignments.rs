use graphid_core::ItemQueryParameters;

use crate::models::{
    AssignmentOrder, IdentityUserFlowAttribute, IdentityUserFlowAttributeAssignment,
    SetOrderPostRequestBody,
};

pub const IDENTITY_USER_FLOW_ATTRIBUTE_ASSIGNMENT_ID: &str =
    "identityUserFlowAttributeAssignment%2Did";

request_builder! {
    /// Provides operations to manage the userAttributeAssignments property of the microsoft.graph.b2xIdentityUserFlow entity.
    UserAttributeAssignmentsRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/userAttributeAssignments{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get the identityUserFlowAttributeAssignment resources from the userAttributeAssignments navigation property.
    list(IdentityUserFlowAttributeAssignment);
    /// Create a new identityUserFlowAttributeAssignment object in a B2X user flow.
    post(IdentityUserFlowAttributeAssignment) -> IdentityUserFlowAttributeAssignment;
}

impl UserAttributeAssignmentsRequestBuilder {
    pub fn by_identity_user_flow_attribute_assignment_id(
        &self,
        id: impl Into<String>,
    ) -> IdentityUserFlowAttributeAssignmentItemRequestBuilder {
        self.base
            .child_with(IDENTITY_USER_FLOW_ATTRIBUTE_ASSIGNMENT_ID, id)
    }

    pub fn count(&self) -> UserAttributeAssignmentsCountRequestBuilder {
        self.base.child()
    }

    pub fn get_order(&self) -> GetOrderRequestBuilder {
        self.base.child()
    }

    pub fn set_order(&self) -> SetOrderRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    UserAttributeAssignmentsCountRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/userAttributeAssignments/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    /// Provides operations to call the getOrder method.
    GetOrderRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/userAttributeAssignments/getOrder()";
    /// Get the order of identityUserFlowAttributeAssignments being collected within a user flow.
    get(()) -> AssignmentOrder;
}

request_builder! {
    /// Provides operations to call the setOrder method.
    SetOrderRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/userAttributeAssignments/setOrder";
    /// Set the order of identityUserFlowAttributeAssignments being collected within a user flow.
    post(SetOrderPostRequestBody);
}

request_builder! {
    IdentityUserFlowAttributeAssignmentItemRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/userAttributeAssignments/{identityUserFlowAttributeAssignment%2Did}{?%24expand,%24select}";
    /// Read the properties and relationships of an identityUserFlowAttributeAssignment object.
    get(ItemQueryParameters) -> IdentityUserFlowAttributeAssignment;
    /// Update the properties of a identityUserFlowAttributeAssignment object.
    patch(IdentityUserFlowAttributeAssignment) -> IdentityUserFlowAttributeAssignment;
    /// Delete an identityUserFlowAttributeAssignment object.
    delete;
}

impl IdentityUserFlowAttributeAssignmentItemRequestBuilder {
    pub fn user_attribute(&self) -> UserAttributeRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    /// Provides operations to manage the userAttribute property of the microsoft.graph.identityUserFlowAttributeAssignment entity.
    UserAttributeRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/userAttributeAssignments/{identityUserFlowAttributeAssignment%2Did}/userAttribute{?%24expand,%24select}";
    /// The user attribute that you want to add to your user flow.
    get(ItemQueryParameters) -> IdentityUserFlowAttribute;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::RecordingAdapter;

    fn assignments(flow: &str) -> (UserAttributeAssignmentsRequestBuilder, std::sync::Arc<RecordingAdapter>) {
        let (client, recorded) = RecordingAdapter::client();
        let builder = client
            .identity()
            .b2x_user_flows()
            .by_b2x_identity_user_flow_id(flow)
            .user_attribute_assignments();
        (builder, recorded)
    }

    #[tokio::test]
    async fn get_and_set_order() {
        let (assignments, recorded) = assignments("B2X_1_Partner");
        recorded.respond_json(json!({ "order": ["City", "extension_GUID_ShoeSize"] }));

        let mut order = assignments.get_order().get(None).await.unwrap().unwrap();
        assert_eq!(
            recorded.last().url,
            "https://graph.test/v1.0/identity/b2xUserFlows/B2X_1_Partner/userAttributeAssignments/getOrder()"
        );

        order.order.reverse();
        let body = SetOrderPostRequestBody {
            new_assignment_order: order,
        };
        assignments.set_order().post(&body, None).await.unwrap();

        let request = recorded.last();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(
            request.url,
            "https://graph.test/v1.0/identity/b2xUserFlows/B2X_1_Partner/userAttributeAssignments/setOrder"
        );
        assert_eq!(
            request.body,
            Some(json!({
                "newAssignmentOrder": { "order": ["extension_GUID_ShoeSize", "City"] }
            }))
        );
    }

    #[tokio::test]
    async fn user_attribute_of_assignment() {
        let (assignments, recorded) = assignments("B2X_1_Partner");
        recorded.respond_json(json!({
            "id": "City",
            "displayName": "City",
            "userFlowAttributeType": "builtIn",
            "dataType": "string"
        }));

        let attribute = assignments
            .by_identity_user_flow_attribute_assignment_id("City")
            .user_attribute()
            .get(None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(attribute.display_name.as_deref(), Some("City"));
        assert_eq!(
            recorded.last().url,
            "https://graph.test/v1.0/identity/b2xUserFlows/B2X_1_Partner/userAttributeAssignments/City/userAttribute"
        );
    }
}
