use serde::{Deserialize, Serialize};

use super::AdditionalData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationEventListener {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_events_flow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<AuthenticationConditions>,
    /// Listener specific handler, e.g. the custom extension of an
    /// `onTokenIssuanceStartListener`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<serde_json::Value>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<AuthenticationConditionsApplications>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationConditionsApplications {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_applications: Vec<AuthenticationConditionApplication>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationConditionApplication {
    pub app_id: String,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// A customer identity sign-up or sign-in experience, e.g.
/// `externalUsersSelfServiceSignUpEventsFlow`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationEventsFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<AuthenticationConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_interactive_auth_flow_start: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_authentication_method_load_start: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_attribute_collection: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_user_create_start: Option<serde_json::Value>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl AuthenticationEventsFlow {
    pub const EXTERNAL_USERS_SELF_SERVICE_SIGN_UP: &'static str =
        "#microsoft.graph.externalUsersSelfServiceSignUpEventsFlow";

    pub fn is_external_users_self_service_sign_up(&self) -> bool {
        self.odata_type.as_deref() == Some(Self::EXTERNAL_USERS_SELF_SERVICE_SIGN_UP)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn listener_keeps_handler_and_conditions() {
        let listener: AuthenticationEventListener = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.onTokenIssuanceStartListener",
            "id": "990d94e5",
            "conditions": {
                "applications": {
                    "includeApplications": [{ "appId": "63856651" }]
                }
            },
            "priority": 500,
            "handler": {
                "@odata.type": "#microsoft.graph.onTokenIssuanceStartCustomExtensionHandler",
                "customExtension": { "id": "6fc5012e" }
            }
        }))
        .unwrap();

        let apps = listener.conditions.unwrap().applications.unwrap();
        assert_eq!(apps.include_applications[0].app_id, "63856651");
        assert_eq!(listener.handler.unwrap()["customExtension"]["id"], "6fc5012e");
        assert_eq!(listener.additional_data["priority"], 500);
    }

    #[test]
    fn flow_type_check() {
        let flow: AuthenticationEventsFlow = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.externalUsersSelfServiceSignUpEventsFlow",
            "id": "0313cc37",
            "displayName": "Woodgrove Drive User Flow"
        }))
        .unwrap();
        assert!(flow.is_external_users_self_service_sign_up());
        assert_eq!(flow.display_name.as_deref(), Some("Woodgrove Drive User Flow"));
    }
}
