use serde::{Deserialize, Serialize};

use super::{AdditionalData, IdentityApiConnector, IdentityProvider, IdentityProviderBase};
use super::IdentityUserFlowAttribute;

/// A self-service sign-up user flow for B2B/B2X guests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct B2xIdentityUserFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_flow_type: Option<UserFlowType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_flow_type_version: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_connector_configuration: Option<UserFlowApiConnectorConfiguration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identity_providers: Vec<IdentityProvider>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<UserFlowLanguageConfiguration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_attribute_assignments: Vec<IdentityUserFlowAttributeAssignment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_flow_identity_providers: Vec<IdentityProviderBase>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl B2xIdentityUserFlow {
    pub fn sign_up_or_sign_in(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            user_flow_type: Some(UserFlowType::SignUpOrSignIn),
            user_flow_type_version: Some(1.0),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserFlowType {
    SignUp,
    SignIn,
    SignUpOrSignIn,
    PasswordReset,
    ProfileUpdate,
    ResourceOwner,
    #[serde(other)]
    UnknownFutureValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFlowApiConnectorConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_attribute_collection: Option<IdentityApiConnector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_federation_signup: Option<IdentityApiConnector>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFlowLanguageConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_pages: Vec<UserFlowLanguagePage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides_pages: Vec<UserFlowLanguagePage>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Localized page of a user flow. The page content is the `$value` stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFlowLanguagePage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUserFlowAttributeAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_optional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_verification: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_attribute_values: Vec<UserAttributeValuesItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_input_type: Option<IdentityUserFlowAttributeInputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attribute: Option<IdentityUserFlowAttribute>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl IdentityUserFlowAttributeAssignment {
    /// Assignment body binding an existing attribute by id, as accepted by POST.
    pub fn for_attribute(
        attribute_id: impl Into<String>,
        display_name: impl Into<String>,
        input_type: IdentityUserFlowAttributeInputType,
        is_optional: bool,
    ) -> Self {
        Self {
            display_name: Some(display_name.into()),
            is_optional: Some(is_optional),
            user_input_type: Some(input_type),
            user_attribute: Some(IdentityUserFlowAttribute {
                id: Some(attribute_id.into()),
                ..Default::default()
            }),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttributeValuesItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentityUserFlowAttributeInputType {
    TextBox,
    DateTimeDropdown,
    RadioSingleSelect,
    DropdownSingleSelect,
    EmailBox,
    CheckboxMultiSelect,
    #[serde(other)]
    UnknownFutureValue,
}

/// Display order of the attribute assignments of a user flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentOrder {
    #[serde(default)]
    pub order: Vec<String>,
}

impl AssignmentOrder {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            order: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of `userAttributeAssignments/setOrder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOrderPostRequestBody {
    pub new_assignment_order: AssignmentOrder,
}
