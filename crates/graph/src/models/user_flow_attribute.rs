use serde::{Deserialize, Serialize};

use super::AdditionalData;

/// A built-in or custom attribute collected during a user flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUserFlowAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<IdentityUserFlowAttributeDataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_flow_attribute_type: Option<IdentityUserFlowAttributeType>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl IdentityUserFlowAttribute {
    /// Body for creating a custom attribute. Only `displayName`, `description`
    /// and `dataType` are accepted on create.
    pub fn custom(
        display_name: impl Into<String>,
        description: impl Into<String>,
        data_type: IdentityUserFlowAttributeDataType,
    ) -> Self {
        Self {
            display_name: Some(display_name.into()),
            description: Some(description.into()),
            data_type: Some(data_type),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentityUserFlowAttributeDataType {
    String,
    Boolean,
    Int64,
    StringCollection,
    DateTime,
    #[serde(other)]
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentityUserFlowAttributeType {
    BuiltIn,
    Custom,
    Required,
    #[serde(other)]
    UnknownFutureValue,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn custom_attribute_body() {
        let attr = IdentityUserFlowAttribute::custom(
            "Hobby",
            "Your hobby",
            IdentityUserFlowAttributeDataType::String,
        );
        assert_eq!(
            serde_json::to_value(&attr).unwrap(),
            json!({ "displayName": "Hobby", "description": "Your hobby", "dataType": "string" })
        );
    }

    #[test]
    fn unknown_enum_values_are_tolerated() {
        let attr: IdentityUserFlowAttribute = serde_json::from_value(json!({
            "id": "extension_d09380e2b4c642b9a203fb816a04a7ad_Hobby",
            "dataType": "decimal128",
            "userFlowAttributeType": "custom"
        }))
        .unwrap();
        assert_eq!(
            attr.data_type,
            Some(IdentityUserFlowAttributeDataType::UnknownFutureValue)
        );
        assert_eq!(
            attr.user_flow_attribute_type,
            Some(IdentityUserFlowAttributeType::Custom)
        );
    }
}
