use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdditionalData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationStrengthRoot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authentication_method_modes: Vec<AuthenticationMethodModeDetail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combinations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<AuthenticationStrengthPolicy>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationStrengthPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `builtIn` or `custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    /// `mfa` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements_satisfied: Option<String>,
    /// Method combinations such as `password,microsoftAuthenticatorPush`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_combinations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combination_configurations: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl AuthenticationStrengthPolicy {
    pub fn custom<I, S>(display_name: impl Into<String>, allowed_combinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            display_name: Some(display_name.into()),
            allowed_combinations: allowed_combinations.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn is_built_in(&self) -> bool {
        self.policy_type.as_deref() == Some("builtIn")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationMethodModeDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_method: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of `policies/{id}/updateAllowedCombinations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAllowedCombinationsPostRequestBody {
    pub allowed_combinations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAllowedCombinationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
    #[serde(default)]
    pub conditional_access_references: Vec<String>,
    #[serde(default)]
    pub current_combinations: Vec<String>,
    #[serde(default)]
    pub previous_combinations: Vec<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn built_in_policy() {
        let policy: AuthenticationStrengthPolicy = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000002",
            "createdDateTime": "2021-12-01T00:00:00Z",
            "modifiedDateTime": "2021-12-01T00:00:00Z",
            "displayName": "Multifactor authentication",
            "policyType": "builtIn",
            "requirementsSatisfied": "mfa",
            "allowedCombinations": ["windowsHelloForBusiness", "fido2"],
            "combinationConfigurations@odata.context": "https://graph.microsoft.com/v1.0/$metadata#x"
        }))
        .unwrap();
        assert!(policy.is_built_in());
        assert_eq!(policy.allowed_combinations.len(), 2);
        assert!(
            policy
                .additional_data
                .contains_key("combinationConfigurations@odata.context")
        );
    }

    #[test]
    fn update_result() {
        let result: UpdateAllowedCombinationsResult = serde_json::from_value(json!({
            "additionalInformation": null,
            "currentCombinations": ["password,voice"],
            "previousCombinations": ["fido2", "password,sms"]
        }))
        .unwrap();
        assert!(result.conditional_access_references.is_empty());
        assert_eq!(result.previous_combinations.len(), 2);
    }
}
