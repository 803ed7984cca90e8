use std::fmt;

use serde::{Deserialize, Serialize};

use super::AdditionalData;

/// Any identity provider configured in the tenant.
///
/// The concrete kind is carried in `@odata.type`; kind specific properties
/// not modelled here stay in `additional_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// e.g. `Google`, `Facebook`, `MicrosoftAccount`, `EmailOTP`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_provider_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive_sign_in_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_exchange_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_certificate: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityProviderKind {
    Social,
    BuiltIn,
    Apple,
    InternalDomainFederation,
    SamlOrWsFed,
    Other,
}

impl fmt::Display for IdentityProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Social => "social",
            Self::BuiltIn => "built-in",
            Self::Apple => "apple",
            Self::InternalDomainFederation => "domain-federation",
            Self::SamlOrWsFed => "saml/ws-fed",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

impl IdentityProviderBase {
    /// Client-id/secret based provider such as Google or Facebook.
    pub fn social(
        display_name: impl Into<String>,
        provider_type: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            odata_type: Some("#microsoft.graph.socialIdentityProvider".to_string()),
            display_name: Some(display_name.into()),
            identity_provider_type: Some(provider_type.into()),
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> IdentityProviderKind {
        match self
            .odata_type
            .as_deref()
            .and_then(|t| t.strip_prefix("#microsoft.graph."))
        {
            Some("socialIdentityProvider") => IdentityProviderKind::Social,
            Some("builtInIdentityProvider") => IdentityProviderKind::BuiltIn,
            Some("appleManagedIdentityProvider") => IdentityProviderKind::Apple,
            Some("internalDomainFederation") => IdentityProviderKind::InternalDomainFederation,
            Some("samlOrWsFedExternalDomainFederation")
            | Some("samlOrWsFedProvider") => IdentityProviderKind::SamlOrWsFed,
            _ => IdentityProviderKind::Other,
        }
    }
}

/// Identity provider as exposed under a B2X user flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}
