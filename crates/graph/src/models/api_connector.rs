use serde::{Deserialize, Serialize};

use super::AdditionalData;

/// An API connector called during self-service sign-up user flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityApiConnector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_configuration: Option<ApiAuthenticationConfiguration>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl IdentityApiConnector {
    pub fn basic(
        display_name: impl Into<String>,
        target_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            display_name: Some(display_name.into()),
            target_url: Some(target_url.into()),
            authentication_configuration: Some(ApiAuthenticationConfiguration::basic(
                username, password,
            )),
            ..Self::default()
        }
    }
}

/// `basicAuthentication`, `pkcs12Certificate` or `clientCertificateAuthentication`,
/// discriminated by `@odata.type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAuthenticationConfiguration {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkcs12_value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certificate_list: Vec<Pkcs12CertificateInformation>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ApiAuthenticationConfiguration {
    pub const BASIC: &'static str = "#microsoft.graph.basicAuthentication";
    pub const PKCS12: &'static str = "#microsoft.graph.pkcs12Certificate";
    pub const CLIENT_CERTIFICATE: &'static str =
        "#microsoft.graph.clientCertificateAuthentication";

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            odata_type: Some(Self::BASIC.to_string()),
            username: Some(username.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    pub fn pkcs12(pkcs12_value: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            odata_type: Some(Self::PKCS12.to_string()),
            pkcs12_value: Some(pkcs12_value.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pkcs12CertificateInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_after: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<i64>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of `uploadClientCertificate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadClientCertificatePostRequestBody {
    /// Base64 encoded PKCS#12 (.pfx) content.
    pub pkcs12_value: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn basic_connector_serializes_odata_type() {
        let connector =
            IdentityApiConnector::basic("Check", "https://api.contoso.test/check", "svc", "pw");
        let value = serde_json::to_value(&connector).unwrap();
        assert_eq!(
            value,
            json!({
                "displayName": "Check",
                "targetUrl": "https://api.contoso.test/check",
                "authenticationConfiguration": {
                    "@odata.type": "#microsoft.graph.basicAuthentication",
                    "username": "svc",
                    "password": "pw"
                }
            })
        );
    }

    #[test]
    fn client_certificate_configuration() {
        let connector: IdentityApiConnector = serde_json::from_value(json!({
            "id": "be1f769b",
            "displayName": "Test API",
            "targetUrl": "https://someotherapi.com/api/endpoint",
            "authenticationConfiguration": {
                "@odata.type": "#microsoft.graph.clientCertificateAuthentication",
                "certificateList": [{
                    "thumbprint": "0EB255CC895477798BA8B596A4ED82F2A3A3A2F8",
                    "notAfter": 1666350522,
                    "notBefore": 1508670522,
                    "isActive": true
                }]
            }
        }))
        .unwrap();
        let auth = connector.authentication_configuration.unwrap();
        assert_eq!(
            auth.odata_type.as_deref(),
            Some(ApiAuthenticationConfiguration::CLIENT_CERTIFICATE)
        );
        assert_eq!(auth.certificate_list.len(), 1);
        assert_eq!(auth.certificate_list[0].is_active, Some(true));
    }
}
