//! Wire models for the identity resources.
//!
//! Properties the models do not name are kept in `additional_data` so a
//! GET-modify-PATCH cycle does not drop them.

pub mod api_connector;
pub mod authentication_events;
pub mod authentication_strength;
pub mod b2x_user_flow;
pub mod conditional_access;
pub mod identity_container;
pub mod identity_provider;
pub mod user_flow_attribute;

use serde::{Deserialize, Serialize};

pub use api_connector::*;
pub use authentication_events::*;
pub use authentication_strength::*;
pub use b2x_user_flow::*;
pub use conditional_access::*;
pub use identity_container::*;
pub use identity_provider::*;
pub use user_flow_attribute::*;

pub type AdditionalData = serde_json::Map<String, serde_json::Value>;

/// Body of a `$ref` PUT: the URL of the entity to reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceUpdate {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
}

impl ReferenceUpdate {
    pub fn new(odata_id: impl Into<String>) -> Self {
        Self {
            odata_id: odata_id.into(),
        }
    }
}
