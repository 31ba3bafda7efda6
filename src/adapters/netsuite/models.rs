//! NetSuite wire models
//!
//! Response shapes for the order-synchronization endpoint and the token
//! endpoint. Request payloads live in `core::payload`.

use serde::{Deserialize, Serialize};

/// Success-response body of the order-synchronization endpoint
///
/// Either key may be absent; `updatedID` takes precedence over `createdID`
/// when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncResponse {
    /// Identifier of an updated NetSuite record
    #[serde(rename = "updatedID", skip_serializing_if = "Option::is_none")]
    pub updated_id: Option<String>,

    /// Identifier of a newly created NetSuite record
    #[serde(rename = "createdID", skip_serializing_if = "Option::is_none")]
    pub created_id: Option<String>,
}

impl SyncResponse {
    /// The external identifier carried by the response, if any
    ///
    /// `updatedID` is checked before `createdID`; blank values count as
    /// absent.
    pub fn external_id(&self) -> Option<&str> {
        non_blank(self.updated_id.as_deref()).or_else(|| non_blank(self.created_id.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Token-endpoint response body
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The bearer token
    pub access_token: String,

    /// Token lifetime in seconds, if reported
    #[serde(default)]
    pub expires_in: Option<u64>,
}
