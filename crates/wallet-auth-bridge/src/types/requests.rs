/*
[INPUT]:  Identity API schema definitions and serde requirements
[OUTPUT]: Typed request bodies for identity API endpoints
[POS]:    Data layer - request definitions for API communication
[UPDATE]: When API schema changes or new endpoints added
*/

use serde::{Deserialize, Serialize};

/// Body for the nonce-issuance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NonceRequest {
    pub wallet_address: String,
    /// Canonical lowercase chain slug, e.g. "ethereum"
    pub chain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Body for the signature-verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub wallet_address: String,
    pub signature: String,
    pub chain: String,
}
