/*
[INPUT]:  Identity API schema definitions and serde requirements
[OUTPUT]: Typed response bodies from identity API endpoints
[POS]:    Data layer - response definitions for API communication
[UPDATE]: When API schema changes or new endpoints added
*/

use serde::{Deserialize, Serialize};

use crate::types::SigningMessageFormat;

/// Response from the nonce-issuance endpoint.
///
/// `statement` and `format` travel with the nonce and must be echoed into
/// the signing message built for that nonce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NonceResponse {
    pub nonce: String,
    #[serde(default)]
    pub statement: String,
    #[serde(default)]
    pub format: SigningMessageFormat,
}
