/*
[INPUT]:  Identity API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - shared domain models
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use crate::types::SigningMessageFormat;

/// Wallet-network context supplied by the wallet-connection collaborator.
///
/// `id` is the numeric EVM chain identifier; `name` is the human-readable
/// display name used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainInfo {
    pub id: u64,
    pub name: String,
}

impl ChainInfo {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Challenge data issued alongside a nonce, consumed by message construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeContext {
    pub statement: String,
    pub format: SigningMessageFormat,
}

/// User identity attached to an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedUser {
    pub wallet_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_address: Option<String>,
}

/// Session object returned by the identity API on successful verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub access_token: String,
    pub user: AuthorizedUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_camel_case_wire_format() {
        let json = serde_json::json!({
            "accessToken": "token-123",
            "user": {
                "walletAddress": "0xabc",
                "displayAddress": "vitalik.eth",
            },
        });

        let state: AuthState = serde_json::from_value(json).unwrap();
        assert_eq!(state.access_token, "token-123");
        assert_eq!(state.user.wallet_address, "0xabc");
        assert_eq!(state.user.display_address.as_deref(), Some("vitalik.eth"));
    }

    #[test]
    fn test_challenge_context_default_is_empty_siwe() {
        let challenge = ChallengeContext::default();
        assert!(challenge.statement.is_empty());
        assert_eq!(challenge.format, SigningMessageFormat::Siwe);
    }
}
