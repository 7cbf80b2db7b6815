/*
[INPUT]:  Identity API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Authentication status surfaced to the UI provider.
///
/// Never set directly; always derived from the session collaborator's
/// two flags via [`AuthStatus::derive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    /// Derive the status from the session collaborator's flags.
    ///
    /// Precedence: authenticated wins over authenticating, authenticating
    /// wins over unauthenticated.
    pub fn derive(is_authenticated: bool, is_authenticating: bool) -> Self {
        if is_authenticated {
            return AuthStatus::Authenticated;
        }
        if is_authenticating {
            return AuthStatus::Loading;
        }
        AuthStatus::Unauthenticated
    }
}

/// Wire format tag for the signing message template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningMessageFormat {
    /// EIP-4361 (Sign-In with Ethereum) layout
    #[default]
    Siwe,
    /// Plain human-readable layout for wallets without SIWE support
    Simplified,
}
