/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public wallet-auth-bridge crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod adapter;
pub mod chains;
pub mod http;
pub mod message;
pub mod session;
pub mod types;
pub mod wallet;

// Re-export the adapter surface consumed by UI integrations
pub use adapter::{AuthBridge, AuthenticationAdapter, BridgeOptions, SiteContext};

// Re-export commonly used types from http
pub use http::{BridgeError, ClientConfig, IdentityClient, Result};

// Re-export commonly used types from session
pub use session::{MockSessionClient, SessionClient, SessionProvider};

// Re-export commonly used types from wallet
pub use wallet::{WalletConnection, WalletState};

pub use chains::chain_slug;
pub use message::{SigningMessageParams, create_signing_message};

// Re-export all types
pub use types::*;
