/*
[INPUT]:  Identity API client and session state
[OUTPUT]: Session collaborator trait and implementations
[POS]:    Session layer - nonce issuance, verification, logout
[UPDATE]: When the session contract or provider behavior changes
*/

pub mod client;
pub mod provider;

pub use client::{MockSessionClient, SessionClient};
pub use provider::SessionProvider;
