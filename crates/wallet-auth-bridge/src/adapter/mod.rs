/*
[INPUT]:  Session and wallet collaborators
[OUTPUT]: UI authentication-adapter callbacks and status
[POS]:    Adapter layer - bridge between UI protocol and identity API
[UPDATE]: When the adapter protocol or bridge construction changes
*/

pub mod bridge;
pub mod translator;

pub use bridge::{AuthBridge, BridgeOptions};
pub use translator::{AuthenticationAdapter, SiteContext};
