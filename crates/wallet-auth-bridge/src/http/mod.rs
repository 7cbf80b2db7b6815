/*
[INPUT]:  HTTP client configuration and identity API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth_api;
pub mod client;
pub mod error;

pub use client::{ClientConfig, IdentityClient};
pub use error::{BridgeError, Result};
