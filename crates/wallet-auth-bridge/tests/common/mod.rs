/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for wallet-auth-bridge tests

use std::sync::Arc;

use wallet_auth_bridge::{
    AuthBridge, AuthenticationAdapter, BridgeOptions, ChainInfo, SiteContext, WalletState,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "pk_test_key";
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Bridge pointed at the mock server
pub fn test_bridge(server: &MockServer) -> AuthBridge {
    AuthBridge::with_options(
        TEST_API_KEY,
        BridgeOptions {
            base_url: Some(server.uri()),
            locale: Some("en-US".to_string()),
            ..Default::default()
        },
    )
    .unwrap()
}

/// Adapter wired to a wallet connected on the given chain
pub fn test_adapter(bridge: &AuthBridge, chain: ChainInfo) -> (AuthenticationAdapter, WalletState) {
    let wallet = WalletState::new();
    wallet.connect(TEST_ADDRESS, chain);
    let site = SiteContext::new("app.example.com", "https://app.example.com");
    let adapter = bridge.adapter(Arc::new(wallet.clone()), site);
    (adapter, wallet)
}

/// Mount the nonce endpoint with a fixed challenge
#[allow(dead_code)]
pub async fn mount_nonce(server: &MockServer, nonce: &str, statement: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/auth/nonce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "nonce": nonce,
            "statement": statement,
            "format": "siwe",
        })))
        .mount(server)
        .await;
}

/// Mount the verify endpoint answering with a session for the address
#[allow(dead_code)]
pub async fn mount_auth_session(server: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": access_token,
            "user": {"walletAddress": TEST_ADDRESS},
        })))
        .mount(server)
        .await;
}
