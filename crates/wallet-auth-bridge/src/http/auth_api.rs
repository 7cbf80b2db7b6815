/*
[INPUT]:  Typed request bodies and API key auth
[OUTPUT]: Nonce, session, and logout results from the identity API
[POS]:    HTTP layer - auth endpoints
[UPDATE]: When auth endpoints or response shapes change
*/

use reqwest::Method;

use crate::http::{IdentityClient, Result};
use crate::types::{AuthRequest, AuthState, NonceRequest, NonceResponse};

impl IdentityClient {
    /// Request a single-use nonce for a wallet address
    ///
    /// POST /v1/auth/nonce
    pub async fn nonce(&self, request: &NonceRequest) -> Result<NonceResponse> {
        let builder = self.request(Method::POST, "/v1/auth/nonce")?.json(request);
        self.send_json(builder).await
    }

    /// Verify a wallet signature and open a session
    ///
    /// POST /v1/auth
    ///
    /// The API answers JSON null when verification yields no session;
    /// that maps to `Ok(None)`.
    pub async fn auth(&self, request: &AuthRequest) -> Result<Option<AuthState>> {
        let builder = self.request(Method::POST, "/v1/auth")?.json(request);
        let value: serde_json::Value = self.send_json(builder).await?;

        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }

    /// End the current session
    ///
    /// POST /v1/auth/logout
    pub async fn logout(&self) -> Result<()> {
        let builder = self.request(Method::POST, "/v1/auth/logout")?;
        self.send_unit(builder).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::{BridgeError, ClientConfig};

    fn client(server: &MockServer) -> IdentityClient {
        IdentityClient::with_config_and_base_url("pk_test", ClientConfig::default(), &server.uri())
            .unwrap()
    }

    #[tokio::test]
    async fn test_nonce_sends_bearer_auth_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/auth/nonce"))
            .and(header("authorization", "Bearer pk_test"))
            .and(body_json(serde_json::json!({
                "walletAddress": "0xabc",
                "chain": "ethereum",
                "locale": "en-US",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "nonce": "abc123",
                "statement": "Sign in to Example",
                "format": "siwe",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .nonce(&NonceRequest {
                wallet_address: "0xabc".to_string(),
                chain: "ethereum".to_string(),
                locale: Some("en-US".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(response.nonce, "abc123");
        assert_eq!(response.statement, "Sign in to Example");
    }

    #[tokio::test]
    async fn test_auth_null_body_is_no_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::Value::Null))
            .mount(&server)
            .await;

        let session = client(&server)
            .auth(&AuthRequest {
                wallet_address: "0xabc".to_string(),
                signature: "0xsig".to_string(),
                chain: "ethereum".to_string(),
            })
            .await
            .unwrap();

        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/auth/logout"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client(&server).logout().await.unwrap_err();
        match err {
            BridgeError::Api { code, message } => {
                assert_eq!(code, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
