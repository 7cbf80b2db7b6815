/*
[INPUT]:  Identity API client
[OUTPUT]: Session state and authentication flags
[POS]:    Session layer - HTTP-backed session collaborator
[UPDATE]: When session lifecycle or flag semantics change
*/

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::http::{IdentityClient, Result};
use crate::session::SessionClient;
use crate::types::{AuthRequest, AuthState, NonceRequest, NonceResponse};

/// Session collaborator backed by the identity API
///
/// Holds the session in memory for the provider's lifetime. Clones share
/// the same session and flags, so one provider can back several adapters.
#[derive(Debug, Clone)]
pub struct SessionProvider {
    client: Arc<IdentityClient>,
    session: Arc<RwLock<Option<AuthState>>>,
    authenticating: Arc<AtomicBool>,
}

impl SessionProvider {
    /// Create a provider over an identity API client
    pub fn new(client: IdentityClient) -> Self {
        Self {
            client: Arc::new(client),
            session: Arc::new(RwLock::new(None)),
            authenticating: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current session, if one is held
    pub fn session(&self) -> Option<AuthState> {
        self.session.read().unwrap().clone()
    }
}

#[async_trait]
impl SessionClient for SessionProvider {
    fn is_authenticated(&self) -> bool {
        self.session.read().unwrap().is_some()
    }

    fn is_authenticating(&self) -> bool {
        self.authenticating.load(Ordering::SeqCst)
    }

    async fn nonce(&self, request: NonceRequest) -> Result<NonceResponse> {
        self.client.nonce(&request).await
    }

    async fn auth(&self, request: AuthRequest) -> Result<Option<AuthState>> {
        self.authenticating.store(true, Ordering::SeqCst);
        let result = self.client.auth(&request).await;
        self.authenticating.store(false, Ordering::SeqCst);

        let state = result?;
        if let Some(session) = &state {
            debug!(wallet_address = %session.user.wallet_address, "session opened");
            *self.session.write().unwrap() = Some(session.clone());
        }
        Ok(state)
    }

    async fn logout(&self) -> Result<()> {
        self.client.logout().await?;
        debug!("session closed");
        *self.session.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::ClientConfig;

    fn provider(server: &MockServer) -> SessionProvider {
        let client = IdentityClient::with_config_and_base_url(
            "pk_test",
            ClientConfig::default(),
            &server.uri(),
        )
        .unwrap();
        SessionProvider::new(client)
    }

    fn auth_request() -> AuthRequest {
        AuthRequest {
            wallet_address: "0xabc".to_string(),
            signature: "0xsig".to_string(),
            chain: "ethereum".to_string(),
        }
    }

    #[tokio::test]
    async fn test_auth_stores_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "accessToken": "token-123",
                "user": {"walletAddress": "0xabc"},
            })))
            .mount(&server)
            .await;

        let provider = provider(&server);
        assert!(!provider.is_authenticated());

        let session = provider.auth(auth_request()).await.unwrap();
        assert!(session.is_some());
        assert!(provider.is_authenticated());
        assert!(!provider.is_authenticating());
        assert_eq!(provider.session().unwrap().access_token, "token-123");
    }

    #[tokio::test]
    async fn test_failed_auth_clears_authenticating_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/auth"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad signature"))
            .mount(&server)
            .await;

        let provider = provider(&server);
        let err = provider.auth(auth_request()).await.unwrap_err();
        assert!(!provider.is_authenticating());
        assert!(!provider.is_authenticated());
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "accessToken": "token-123",
                "user": {"walletAddress": "0xabc"},
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/auth/logout"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider(&server);
        provider.auth(auth_request()).await.unwrap();
        assert!(provider.is_authenticated());

        provider.logout().await.unwrap();
        assert!(!provider.is_authenticated());
        assert!(provider.session().is_none());
    }
}
