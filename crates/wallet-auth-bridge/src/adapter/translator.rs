/*
[INPUT]:  Wallet state, session collaborator, and site context
[OUTPUT]: Nonce, signing message, verification result, and sign-out
[POS]:    Adapter layer - authentication-adapter protocol implementation
[UPDATE]: When adapter callbacks or precondition checks change
*/

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::chains::chain_slug;
use crate::http::{BridgeError, Result};
use crate::message::{SigningMessageParams, create_signing_message};
use crate::session::SessionClient;
use crate::types::{AuthRequest, AuthStatus, ChainInfo, ChallengeContext, NonceRequest};
use crate::wallet::WalletConnection;

/// The UI adapter protocol only supports EVM accounts
const CHAIN_TYPE: &str = "ethereum";

/// Site identity baked into every signing message
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// Host presented in the message header, e.g. "app.example.com"
    pub domain: String,
    /// Origin presented in the URI field, e.g. "https://app.example.com"
    pub uri: String,
    pub locale: Option<String>,
}

impl SiteContext {
    pub fn new(domain: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            uri: uri.into(),
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Derive domain and uri from an origin URL
    pub fn from_origin(origin: &str) -> Result<Self> {
        let url = url::Url::parse(origin)?;
        let domain = url
            .host_str()
            .ok_or_else(|| BridgeError::Config(format!("Origin has no host: {origin}")))?;
        Ok(Self::new(domain, url.origin().ascii_serialization()))
    }
}

/// Authentication-adapter translator
///
/// Implements the UI library's adapter capability set by delegating to the
/// injected session and wallet collaborators. Challenge statements are keyed
/// by nonce, so overlapping attempts cannot observe each other's challenge.
pub struct AuthenticationAdapter {
    session: Arc<dyn SessionClient>,
    wallet: Arc<dyn WalletConnection>,
    site: SiteContext,
    pending: Mutex<HashMap<String, ChallengeContext>>,
}

impl AuthenticationAdapter {
    pub fn new(
        session: Arc<dyn SessionClient>,
        wallet: Arc<dyn WalletConnection>,
        site: SiteContext,
    ) -> Self {
        Self {
            session,
            wallet,
            site,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Current adapter status, derived from the session collaborator's flags
    pub fn status(&self) -> AuthStatus {
        AuthStatus::derive(
            self.session.is_authenticated(),
            self.session.is_authenticating(),
        )
    }

    /// Check the wallet preconditions shared by `get_nonce` and `verify`
    fn connection(&self) -> Result<(String, ChainInfo, &'static str)> {
        let address = self.wallet.address().ok_or(BridgeError::NoWalletAddress)?;
        let chain = self.wallet.chain().ok_or(BridgeError::NoChain)?;
        let slug = chain_slug(chain.id).ok_or_else(|| BridgeError::UnsupportedChain {
            name: chain.name.clone(),
        })?;
        Ok((address, chain, slug))
    }

    /// Fetch a single-use nonce for the connected wallet
    ///
    /// Records the challenge statement and format under the nonce for the
    /// paired `create_message` call. Collaborator errors propagate unmodified.
    pub async fn get_nonce(&self) -> Result<String> {
        let (address, chain, slug) = self.connection()?;
        debug!(address = %address, chain = %chain.name, "get nonce");

        let response = self
            .session
            .nonce(NonceRequest {
                wallet_address: address,
                chain: slug.to_string(),
                locale: self.site.locale.clone(),
            })
            .await?;

        let mut pending = self.pending.lock().unwrap();
        pending.insert(
            response.nonce.clone(),
            ChallengeContext {
                statement: response.statement,
                format: response.format,
            },
        );
        Ok(response.nonce)
    }

    /// Build the signing message for a fetched nonce
    ///
    /// Consumes the challenge recorded for the nonce; an unknown nonce falls
    /// back to an empty statement and the SIWE format, matching the upstream
    /// adapter contract that tolerates a message built before its nonce.
    pub fn create_message(&self, nonce: &str, address: &str, chain_id: u64) -> String {
        debug!(nonce, address, chain_id, "create message");

        let challenge = self
            .pending
            .lock()
            .unwrap()
            .remove(nonce)
            .unwrap_or_default();
        let issued_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        create_signing_message(&SigningMessageParams {
            nonce,
            wallet_address: address,
            statement: &challenge.statement,
            format: challenge.format,
            domain: &self.site.domain,
            uri: &self.site.uri,
            issued_at: &issued_at,
            chain_id,
            chain_type: CHAIN_TYPE,
            locale: self.site.locale.as_deref(),
        })
    }

    /// The message body presented to the wallet is the message itself
    pub fn get_message_body(&self, message: &str) -> String {
        message.to_string()
    }

    /// Submit a signature for verification
    ///
    /// True iff the session collaborator opens a session for it.
    pub async fn verify(&self, signature: &str) -> Result<bool> {
        let (address, chain, slug) = self.connection()?;
        debug!(address = %address, chain = %chain.name, "verify");

        let session = self
            .session
            .auth(AuthRequest {
                wallet_address: address,
                signature: signature.to_string(),
                chain: slug.to_string(),
            })
            .await?;

        Ok(session.is_some())
    }

    /// End the current session
    pub async fn sign_out(&self) -> Result<()> {
        debug!("sign out");
        self.session.logout().await
    }
}
