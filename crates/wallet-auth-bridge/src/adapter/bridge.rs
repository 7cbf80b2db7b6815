/*
[INPUT]:  API key and provider option bag
[OUTPUT]: Shared session provider and wired adapters
[POS]:    Adapter layer - construction-time wiring
[UPDATE]: When bridge options or wiring change
*/

use std::sync::Arc;

use crate::adapter::{AuthenticationAdapter, SiteContext};
use crate::http::{ClientConfig, IdentityClient, Result};
use crate::session::SessionProvider;
use crate::wallet::WalletConnection;

/// Option bag forwarded to the identity API client
#[derive(Debug, Clone, Default)]
pub struct BridgeOptions {
    /// Override the identity API base URL (staging, self-hosted)
    pub base_url: Option<String>,
    /// HTTP timeouts
    pub http: ClientConfig,
    /// Default locale applied to site contexts that carry none
    pub locale: Option<String>,
}

/// Entry point that owns the session provider
///
/// Built once per process from the API key; every adapter handed out
/// shares the same underlying session, mirroring the provider-singleton
/// contract of the UI integration it replaces.
#[derive(Debug, Clone)]
pub struct AuthBridge {
    session: SessionProvider,
    locale: Option<String>,
}

impl AuthBridge {
    /// Create a bridge from an API key with default options
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, BridgeOptions::default())
    }

    /// Create a bridge from an API key and an option bag
    pub fn with_options(api_key: impl Into<String>, options: BridgeOptions) -> Result<Self> {
        let client = match &options.base_url {
            Some(base_url) => {
                IdentityClient::with_config_and_base_url(api_key, options.http.clone(), base_url)?
            }
            None => IdentityClient::with_config(api_key, options.http.clone())?,
        };

        Ok(Self {
            session: SessionProvider::new(client),
            locale: options.locale,
        })
    }

    /// The shared session provider
    pub fn session(&self) -> &SessionProvider {
        &self.session
    }

    /// Wire an adapter for a wallet connection and site context
    ///
    /// The bridge's default locale fills in when the site carries none.
    pub fn adapter(
        &self,
        wallet: Arc<dyn WalletConnection>,
        mut site: SiteContext,
    ) -> AuthenticationAdapter {
        if site.locale.is_none() {
            site.locale = self.locale.clone();
        }
        AuthenticationAdapter::new(Arc::new(self.session.clone()), wallet, site)
    }
}
