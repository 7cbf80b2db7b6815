/*
[INPUT]:  Nonce and verification requests from the adapter
[OUTPUT]: Nonces, sessions, and authentication flags
[POS]:    Session layer - collaborator abstraction
[UPDATE]: When the session contract changes
*/

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::http::Result;
use crate::types::{AuthRequest, AuthState, NonceRequest, NonceResponse};

/// Trait for the session collaborator the adapter delegates to
///
/// The concrete implementation is [`super::SessionProvider`] over the
/// identity API; tests inject [`MockSessionClient`]. The trait is async
/// because nonce issuance, verification, and logout are network round-trips.
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// Whether an authenticated session is currently held
    fn is_authenticated(&self) -> bool;

    /// Whether a verification call is currently in flight
    fn is_authenticating(&self) -> bool;

    /// Issue a single-use nonce with its challenge statement and format
    async fn nonce(&self, request: NonceRequest) -> Result<NonceResponse>;

    /// Verify a signature; `None` means no session was opened
    async fn auth(&self, request: AuthRequest) -> Result<Option<AuthState>>;

    /// End the current session
    async fn logout(&self) -> Result<()>;
}

/// Mock session client for testing
///
/// Returns canned responses and records every call so tests can assert
/// call counts and request contents.
#[derive(Debug)]
pub struct MockSessionClient {
    authenticated: AtomicBool,
    authenticating: AtomicBool,
    nonce_response: Mutex<NonceResponse>,
    session: Mutex<Option<AuthState>>,
    nonce_calls: AtomicUsize,
    auth_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    last_nonce_request: Mutex<Option<NonceRequest>>,
    last_auth_request: Mutex<Option<AuthRequest>>,
}

impl MockSessionClient {
    /// Create a mock with an empty-statement SIWE nonce and no session
    pub fn new() -> Self {
        Self {
            authenticated: AtomicBool::new(false),
            authenticating: AtomicBool::new(false),
            nonce_response: Mutex::new(NonceResponse {
                nonce: "mock-nonce".to_string(),
                statement: String::new(),
                format: Default::default(),
            }),
            session: Mutex::new(None),
            nonce_calls: AtomicUsize::new(0),
            auth_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            last_nonce_request: Mutex::new(None),
            last_auth_request: Mutex::new(None),
        }
    }

    /// Set the canned nonce response
    pub fn with_nonce_response(self, response: NonceResponse) -> Self {
        *self.nonce_response.lock().unwrap() = response;
        self
    }

    /// Replace the canned nonce response mid-test
    pub fn set_nonce_response(&self, response: NonceResponse) {
        *self.nonce_response.lock().unwrap() = response;
    }

    /// Set the session returned by `auth`
    pub fn with_session(self, session: AuthState) -> Self {
        *self.session.lock().unwrap() = Some(session);
        self
    }

    /// Set the two upstream flags directly
    pub fn set_flags(&self, authenticated: bool, authenticating: bool) {
        self.authenticated.store(authenticated, Ordering::SeqCst);
        self.authenticating.store(authenticating, Ordering::SeqCst);
    }

    pub fn nonce_calls(&self) -> usize {
        self.nonce_calls.load(Ordering::SeqCst)
    }

    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    pub fn last_nonce_request(&self) -> Option<NonceRequest> {
        self.last_nonce_request.lock().unwrap().clone()
    }

    pub fn last_auth_request(&self) -> Option<AuthRequest> {
        self.last_auth_request.lock().unwrap().clone()
    }
}

impl Default for MockSessionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionClient for MockSessionClient {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    fn is_authenticating(&self) -> bool {
        self.authenticating.load(Ordering::SeqCst)
    }

    async fn nonce(&self, request: NonceRequest) -> Result<NonceResponse> {
        self.nonce_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_nonce_request.lock().unwrap() = Some(request);
        Ok(self.nonce_response.lock().unwrap().clone())
    }

    async fn auth(&self, request: AuthRequest) -> Result<Option<AuthState>> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_auth_request.lock().unwrap() = Some(request);
        Ok(self.session.lock().unwrap().clone())
    }

    async fn logout(&self) -> Result<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
