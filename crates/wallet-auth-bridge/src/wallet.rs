/*
[INPUT]:  Wallet connection events (connect, chain switch, disconnect)
[OUTPUT]: Connected address and active chain for the adapter
[POS]:    Wallet layer - connection state abstraction
[UPDATE]: When the wallet contract or snapshot fields change
*/

use std::sync::{Arc, RwLock};

use crate::types::ChainInfo;

/// Trait for the wallet-connection collaborator
///
/// The bridge only reads this state; ownership stays with the wallet
/// integration that drives connect/disconnect events.
pub trait WalletConnection: Send + Sync {
    /// Connected wallet address, if any
    fn address(&self) -> Option<String>;

    /// Active chain, if any
    fn chain(&self) -> Option<ChainInfo>;
}

#[derive(Debug, Clone)]
struct Connection {
    address: String,
    chain: ChainInfo,
}

/// In-memory wallet connection state
///
/// Clones share the same state, so the integration layer can hold one
/// handle for writes while the adapter reads through another.
#[derive(Debug, Clone, Default)]
pub struct WalletState {
    inner: Arc<RwLock<Option<Connection>>>,
}

impl WalletState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wallet connection
    pub fn connect(&self, address: impl Into<String>, chain: ChainInfo) {
        let mut guard = self.inner.write().unwrap();
        *guard = Some(Connection {
            address: address.into(),
            chain,
        });
    }

    /// Switch the active chain, keeping the connected address
    ///
    /// No-op when no wallet is connected.
    pub fn switch_chain(&self, chain: ChainInfo) {
        let mut guard = self.inner.write().unwrap();
        if let Some(connection) = guard.as_mut() {
            connection.chain = chain;
        }
    }

    /// Clear the connection
    pub fn disconnect(&self) {
        let mut guard = self.inner.write().unwrap();
        *guard = None;
    }
}

impl WalletConnection for WalletState {
    fn address(&self) -> Option<String> {
        let guard = self.inner.read().unwrap();
        guard.as_ref().map(|connection| connection.address.clone())
    }

    fn chain(&self) -> Option<ChainInfo> {
        let guard = self.inner.read().unwrap();
        guard.as_ref().map(|connection| connection.chain.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_and_disconnect() {
        let wallet = WalletState::new();
        assert!(wallet.address().is_none());
        assert!(wallet.chain().is_none());

        wallet.connect("0xabc", ChainInfo::new(1, "Ethereum"));
        assert_eq!(wallet.address().as_deref(), Some("0xabc"));
        assert_eq!(wallet.chain().unwrap().id, 1);

        wallet.disconnect();
        assert!(wallet.address().is_none());
    }

    #[test]
    fn test_switch_chain_keeps_address() {
        let wallet = WalletState::new();
        wallet.connect("0xabc", ChainInfo::new(1, "Ethereum"));
        wallet.switch_chain(ChainInfo::new(137, "Polygon"));

        assert_eq!(wallet.address().as_deref(), Some("0xabc"));
        assert_eq!(wallet.chain().unwrap().name, "Polygon");
    }

    #[test]
    fn test_switch_chain_without_connection_is_noop() {
        let wallet = WalletState::new();
        wallet.switch_chain(ChainInfo::new(137, "Polygon"));
        assert!(wallet.chain().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let writer = WalletState::new();
        let reader = writer.clone();
        writer.connect("0xabc", ChainInfo::new(10, "OP Mainnet"));
        assert_eq!(reader.address().as_deref(), Some("0xabc"));
    }
}
