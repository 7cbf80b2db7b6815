/*
[INPUT]:  API key (env) and a throwaway EVM signer
[OUTPUT]: Printed walkthrough of the adapter authentication flow
[POS]:    Examples - adapter flow demonstration
[UPDATE]: When the adapter flow changes
*/

use std::str::FromStr;
use std::sync::Arc;

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use tracing_subscriber::EnvFilter;
use wallet_auth_bridge::{AuthBridge, ChainInfo, SiteContext, WalletState};

/// Well-known test private key (never fund this account)
const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Example: adapter authentication flow
///
/// 1. Create the bridge from an API key
/// 2. Connect a wallet and wire an adapter
/// 3. Preview the signing message for a nonce
/// 4. Sign it with a local key, as a wallet would
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Wallet Auth Bridge Example ===\n");

    // Step 1: Create the bridge
    let api_key = std::env::var("IDENTITY_API_KEY").unwrap_or_else(|_| "pk_demo".to_string());
    let bridge = match AuthBridge::new(api_key) {
        Ok(bridge) => bridge,
        Err(e) => {
            eprintln!("Failed to create bridge: {}", e);
            return;
        }
    };
    println!("✓ Bridge created");

    // Step 2: Connect a wallet and wire an adapter
    let signer = PrivateKeySigner::from_str(TEST_PRIVATE_KEY).expect("valid test key");
    let address = signer.address().to_checksum(None);
    let wallet = WalletState::new();
    wallet.connect(&address, ChainInfo::new(1, "Ethereum"));

    let site = SiteContext::new("app.example.com", "https://app.example.com")
        .with_locale("en-US");
    let adapter = bridge.adapter(Arc::new(wallet), site);
    println!("✓ Adapter wired for {} (status: {:?})", address, adapter.status());

    // Step 3: Preview the signing message
    // In production the nonce comes from adapter.get_nonce().await; that
    // needs a live API key, so this demo uses a fixed one.
    let nonce = "6CdRCDkZ4JM9vbCn";
    let message = adapter.create_message(nonce, &address, 1);
    println!("\nSigning message the wallet is shown:\n---\n{}\n---", message);

    // Step 4: Sign it, as a wallet would
    match signer.sign_message(message.as_bytes()).await {
        Ok(signature) => {
            println!("\n✓ Signature: 0x{}", hex::encode(signature.as_bytes()));
            println!("\nNext steps with a live key:");
            println!("  - let nonce = adapter.get_nonce().await?;");
            println!("  - let verified = adapter.verify(&signature).await?;");
            println!("  - adapter.sign_out().await?;");
        }
        Err(e) => eprintln!("Failed to sign message: {}", e),
    }
}
