/*
[INPUT]:  Nonce, wallet address, challenge statement, and site context
[OUTPUT]: Canonical signing-message string for the wallet to sign
[POS]:    Message layer - signing-message templating
[UPDATE]: When message formats or template fields change
*/

use crate::types::SigningMessageFormat;

/// Input bundle for [`create_signing_message`].
///
/// `issued_at` must already be an ISO-8601 timestamp; `chain_type` is the
/// account-type label in the message header (always "ethereum" for the
/// EVM-only UI adapter protocol).
#[derive(Debug, Clone)]
pub struct SigningMessageParams<'a> {
    pub nonce: &'a str,
    pub wallet_address: &'a str,
    pub statement: &'a str,
    pub format: SigningMessageFormat,
    pub domain: &'a str,
    pub uri: &'a str,
    pub issued_at: &'a str,
    pub chain_id: u64,
    pub chain_type: &'a str,
    pub locale: Option<&'a str>,
}

/// Build the signing message for the requested format.
pub fn create_signing_message(params: &SigningMessageParams<'_>) -> String {
    match params.format {
        SigningMessageFormat::Siwe => siwe_message(params),
        SigningMessageFormat::Simplified => simplified_message(params),
    }
}

/// EIP-4361 layout. The statement paragraph is omitted when empty.
fn siwe_message(params: &SigningMessageParams<'_>) -> String {
    let mut message = format!(
        "{} wants you to sign in with your {} account:\n{}\n",
        params.domain,
        capitalize(params.chain_type),
        params.wallet_address,
    );

    if !params.statement.is_empty() {
        message.push('\n');
        message.push_str(params.statement);
        message.push('\n');
    }

    message.push_str(&format!(
        "\nURI: {}\nVersion: 1\nChain ID: {}\nNonce: {}\nIssued At: {}",
        params.uri, params.chain_id, params.nonce, params.issued_at,
    ));

    message
}

/// Plain layout for wallets that render SIWE field lines poorly.
fn simplified_message(params: &SigningMessageParams<'_>) -> String {
    let mut message = format!(
        "{} wants you to sign in with your wallet:\n{}\n",
        params.domain, params.wallet_address,
    );

    if !params.statement.is_empty() {
        message.push('\n');
        message.push_str(params.statement);
        message.push('\n');
    }

    message.push_str(&format!(
        "\nNonce: {}\nIssued At: {}",
        params.nonce, params.issued_at,
    ));

    message
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
