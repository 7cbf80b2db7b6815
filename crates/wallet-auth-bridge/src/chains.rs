/*
[INPUT]:  Numeric EVM chain identifiers
[OUTPUT]: Canonical lowercase chain slugs
[POS]:    Data layer - fixed chain registry
[UPDATE]: When the identity API adds chain support
*/

/// Resolve a chain id to the identity API's canonical chain slug.
///
/// Only EVM chains are listed because the UI adapter protocol only
/// supports EVM. Unregistered ids return `None` and must surface as an
/// unsupported-chain error at the point of use.
pub fn chain_slug(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        1 => Some("ethereum"),
        137 => Some("polygon"),
        10 => Some("optimism"),
        42161 => Some("arbitrum"),
        43114 => Some("avalanche"),
        _ => None,
    }
}
