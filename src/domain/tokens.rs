/// Well-known token mints and price-service ids

/// Well-known SPL tokens on mainnet (symbol, mint address, decimals)
pub const COMMON_TOKENS: &[(&str, &str, u8)] = &[
    ("USDC", "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", 6),
    ("USDT", "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", 6),
    // Wrapped SOL
    ("SOL", "So11111111111111111111111111111111111111112", 9),
    ("RAY", "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R", 6),
    ("SRM", "SRMuApVNdxXokk5GT7XD5cUUgXMBCoAz2LHeuAoKWRt", 6),
    ("ORCA", "orcaEKTdK7LKz57vaAYr9QeNsVEPfiu6QeMU1kektZE", 6),
    ("MNGO", "MangoCzJ36AjZyKwVj3VnYU4GTonjfVEnJmvvWaxLac", 6),
];

/// Symbols the price service knows under a different identifier
const PRICE_SERVICE_IDS: &[(&str, &str)] = &[
    ("sol", "solana"),
    ("usdc", "usd-coin"),
    ("usdt", "tether"),
    ("ray", "raydium"),
    ("srm", "serum"),
];

/// Look up the mint address for a token symbol (case-insensitive)
pub fn get_token_mint_address(symbol: &str) -> Option<&'static str> {
    let upper = symbol.trim().to_uppercase();
    COMMON_TOKENS
        .iter()
        .find(|(sym, _, _)| *sym == upper)
        .map(|(_, mint, _)| *mint)
}

/// Decimals for a known mint, if it is one of the common tokens
pub fn known_token_decimals(mint: &str) -> Option<u8> {
    COMMON_TOKENS
        .iter()
        .find(|(_, addr, _)| *addr == mint)
        .map(|(_, _, decimals)| *decimals)
}

/// Map a token symbol to the price service's asset id
///
/// Unknown symbols are passed through lowercased as a best-effort id.
pub fn price_service_id(symbol: &str) -> String {
    let lower = symbol.trim().to_lowercase();
    PRICE_SERVICE_IDS
        .iter()
        .find(|(sym, _)| *sym == lower)
        .map(|(_, id)| id.to_string())
        .unwrap_or(lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_solana_address;

    #[test]
    fn test_known_symbols() {
        assert_eq!(
            get_token_mint_address("USDC"),
            Some("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")
        );
        assert_eq!(
            get_token_mint_address("sol"),
            Some("So11111111111111111111111111111111111111112")
        );
        assert_eq!(get_token_mint_address("NOTATOKEN"), None);
    }

    #[test]
    fn test_all_addresses_are_valid() {
        for (_, mint, _) in COMMON_TOKENS {
            assert!(validate_solana_address(mint), "{} should be valid", mint);
        }
    }

    #[test]
    fn test_decimals_lookup() {
        assert_eq!(known_token_decimals("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"), Some(6));
        assert_eq!(known_token_decimals("11111111111111111111111111111111"), None);
    }

    #[test]
    fn test_price_service_ids() {
        assert_eq!(price_service_id("SOL"), "solana");
        assert_eq!(price_service_id("usdc"), "usd-coin");
        assert_eq!(price_service_id("Bonk"), "bonk");
    }
}
