/// Basic unit tests to verify core functionality
use serde_json::{json, Value};
use solana_mcp_server::config::Config;
use solana_mcp_server::domain::*;
use solana_mcp_server::SolanaMcpServer;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn server() -> SolanaMcpServer {
        SolanaMcpServer::new(Config::from_lookup(|_| None)).expect("Failed to create server")
    }

    #[test]
    fn test_address_validation() {
        assert!(validate_solana_address("11111111111111111111111111111111"));
        assert!(validate_solana_address("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"));
        assert!(!validate_solana_address("invalid_address"));
        assert!(!validate_solana_address(""));
        // Valid base58 but only 3 bytes
        assert!(!validate_solana_address("abc"));
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(lamports_to_sol(1_000_000_000), 1.0);
        assert_eq!(sol_to_lamports(1.0), 1_000_000_000);
        assert_eq!(sol_to_lamports(lamports_to_sol(123_456_789)), 123_456_789);
    }

    #[test]
    fn test_token_lookup() {
        assert_eq!(
            get_token_mint_address("USDC"),
            Some("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")
        );
        assert_eq!(get_token_mint_address("NOTATOKEN"), None);
    }

    #[test]
    fn test_wallets_are_distinct() {
        let server = server();
        let first = tokio_test::block_on(server.call_tool("create_wallet", json!({})));
        let second = tokio_test::block_on(server.call_tool("create_wallet", json!({})));

        let first: Value = serde_json::from_str(&first.text()).unwrap();
        let second: Value = serde_json::from_str(&second.text()).unwrap();
        assert_ne!(first["public_key"], second["public_key"]);
        assert_eq!(
            first["warning"],
            "Store the private key securely. Never share it with anyone."
        );
    }

    #[test]
    fn test_unknown_tool() {
        let server = server();
        let result = tokio_test::block_on(server.call_tool("nonexistent_tool", json!({})));
        assert_eq!(result.text(), "Unknown tool: nonexistent_tool");
        assert!(result.is_error);
    }

    #[tokio::test]
    async fn test_wrong_argument_type() {
        let server = server();
        let result = server
            .call_tool(
                "swap_tokens",
                json!({
                    "input_mint": "So11111111111111111111111111111111111111112",
                    "output_mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                    "amount": "lots",
                    "user_public_key": "11111111111111111111111111111111"
                }),
            )
            .await;

        assert!(result.is_error);
        assert!(result.text().starts_with("Error: invalid type"));
    }

    #[test]
    fn test_tool_catalog() {
        let tools = server().list_tools();
        assert_eq!(tools.len(), 7);
        assert!(tools.iter().any(|t| t.name == "swap_tokens"));
    }
}
