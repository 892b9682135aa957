/// End-to-end tool calls against mocked RPC, price and swap services
use serde_json::{json, Value};
use solana_mcp_server::config::Config;
use solana_mcp_server::SolanaMcpServer;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OWNER: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
const USDC: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
const WSOL: &str = "So11111111111111111111111111111111111111112";

/// A server whose RPC, CoinGecko and Jupiter endpoints all point at `mock`
fn server_for(mock: &MockServer) -> SolanaMcpServer {
    let uri = mock.uri();
    let config = Config::from_lookup(move |key| match key {
        "SOLANA_RPC_URL" => Some(format!("{}/rpc", uri)),
        "COINGECKO_API_URL" => Some(format!("{}/coingecko", uri)),
        "JUPITER_API_URL" => Some(format!("{}/jupiter", uri)),
        _ => None,
    });
    SolanaMcpServer::new(config).expect("Failed to create server")
}

fn rpc_result(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "id": 1, "result": result}))
}

fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("tool output is JSON")
}

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_balance() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rpc"))
            .and(body_partial_json(json!({"method": "getBalance", "params": [OWNER]})))
            .respond_with(rpc_result(json!({"context": {"slot": 1}, "value": 2_500_000_000u64})))
            .expect(1)
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server.call_tool("get_balance", json!({"address": OWNER})).await;

        assert!(!result.is_error, "{}", result.text());
        let body = parse(&result.text());
        assert_eq!(body["balance_sol"], 2.5);
        assert_eq!(body["balance_lamports"], 2_500_000_000u64);
        assert_eq!(body["address"], OWNER);
    }

    #[tokio::test]
    async fn test_invalid_address_never_reaches_rpc() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(rpc_result(json!(null)))
            .expect(0)
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server.call_tool("get_balance", json!({"address": "invalid_address"})).await;

        assert!(result.is_error);
        assert!(result.text().contains("Error"));
    }

    #[tokio::test]
    async fn test_get_token_balance() {
        // 165-byte token account holding 1.25 USDC
        let mut data = vec![0u8; 165];
        data[64..72].copy_from_slice(&1_250_000u64.to_le_bytes());
        let encoded = {
            use base64::Engine;
            base64::engine::general_purpose::STANDARD.encode(&data)
        };

        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "getTokenAccountsByOwner"})))
            .respond_with(rpc_result(json!({
                "context": {"slot": 1},
                "value": [{
                    "pubkey": "11111111111111111111111111111111",
                    "account": {
                        "lamports": 2039280,
                        "owner": OWNER,
                        "executable": false,
                        "rentEpoch": 0,
                        "data": [encoded, "base64"]
                    }
                }]
            })))
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server
            .call_tool("get_token_balance", json!({"address": OWNER, "token_mint": USDC}))
            .await;

        let body = parse(&result.text());
        assert_eq!(body["balance"], 1_250_000);
        assert_eq!(body["ui_balance"], 1.25);
        assert_eq!(body["token_account"], "11111111111111111111111111111111");
    }

    #[tokio::test]
    async fn test_account_not_found() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "getAccountInfo"})))
            .respond_with(rpc_result(json!({"context": {"slot": 1}, "value": null})))
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server.call_tool("get_account_info", json!({"address": OWNER})).await;
        assert_eq!(result.text(), "Account not found");
    }

    #[tokio::test]
    async fn test_rpc_error_is_reported() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32602, "message": "Invalid param"}
            })))
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let signature = bs58::encode([9u8; 64]).into_string();
        let result = server.call_tool("get_transaction", json!({"signature": signature})).await;

        assert!(result.is_error);
        assert_eq!(
            result.text(),
            "Error getting transaction: RPC error -32602: Invalid param"
        );
    }

    #[tokio::test]
    async fn test_get_token_price() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coingecko/simple/price"))
            .and(query_param("ids", "usd-coin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "usd-coin": {"usd": 1.0, "usd_24h_change": 0.01}
            })))
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server.call_tool("get_token_price", json!({"token_symbol": "usdc"})).await;

        let body = parse(&result.text());
        assert_eq!(body["token"], "USDC");
        assert_eq!(body["price_usd"], 1.0);
        assert_eq!(body["change_24h"], 0.01);
    }

    #[tokio::test]
    async fn test_swap_quote_failure_skips_swap() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jupiter/quote"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
            .expect(1)
            .mount(&mock)
            .await;
        Mock::given(method("POST"))
            .and(path("/jupiter/swap"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server
            .call_tool(
                "swap_tokens",
                json!({
                    "input_mint": WSOL,
                    "output_mint": USDC,
                    "amount": 1_000_000,
                    "user_public_key": OWNER
                }),
            )
            .await;

        assert!(result.is_error);
        assert!(result.text().contains("Error getting swap quote"));
    }

    #[tokio::test]
    async fn test_swap_success() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jupiter/quote"))
            .and(query_param("slippageBps", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"outAmount": "99"})))
            .mount(&mock)
            .await;
        Mock::given(method("POST"))
            .and(path("/jupiter/swap"))
            .and(body_partial_json(json!({"userPublicKey": OWNER, "wrapAndUnwrapSol": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"swapTransaction": "AQIDBA=="})))
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server
            .call_tool(
                "swap_tokens",
                json!({
                    "input_mint": WSOL,
                    "output_mint": USDC,
                    "amount": 1_000_000,
                    "user_public_key": OWNER,
                    "slippage_bps": 100
                }),
            )
            .await;

        let body = parse(&result.text());
        assert_eq!(body["swapTransaction"], "AQIDBA==");
    }
}
