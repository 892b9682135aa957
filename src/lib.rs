/// Public library interface for the Solana MCP server
///
/// This module exports the tool server and the types behind it, so the
/// binary, the tests, and other applications can drive it directly.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

pub mod config;
pub mod domain;
pub mod market;
pub mod mcp;
pub mod rpc;
pub mod tools;

use config::{Config, ConfigError};
use domain::{DomainError, Keypair};
use market::{PriceClient, SwapClient};
use mcp::protocol::{ToolCallResult, ToolDefinition};
use rpc::RpcClient;
use tools::{names, ToolError};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main Solana tool server
///
/// Owns the configuration and the outbound clients. The RPC client and the
/// configured wallet are created on first use and kept for the life of the
/// server.
pub struct SolanaMcpServer {
    config: Config,
    http: reqwest::Client,
    rpc: OnceCell<RpcClient>,
    wallet: OnceCell<Keypair>,
    prices: PriceClient,
    swaps: SwapClient,
}

impl SolanaMcpServer {
    pub fn new(config: Config) -> Result<Self, ServerError> {
        info!("Initializing Solana MCP server on {}", config.current_network);

        let http = reqwest::Client::builder()
            .timeout(config.apis.http_timeout)
            .user_agent(concat!("solana-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let prices = PriceClient::new(
            http.clone(),
            &config.apis.coingecko_api_url,
            config.apis.coingecko_api_key.as_ref(),
        );
        let swaps = SwapClient::new(
            http.clone(),
            &config.apis.jupiter_api_url,
            config.apis.jupiter_api_key.as_ref(),
        );

        Ok(Self {
            config,
            http,
            rpc: OnceCell::new(),
            wallet: OnceCell::new(),
            prices,
            swaps,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The fixed tool catalog
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        tools::list_tools()
    }

    async fn rpc(&self) -> &RpcClient {
        self.rpc
            .get_or_init(|| async {
                let url = self.config.get_rpc_url(None);
                info!("Connecting to Solana {} at {}", self.config.current_network, url);
                RpcClient::new(self.http.clone(), url, self.config.commitment)
            })
            .await
    }

    /// The wallet from `SOLANA_PRIVATE_KEY`, decoded once
    pub async fn configured_wallet(&self) -> Result<Option<&Keypair>, DomainError> {
        let Some(secret) = &self.config.private_key else {
            return Ok(None);
        };

        self.wallet
            .get_or_try_init(|| async { Keypair::from_base58(secret.expose_secret()) })
            .await
            .map(Some)
    }

    /// Run one tool
    ///
    /// Never fails: every problem, including a panic inside a tool, comes
    /// back as an error result with a message for the client.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> ToolCallResult {
        debug!("Calling tool '{}' with {}", name, arguments);

        match AssertUnwindSafe(self.dispatch(name, arguments)).catch_unwind().await {
            Ok(Ok(text)) => ToolCallResult::success(text),
            Ok(Err(err)) => {
                warn!("Tool '{}' failed: {}", name, err);
                ToolCallResult::failure(&err)
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("Tool '{}' panicked: {}", name, message);
                ToolCallResult::failure(&ToolError::internal(format!("Error: {}", message)))
            }
        }
    }

    async fn dispatch(&self, name: &str, arguments: Value) -> Result<String, ToolError> {
        match name {
            names::GET_BALANCE => {
                let params = parse_arguments(arguments)?;
                render(&tools::get_balance(self.rpc().await, params).await?)
            }
            names::GET_TOKEN_BALANCE => {
                let params = parse_arguments(arguments)?;
                render(&tools::get_token_balance(self.rpc().await, params).await?)
            }
            names::GET_TRANSACTION => {
                let params = parse_arguments(arguments)?;
                let network = self.config.get_network_config(None);
                render(&tools::get_transaction(self.rpc().await, network, params).await?)
            }
            names::GET_TOKEN_PRICE => {
                if !self.config.features.market_data {
                    return Err(ToolError::disabled("Error: market data tools are disabled"));
                }
                let params = parse_arguments(arguments)?;
                render(&tools::get_token_price(&self.prices, params).await?)
            }
            names::CREATE_WALLET => render(&tools::create_wallet()),
            names::GET_ACCOUNT_INFO => {
                let params = parse_arguments(arguments)?;
                render(&tools::get_account_info(self.rpc().await, params).await?)
            }
            names::SWAP_TOKENS => {
                if !self.config.features.defi_tools {
                    return Err(ToolError::disabled("Error: DeFi tools are disabled"));
                }
                let params = parse_arguments(arguments)?;
                render(&tools::swap_tokens(&self.swaps, params).await?)
            }
            _ => Err(ToolError::invalid_input(format!("Unknown tool: {}", name))),
        }
    }

    /// Log which wallet is configured; a bad key only warns
    async fn report_wallet(&self) {
        match self.configured_wallet().await {
            Ok(Some(wallet)) => info!("Configured wallet: {}", wallet.pubkey()),
            Ok(None) => info!("No wallet configured"),
            Err(e) => warn!("Configured wallet unusable: {}", e),
        }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin closes or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        self.report_wallet().await;

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Like [`Self::run`], over any line-oriented reader and writer
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<(), ServerError>
    where
        R: tokio::io::AsyncBufRead + Unpin,
        W: tokio::io::AsyncWrite + Unpin,
    {
        self.report_wallet().await;

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.serve(reader, writer).await
    }
}

/// Decode tool arguments; a missing argument object counts as empty
fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_input(format!("Error: {}", e)))
}

/// Tool responses go back as indented JSON text
fn render<T: Serialize>(response: &T) -> Result<String, ToolError> {
    serde_json::to_string_pretty(response).map_err(|e| ToolError::internal(format!("Error: {}", e)))
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "tool panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server_with(vars: &[(&str, &str)]) -> SolanaMcpServer {
        let vars: Vec<(String, String)> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        let config = Config::from_lookup(|key| vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()));
        SolanaMcpServer::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let server = server_with(&[]);
        let result = server.call_tool("nonexistent_tool", json!({})).await;

        assert!(result.is_error);
        assert_eq!(result.text(), "Unknown tool: nonexistent_tool");
    }

    #[tokio::test]
    async fn test_missing_argument() {
        let server = server_with(&[]);
        let result = server.call_tool("get_balance", json!({})).await;

        assert!(result.is_error);
        assert!(result.text().starts_with("Error: missing field `address`"));
    }

    #[tokio::test]
    async fn test_create_wallet_accepts_null_arguments() {
        let server = server_with(&[]);
        let result = server.call_tool("create_wallet", Value::Null).await;

        assert!(!result.is_error);
        let body: Value = serde_json::from_str(&result.text()).unwrap();
        assert!(body["public_key"].is_string());
        assert!(body["private_key"].is_string());
    }

    #[tokio::test]
    async fn test_disabled_features() {
        let server = server_with(&[("ENABLE_MARKET_DATA", "false"), ("ENABLE_DEFI_TOOLS", "False")]);

        let price = server.call_tool("get_token_price", json!({"token_symbol": "SOL"})).await;
        assert_eq!(price.text(), "Error: market data tools are disabled");
        assert_eq!(price.error_kind, Some(tools::ToolErrorKind::Disabled));

        let swap = server.call_tool("swap_tokens", json!({})).await;
        assert_eq!(swap.text(), "Error: DeFi tools are disabled");

        // The catalog does not shrink
        assert_eq!(server.list_tools().len(), 7);
    }

    #[tokio::test]
    async fn test_configured_wallet() {
        let server = server_with(&[]);
        assert!(server.configured_wallet().await.unwrap().is_none());

        let keypair = Keypair::generate();
        let encoded = keypair.to_base58();
        let server = server_with(&[("SOLANA_PRIVATE_KEY", encoded.as_str())]);
        let wallet = server.configured_wallet().await.unwrap().unwrap();
        assert_eq!(wallet.pubkey(), keypair.pubkey());

        let server = server_with(&[("SOLANA_PRIVATE_KEY", "abc")]);
        assert!(server.configured_wallet().await.is_err());
    }

    #[tokio::test]
    async fn test_bad_private_key_does_not_stop_the_server() {
        let server = server_with(&[("SOLANA_PRIVATE_KEY", "abc")]);
        let input = "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n";
        let mut output = Vec::new();

        server.serve(input.as_bytes(), &mut output).await.unwrap();

        let response: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"], json!({}));
    }

    #[test]
    fn test_panic_message() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(boxed.as_ref()), "bang");
    }
}
