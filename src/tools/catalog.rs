/// The fixed catalog of tools this server offers

use serde_json::json;

use crate::mcp::protocol::ToolDefinition;

/// Tool names, as clients call them
pub mod names {
    pub const GET_BALANCE: &str = "get_balance";
    pub const GET_TOKEN_BALANCE: &str = "get_token_balance";
    pub const GET_TRANSACTION: &str = "get_transaction";
    pub const GET_TOKEN_PRICE: &str = "get_token_price";
    pub const CREATE_WALLET: &str = "create_wallet";
    pub const GET_ACCOUNT_INFO: &str = "get_account_info";
    pub const SWAP_TOKENS: &str = "swap_tokens";
}

fn tool(name: &str, description: &str, input_schema: serde_json::Value) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

/// All seven tools, in a stable order
pub fn list_tools() -> Vec<ToolDefinition> {
    vec![
        tool(
            names::GET_BALANCE,
            "Get SOL balance for a Solana address",
            json!({
                "type": "object",
                "properties": {
                    "address": {"type": "string", "description": "Solana public key address"}
                },
                "required": ["address"]
            }),
        ),
        tool(
            names::GET_TOKEN_BALANCE,
            "Get SPL token balance for an address",
            json!({
                "type": "object",
                "properties": {
                    "address": {"type": "string", "description": "Solana public key address"},
                    "token_mint": {"type": "string", "description": "Token mint address"}
                },
                "required": ["address", "token_mint"]
            }),
        ),
        tool(
            names::GET_TRANSACTION,
            "Get details of a Solana transaction",
            json!({
                "type": "object",
                "properties": {
                    "signature": {"type": "string", "description": "Transaction signature"}
                },
                "required": ["signature"]
            }),
        ),
        tool(
            names::GET_TOKEN_PRICE,
            "Get current price of a token",
            json!({
                "type": "object",
                "properties": {
                    "token_symbol": {"type": "string", "description": "Token symbol (e.g., SOL, USDC)"}
                },
                "required": ["token_symbol"]
            }),
        ),
        tool(
            names::CREATE_WALLET,
            "Generate a new Solana wallet",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        tool(
            names::GET_ACCOUNT_INFO,
            "Get detailed account information",
            json!({
                "type": "object",
                "properties": {
                    "address": {"type": "string", "description": "Solana public key address"}
                },
                "required": ["address"]
            }),
        ),
        tool(
            names::SWAP_TOKENS,
            "Swap one SPL token for another using Jupiter Aggregator.",
            json!({
                "type": "object",
                "properties": {
                    "input_mint": {"type": "string", "description": "The mint address of the token to swap from."},
                    "output_mint": {"type": "string", "description": "The mint address of the token to swap to."},
                    "amount": {
                        "type": "integer",
                        "description": "The amount of the input token to swap, in the smallest unit (e.g., lamports)."
                    },
                    "user_public_key": {"type": "string", "description": "The public key of the user's wallet performing the swap."},
                    "slippage_bps": {
                        "type": "integer",
                        "description": "The slippage tolerance in basis points (e.g., 50 for 0.5%).",
                        "default": 50
                    }
                },
                "required": ["input_mint", "output_mint", "amount", "user_public_key"]
            }),
        ),
    ]
}
