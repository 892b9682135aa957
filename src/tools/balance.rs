/// Tools for SOL and SPL token balances
///
/// This module implements the get_balance and get_token_balance MCP tools.

use serde::{Deserialize, Serialize};

use super::ToolError;
use crate::domain::{format_token_amount, known_token_decimals, lamports_to_sol, Pubkey, SplTokenAccount};
use crate::rpc::ChainReader;

/// Parameters for get_balance
#[derive(Debug, Deserialize)]
pub struct BalanceParams {
    pub address: String,
}

/// Response from get_balance
#[derive(Debug, Serialize, PartialEq)]
pub struct BalanceResponse {
    pub address: String,
    pub balance_sol: f64,
    pub balance_lamports: u64,
}

/// Get the SOL balance of an address
pub async fn get_balance<C: ChainReader + ?Sized>(
    chain: &C,
    params: BalanceParams,
) -> Result<BalanceResponse, ToolError> {
    const CONTEXT: &str = "Error getting balance";

    let address: Pubkey = params
        .address
        .parse()
        .map_err(|e| ToolError::invalid_input(format!("{}: {}", CONTEXT, e)))?;

    match chain.get_balance(&address).await {
        Ok(Some(lamports)) => Ok(BalanceResponse {
            address: params.address,
            balance_sol: lamports_to_sol(lamports),
            balance_lamports: lamports,
        }),
        Ok(None) => Err(ToolError::not_found("Failed to get balance")),
        Err(e) => Err(ToolError::rpc(CONTEXT, e)),
    }
}

/// Parameters for get_token_balance
#[derive(Debug, Deserialize)]
pub struct TokenBalanceParams {
    pub address: String,
    pub token_mint: String,
}

/// Response from get_token_balance
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenBalanceResponse {
    pub address: String,
    pub token_mint: String,
    /// Raw amount in the mint's smallest unit
    pub balance: u64,
    pub token_account: String,
    /// Decimal-adjusted amount, only for well-known mints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_balance: Option<f64>,
}

/// Get an address's balance of one SPL token
///
/// Only the first token account the node returns for the mint is read.
pub async fn get_token_balance<C: ChainReader + ?Sized>(
    chain: &C,
    params: TokenBalanceParams,
) -> Result<TokenBalanceResponse, ToolError> {
    const CONTEXT: &str = "Error getting token balance";

    let owner: Pubkey = params
        .address
        .parse()
        .map_err(|e| ToolError::invalid_input(format!("{}: {}", CONTEXT, e)))?;
    let mint: Pubkey = params
        .token_mint
        .parse()
        .map_err(|e| ToolError::invalid_input(format!("{}: {}", CONTEXT, e)))?;

    let accounts = chain
        .get_token_accounts_by_owner(&owner, &mint)
        .await
        .map_err(|e| ToolError::rpc(CONTEXT, e))?;

    let first = accounts
        .into_iter()
        .next()
        .ok_or_else(|| ToolError::not_found("No token account found"))?;

    let token = SplTokenAccount::unpack(&first.account.data)
        .map_err(|e| ToolError::new(super::ToolErrorKind::Rpc, format!("{}: {}", CONTEXT, e)))?;

    Ok(TokenBalanceResponse {
        ui_balance: known_token_decimals(&params.token_mint)
            .map(|decimals| format_token_amount(token.amount, decimals)),
        address: params.address,
        token_mint: params.token_mint,
        balance: token.amount,
        token_account: first.pubkey,
    })
}
