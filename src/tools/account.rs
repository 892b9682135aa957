/// Tool for reading account state
///
/// This module implements the get_account_info MCP tool.

use serde::{Deserialize, Serialize};

use super::ToolError;
use crate::domain::Pubkey;
use crate::rpc::ChainReader;

/// Parameters for get_account_info
#[derive(Debug, Deserialize)]
pub struct AccountInfoParams {
    pub address: String,
}

/// Response from get_account_info
///
/// The data itself is not returned, only its length.
#[derive(Debug, Serialize, PartialEq)]
pub struct AccountInfoResponse {
    pub address: String,
    pub lamports: u64,
    pub owner: String,
    pub executable: bool,
    pub rent_epoch: u64,
    pub data_length: usize,
}

/// Get lamports, owner, executable flag, rent epoch and data size of an account
pub async fn get_account_info<C: ChainReader + ?Sized>(
    chain: &C,
    params: AccountInfoParams,
) -> Result<AccountInfoResponse, ToolError> {
    const CONTEXT: &str = "Error getting account info";

    let address: Pubkey = params
        .address
        .parse()
        .map_err(|e| ToolError::invalid_input(format!("{}: {}", CONTEXT, e)))?;

    let account = chain
        .get_account_info(&address)
        .await
        .map_err(|e| ToolError::rpc(CONTEXT, e))?
        .ok_or_else(|| ToolError::not_found("Account not found"))?;

    Ok(AccountInfoResponse {
        address: params.address,
        lamports: account.lamports,
        owner: account.owner,
        executable: account.executable,
        rent_epoch: account.rent_epoch,
        data_length: account.data.len(),
    })
}
