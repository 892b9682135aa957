/// Tool for looking up a transaction
///
/// This module implements the get_transaction MCP tool.

use serde::{Deserialize, Serialize};

use super::ToolError;
use crate::config::NetworkConfig;
use crate::domain::TxSignature;
use crate::rpc::ChainReader;

/// Parameters for get_transaction
#[derive(Debug, Deserialize)]
pub struct TransactionParams {
    pub signature: String,
}

/// Fee and outcome of a transaction
#[derive(Debug, Serialize, PartialEq)]
pub struct TransactionStatus {
    pub fee: Option<u64>,
    /// "success" or "failed"
    pub status: String,
}

/// Response from get_transaction
#[derive(Debug, Serialize, PartialEq)]
pub struct TransactionResponse {
    pub signature: String,
    pub slot: u64,
    pub block_time: Option<i64>,
    pub meta: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

/// Get slot, time, fee and status of a confirmed transaction
pub async fn get_transaction<C: ChainReader + ?Sized>(
    chain: &C,
    network: &NetworkConfig,
    params: TransactionParams,
) -> Result<TransactionResponse, ToolError> {
    const CONTEXT: &str = "Error getting transaction";

    let signature: TxSignature = params
        .signature
        .parse()
        .map_err(|e| ToolError::invalid_input(format!("{}: {}", CONTEXT, e)))?;

    let tx = chain
        .get_transaction(&signature)
        .await
        .map_err(|e| ToolError::rpc(CONTEXT, e))?
        .ok_or_else(|| ToolError::not_found("Transaction not found"))?;

    let status = if tx.succeeded() { "success" } else { "failed" };

    Ok(TransactionResponse {
        explorer_url: network.explorer_tx_url(signature.as_str()),
        signature: signature.to_string(),
        slot: tx.slot,
        block_time: tx.block_time,
        meta: TransactionStatus {
            fee: tx.meta.as_ref().map(|m| m.fee),
            status: status.to_string(),
        },
    })
}
