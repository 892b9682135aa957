/// Tool for building token swaps
///
/// This module implements the swap_tokens MCP tool. The result is an
/// unsigned transaction; nothing here signs or submits it.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ToolError, ToolErrorKind};
use crate::domain::Pubkey;
use crate::market::{QuoteRequest, SwapClient, DEFAULT_SLIPPAGE_BPS};

const QUOTE_CONTEXT: &str = "Error getting swap quote";
const SWAP_CONTEXT: &str = "Error creating swap transaction";

/// Parameters for swap_tokens
#[derive(Debug, Deserialize)]
pub struct SwapParams {
    pub input_mint: String,
    pub output_mint: String,
    /// Input amount in the token's smallest unit
    pub amount: u64,
    pub user_public_key: String,
    #[serde(default = "default_slippage_bps")]
    pub slippage_bps: u16,
}

fn default_slippage_bps() -> u16 {
    DEFAULT_SLIPPAGE_BPS
}

/// Response from swap_tokens
#[derive(Debug, Serialize, PartialEq)]
pub struct SwapResponse {
    pub message: String,
    #[serde(rename = "swapTransaction")]
    pub swap_transaction: String,
}

fn invalid(why: impl std::fmt::Display) -> ToolError {
    ToolError::invalid_input(format!("{}: {}", QUOTE_CONTEXT, why))
}

/// Quote a swap and have the aggregator build the transaction for it
pub async fn swap_tokens(swaps: &SwapClient, params: SwapParams) -> Result<SwapResponse, ToolError> {
    let input_mint: Pubkey = params.input_mint.parse().map_err(invalid)?;
    let output_mint: Pubkey = params.output_mint.parse().map_err(invalid)?;
    let user: Pubkey = params.user_public_key.parse().map_err(invalid)?;

    if params.amount == 0 {
        return Err(invalid("amount must be greater than zero"));
    }
    if input_mint == output_mint {
        return Err(invalid("input and output mints are the same"));
    }

    let request = QuoteRequest {
        input_mint,
        output_mint,
        amount: params.amount,
        slippage_bps: params.slippage_bps,
    };

    let quote = swaps.quote(&request).await.map_err(|e| {
        warn!("Swap quote failed: {}", e);
        ToolError::new(ToolErrorKind::Http, format!("{}: {}", QUOTE_CONTEXT, e.detail()))
    })?;
    debug!("Got swap quote, requesting transaction for {}", user);

    let transaction = swaps.swap_transaction(&quote, &user).await.map_err(|e| {
        warn!("Swap transaction request failed: {}", e);
        ToolError::new(ToolErrorKind::Http, format!("{}: {}", SWAP_CONTEXT, e.detail()))
    })?;

    match transaction {
        Some(swap_transaction) => Ok(SwapResponse {
            message: "Swap transaction created successfully. Please sign and send this transaction.".to_string(),
            swap_transaction,
        }),
        None => Err(ToolError::new(
            ToolErrorKind::Http,
            "Failed to get swap transaction from Jupiter.",
        )),
    }
}
