/// Tool for looking up token prices
///
/// This module implements the get_token_price MCP tool.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ToolError, ToolErrorKind};
use crate::domain::price_service_id;
use crate::market::{MarketError, PriceClient};

/// Parameters for get_token_price
#[derive(Debug, Deserialize)]
pub struct TokenPriceParams {
    /// Symbol such as "SOL", or a raw price-service id
    pub token_symbol: String,
}

/// Response from get_token_price
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenPriceResponse {
    pub token: String,
    pub price_usd: Option<f64>,
    pub change_24h: Option<f64>,
}

/// Get the USD price and 24h change of a token
pub async fn get_token_price(
    prices: &PriceClient,
    params: TokenPriceParams,
) -> Result<TokenPriceResponse, ToolError> {
    let symbol = params.token_symbol.trim();
    let id = price_service_id(symbol);
    let not_found = || ToolError::not_found(format!("Price data not found for {}", symbol.to_lowercase()));

    match prices.simple_price(&id).await {
        Ok(Some(price)) => Ok(TokenPriceResponse {
            token: symbol.to_uppercase(),
            price_usd: price.usd,
            change_24h: price.usd_24h_change,
        }),
        Ok(None) => Err(not_found()),
        Err(MarketError::Status { status, .. }) => {
            debug!("Price service answered {} for '{}'", status, id);
            Err(not_found())
        }
        Err(e) => Err(ToolError::new(
            ToolErrorKind::Http,
            format!("Error getting token price: {}", e),
        )),
    }
}
