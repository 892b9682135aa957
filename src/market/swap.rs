/// Jupiter aggregator client
///
/// A swap is two sequential calls: `GET /quote` for a route, then
/// `POST /swap` to have that route built into an unsigned transaction for
/// the user's wallet.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{check_status, copy_secret, MarketError};
use crate::domain::Pubkey;

/// Default slippage tolerance (0.5%)
pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

/// Inputs for a swap quote
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
    /// Amount of the input token in its smallest unit
    pub amount: u64,
    pub slippage_bps: u16,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SwapRequest<'a> {
    user_public_key: String,
    quote_response: &'a Value,
    wrap_and_unwrap_sol: bool,
}

#[derive(Debug)]
pub struct SwapClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl SwapClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: Option<&SecretString>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(copy_secret),
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("x-api-key", key.expose_secret()),
            None => request,
        }
    }

    /// Fetch a quote; the response is passed back to [`Self::swap_transaction`] untouched
    pub async fn quote(&self, req: &QuoteRequest) -> Result<Value, MarketError> {
        let url = format!("{}/quote", self.base_url);
        debug!(
            "Requesting swap quote {} -> {} amount={} slippage={}bps",
            req.input_mint, req.output_mint, req.amount, req.slippage_bps
        );

        let request = self.http.get(&url).query(&[
            ("inputMint", req.input_mint.to_string()),
            ("outputMint", req.output_mint.to_string()),
            ("amount", req.amount.to_string()),
            ("slippageBps", req.slippage_bps.to_string()),
        ]);

        let resp = check_status(self.authorize(request).send().await?).await?;
        resp.json()
            .await
            .map_err(|e| MarketError::Decode(format!("quote response: {}", e)))
    }

    /// Build the swap transaction for a quote
    ///
    /// Returns the base64 `swapTransaction`, or `None` if the service
    /// answered without one. Native SOL is wrapped and unwrapped as needed.
    pub async fn swap_transaction(&self, quote: &Value, user: &Pubkey) -> Result<Option<String>, MarketError> {
        let url = format!("{}/swap", self.base_url);
        let body = SwapRequest {
            user_public_key: user.to_string(),
            quote_response: quote,
            wrap_and_unwrap_sol: true,
        };

        let request = self.http.post(&url).json(&body);
        let resp = check_status(self.authorize(request).send().await?).await?;
        let payload: Value = resp
            .json()
            .await
            .map_err(|e| MarketError::Decode(format!("swap response: {}", e)))?;

        Ok(payload
            .get("swapTransaction")
            .and_then(Value::as_str)
            .filter(|tx| !tx.is_empty())
            .map(str::to_string))
    }
}
