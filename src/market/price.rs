/// CoinGecko simple-price client

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use super::{check_status, copy_secret, MarketError};

/// Spot price of one asset
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenPrice {
    pub usd: Option<f64>,
    pub usd_24h_change: Option<f64>,
}

#[derive(Debug)]
pub struct PriceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl PriceClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: Option<&SecretString>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(copy_secret),
        }
    }

    /// USD price and 24h change for a price-service asset id
    ///
    /// Returns `Ok(None)` when the service answers but has no entry for the id.
    pub async fn simple_price(&self, id: &str) -> Result<Option<TokenPrice>, MarketError> {
        let url = format!("{}/simple/price", self.base_url);
        debug!("Fetching price for '{}'", id);

        let mut request = self.http.get(&url).query(&[
            ("ids", id),
            ("vs_currencies", "usd"),
            ("include_24hr_change", "true"),
        ]);
        if let Some(key) = &self.api_key {
            request = request.header("x-cg-demo-api-key", key.expose_secret());
        }

        let resp = check_status(request.send().await?).await?;
        let mut prices: HashMap<String, TokenPrice> = resp
            .json()
            .await
            .map_err(|e| MarketError::Decode(format!("price response: {}", e)))?;

        Ok(prices.remove(id))
    }
}
