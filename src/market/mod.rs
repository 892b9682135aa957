/// Clients for off-chain market services
///
/// Prices come from CoinGecko's simple-price endpoint; swaps are quoted and
/// built by the Jupiter aggregator. Neither client signs anything.

pub mod price;
pub mod swap;

pub use price::*;
pub use swap::*;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur while calling a market service
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl MarketError {
    /// The most useful text for a caller: the service's own error body when
    /// it sent one, otherwise the error itself
    pub fn detail(&self) -> String {
        match self {
            MarketError::Status { body, .. } if !body.trim().is_empty() => body.clone(),
            other => other.to_string(),
        }
    }
}

/// Turn a non-2xx response into [`MarketError::Status`]
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, MarketError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(MarketError::Status {
        status: status.as_u16(),
        body,
    })
}

fn copy_secret(secret: &SecretString) -> SecretString {
    SecretString::from(secret.expose_secret().to_owned())
}
