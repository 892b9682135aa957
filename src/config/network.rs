/// Cluster endpoints and commitment levels

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub const MAINNET: &str = "mainnet";
pub const DEVNET: &str = "devnet";
pub const TESTNET: &str = "testnet";

/// Endpoint set for one cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    pub name: String,
    pub rpc_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

impl NetworkConfig {
    pub fn new(name: &str, rpc_url: String, ws_url: Option<String>, explorer_url: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            rpc_url,
            ws_url,
            explorer_url,
        }
    }

    /// Explorer link for a transaction signature, if an explorer is configured
    pub fn explorer_tx_url(&self, signature: &str) -> Option<String> {
        let base = self.explorer_url.as_deref()?;
        // Devnet/testnet explorers carry the cluster as a query string
        Some(match base.split_once('?') {
            Some((root, query)) => format!("{}/tx/{}?{}", root, signature, query),
            None => format!("{}/tx/{}", base, signature),
        })
    }
}

/// Confirmation depth requested from the RPC node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

impl FromStr for Commitment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "processed" => Ok(Commitment::Processed),
            "confirmed" => Ok(Commitment::Confirmed),
            "finalized" => Ok(Commitment::Finalized),
            other => Err(format!(
                "Unknown commitment '{}'. Valid options: processed, confirmed, finalized",
                other
            )),
        }
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
