/// Read access to the Solana ledger
///
/// [`ChainReader`] is the seam the tools are written against; [`RpcClient`]
/// implements it over JSON-RPC. Tests substitute their own reader.

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Pubkey, TxSignature};

/// Errors that can occur while talking to an RPC node
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("RPC request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("RPC endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected RPC response: {0}")]
    Decode(String),
}

/// The ledger reads the tools need
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Lamport balance, or `None` if the node returned no value
    async fn get_balance(&self, address: &Pubkey) -> Result<Option<u64>, RpcError>;

    /// Token accounts owned by `owner` holding `mint`
    async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> Result<Vec<KeyedAccount>, RpcError>;

    /// A confirmed transaction, or `None` if the node does not know it
    async fn get_transaction(&self, signature: &TxSignature) -> Result<Option<TransactionInfo>, RpcError>;

    /// Account state, or `None` if the account does not exist
    async fn get_account_info(&self, address: &Pubkey) -> Result<Option<AccountInfo>, RpcError>;
}
