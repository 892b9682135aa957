/// Shapes of the JSON-RPC results we read

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;

use super::RpcError;

/// Wrapper most RPC methods put around their value
#[derive(Debug, Deserialize)]
pub(crate) struct WithContext<T> {
    pub value: T,
}

/// Account state with its data decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub lamports: u64,
    pub owner: String,
    pub executable: bool,
    pub rent_epoch: u64,
    pub data: Vec<u8>,
}

/// An account together with its address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedAccount {
    pub pubkey: String,
    pub account: AccountInfo,
}

/// The parts of a confirmed transaction the tools report
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInfo {
    pub slot: u64,
    pub block_time: Option<i64>,
    pub meta: Option<TransactionMeta>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionMeta {
    pub fee: u64,
    /// Present and non-null when the transaction failed
    #[serde(default)]
    pub err: Option<Value>,
}

impl TransactionInfo {
    /// Whether the transaction executed without error
    ///
    /// A transaction with no status metadata is not reported as successful.
    pub fn succeeded(&self) -> bool {
        matches!(&self.meta, Some(meta) if meta.err.is_none())
    }
}

/// Account as encoded by the node with `"encoding": "base64"`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UiAccount {
    pub lamports: u64,
    pub owner: String,
    pub executable: bool,
    #[serde(default)]
    pub rent_epoch: u64,
    /// `[payload, encoding]`
    pub data: (String, String),
}

impl UiAccount {
    pub fn decode(self) -> Result<AccountInfo, RpcError> {
        let (payload, encoding) = self.data;
        if encoding != "base64" {
            return Err(RpcError::Decode(format!("unsupported account encoding '{}'", encoding)));
        }

        let data = BASE64
            .decode(payload.as_bytes())
            .map_err(|e| RpcError::Decode(format!("account data is not base64: {}", e)))?;

        Ok(AccountInfo {
            lamports: self.lamports,
            owner: self.owner,
            executable: self.executable,
            rent_epoch: self.rent_epoch,
            data,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UiKeyedAccount {
    pub pubkey: String,
    pub account: UiAccount,
}

impl UiKeyedAccount {
    pub fn decode(self) -> Result<KeyedAccount, RpcError> {
        Ok(KeyedAccount {
            pubkey: self.pubkey,
            account: self.account.decode()?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UiTransaction {
    pub slot: u64,
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub meta: Option<TransactionMeta>,
}

impl From<UiTransaction> for TransactionInfo {
    fn from(tx: UiTransaction) -> Self {
        Self {
            slot: tx.slot,
            block_time: tx.block_time,
            meta: tx.meta,
        }
    }
}
