/// JSON-RPC client for a Solana node
///
/// Requests are plain HTTP POSTs of JSON-RPC 2.0 envelopes. Account data is
/// always requested base64-encoded and decoded locally.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use super::types::{UiAccount, UiKeyedAccount, UiTransaction, WithContext};
use super::{AccountInfo, ChainReader, KeyedAccount, RpcError, TransactionInfo};
use crate::config::Commitment;
use crate::domain::{Pubkey, TxSignature};

/// RPC client bound to one endpoint and commitment level
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    commitment: Commitment,
}

impl RpcClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>, commitment: Commitment) -> Self {
        Self {
            http,
            url: url.into(),
            commitment,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// Make a JSON-RPC call and decode its `result`
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        debug!("RPC {} -> {}", method, self.url);

        let resp = self.http.post(&self.url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut envelope: Value = resp.json().await?;

        if let Some(error) = envelope.get("error").filter(|e| !e.is_null()) {
            return Err(RpcError::Rpc {
                code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        let result = envelope
            .get_mut("result")
            .map(Value::take)
            .ok_or_else(|| RpcError::Decode(format!("{}: missing 'result' field", method)))?;

        serde_json::from_value(result).map_err(|e| RpcError::Decode(format!("{}: {}", method, e)))
    }

    /// `getTransaction` does not accept `processed`
    fn transaction_commitment(&self) -> Commitment {
        match self.commitment {
            Commitment::Processed => Commitment::Confirmed,
            other => other,
        }
    }
}

#[async_trait]
impl ChainReader for RpcClient {
    async fn get_balance(&self, address: &Pubkey) -> Result<Option<u64>, RpcError> {
        let result: WithContext<Option<u64>> = self
            .call(
                "getBalance",
                json!([address.to_string(), {"commitment": self.commitment.as_str()}]),
            )
            .await?;
        Ok(result.value)
    }

    async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> Result<Vec<KeyedAccount>, RpcError> {
        let result: WithContext<Vec<UiKeyedAccount>> = self
            .call(
                "getTokenAccountsByOwner",
                json!([
                    owner.to_string(),
                    {"mint": mint.to_string()},
                    {"encoding": "base64", "commitment": self.commitment.as_str()}
                ]),
            )
            .await?;

        result.value.into_iter().map(UiKeyedAccount::decode).collect()
    }

    async fn get_transaction(&self, signature: &TxSignature) -> Result<Option<TransactionInfo>, RpcError> {
        let result: Option<UiTransaction> = self
            .call(
                "getTransaction",
                json!([
                    signature.as_str(),
                    {
                        "encoding": "json",
                        "commitment": self.transaction_commitment().as_str(),
                        "maxSupportedTransactionVersion": 0
                    }
                ]),
            )
            .await?;

        Ok(result.map(TransactionInfo::from))
    }

    async fn get_account_info(&self, address: &Pubkey) -> Result<Option<AccountInfo>, RpcError> {
        let result: WithContext<Option<UiAccount>> = self
            .call(
                "getAccountInfo",
                json!([
                    address.to_string(),
                    {"encoding": "base64", "commitment": self.commitment.as_str()}
                ]),
            )
            .await?;

        result.value.map(UiAccount::decode).transpose()
    }
}
