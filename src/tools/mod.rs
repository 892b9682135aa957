/// MCP tools for Solana
///
/// This module contains all the MCP tools that MCP clients
/// can call. Each tool validates its parameters, makes one call to the ledger
/// or a market service, and reshapes the answer into a small response struct.

pub mod account;
pub mod balance;
pub mod catalog;
pub mod price;
pub mod swap;
pub mod transaction;
pub mod wallet;

// Re-export tool functions for easy access
pub use account::*;
pub use balance::*;
pub use catalog::*;
pub use price::*;
pub use swap::*;
pub use transaction::*;
pub use wallet::*;

use serde::Serialize;
use thiserror::Error;

use crate::rpc::RpcError;

/// Broad class of a tool failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    /// Bad or missing arguments, unknown tool
    InvalidInput,
    /// The thing asked about does not exist
    NotFound,
    /// The RPC node failed or answered with something unusable
    Rpc,
    /// A market service failed
    Http,
    /// The tool is switched off by a feature flag
    Disabled,
    /// A bug on our side
    Internal,
}

/// A tool failure: the kind, plus the exact text shown to the client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidInput, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::NotFound, message)
    }

    pub fn rpc(context: &str, err: RpcError) -> Self {
        Self::new(ToolErrorKind::Rpc, format!("{}: {}", context, err))
    }

    pub fn disabled(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Disabled, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Internal, message)
    }
}
