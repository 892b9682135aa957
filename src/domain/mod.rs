/// Domain module containing the Solana primitives every tool works with
/// 
/// This module defines addresses, signatures, keypairs, unit conversions,
/// the well-known token table and the SPL token-account layout. None of it
/// touches the network.

pub mod address;
pub mod keypair;
pub mod token_account;
pub mod tokens;
pub mod units;

// Re-export public types for easy access
pub use address::*;
pub use keypair::*;
pub use token_account::*;
pub use tokens::*;
pub use units::*;

use thiserror::Error;

/// Errors that can occur while parsing Solana primitives
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid account data: expected at least {expected} bytes, got {actual}")]
    InvalidAccountData { expected: usize, actual: usize },
}
