/// Base58 address and signature types
///
/// Solana public keys are 32 raw bytes rendered as base58; transaction
/// signatures are 64 raw bytes rendered the same way. These wrappers make
/// sure a string has been checked before it is sent to an RPC node.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::DomainError;

/// Length of a decoded public key
pub const PUBKEY_BYTES: usize = 32;

/// Length of a decoded transaction signature
pub const SIGNATURE_BYTES: usize = 64;

/// A validated Solana public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pubkey([u8; PUBKEY_BYTES]);

impl Pubkey {
    /// Wrap raw key bytes
    pub const fn new(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Build a key from a slice, failing unless it is exactly 32 bytes
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, DomainError> {
        let raw: [u8; PUBKEY_BYTES] = bytes.try_into().map_err(|_| {
            DomainError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                PUBKEY_BYTES,
                bytes.len()
            ))
        })?;
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; PUBKEY_BYTES] {
        &self.0
    }
}

impl FromStr for Pubkey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|e| DomainError::InvalidAddress(format!("'{}' is not base58: {}", s, e)))?;

        if decoded.len() != PUBKEY_BYTES {
            return Err(DomainError::InvalidAddress(format!(
                "'{}' decodes to {} bytes, expected {}",
                s,
                decoded.len(),
                PUBKEY_BYTES
            )));
        }

        Self::try_from_slice(&decoded)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl Serialize for Pubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A syntactically valid transaction signature
///
/// The original string is kept so the RPC request echoes exactly what the
/// caller supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxSignature(String);

impl TxSignature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TxSignature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decoded = bs58::decode(trimmed)
            .into_vec()
            .map_err(|e| DomainError::InvalidSignature(format!("'{}' is not base58: {}", trimmed, e)))?;

        if decoded.len() != SIGNATURE_BYTES {
            return Err(DomainError::InvalidSignature(format!(
                "'{}' decodes to {} bytes, expected {}",
                trimmed,
                decoded.len(),
                SIGNATURE_BYTES
            )));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for TxSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check whether a string is a valid Solana address (base58, 32 bytes)
pub fn validate_solana_address(address: &str) -> bool {
    address.parse::<Pubkey>().is_ok()
}

/// Shorten an address for log lines, e.g. `EPjF...Dt1v`
pub fn truncate_address(address: &str, start_chars: usize, end_chars: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= start_chars + end_chars + 3 {
        return address.to_string();
    }

    let head: String = chars[..start_chars].iter().collect();
    let tail: String = chars[chars.len() - end_chars..].iter().collect();
    format!("{}...{}", head, tail)
}
