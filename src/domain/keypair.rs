/// Ed25519 keypairs in Solana's base58 wallet format
///
/// A Solana "private key" string is the base58 encoding of 64 bytes: the
/// 32-byte secret seed followed by the 32-byte public key.

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;

use super::{DomainError, Pubkey};

/// Length of the secret-plus-public byte string
pub const KEYPAIR_BYTES: usize = 64;

/// A signing keypair
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a fresh random keypair
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Decode a base58 private key string into a keypair
    ///
    /// The trailing public half must match the key derived from the secret.
    pub fn from_base58(private_key: &str) -> Result<Self, DomainError> {
        let bytes = bs58::decode(private_key.trim())
            .into_vec()
            .map_err(|e| DomainError::InvalidPrivateKey(format!("not base58: {}", e)))?;

        let raw: [u8; KEYPAIR_BYTES] = bytes.as_slice().try_into().map_err(|_| {
            DomainError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                KEYPAIR_BYTES,
                bytes.len()
            ))
        })?;

        let signing_key = SigningKey::from_keypair_bytes(&raw)
            .map_err(|e| DomainError::InvalidPrivateKey(e.to_string()))?;

        Ok(Self { signing_key })
    }

    /// Public key of this keypair
    pub fn pubkey(&self) -> Pubkey {
        Pubkey::new(self.signing_key.verifying_key().to_bytes())
    }

    /// Base58 encoding of the 64-byte secret-plus-public form
    pub fn to_base58(&self) -> String {
        bs58::encode(self.signing_key.to_keypair_bytes()).into_string()
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret half
        f.debug_struct("Keypair").field("pubkey", &self.pubkey()).finish()
    }
}
