/// Tool for generating wallets

use serde::Serialize;
use tracing::info;

use crate::domain::{truncate_address, Keypair};

const WALLET_WARNING: &str = "Store the private key securely. Never share it with anyone.";

/// Response from create_wallet
#[derive(Serialize)]
pub struct CreateWalletResponse {
    pub public_key: String,
    /// Base58 of the 64-byte secret key followed by the public key
    pub private_key: String,
    pub warning: String,
}

impl std::fmt::Debug for CreateWalletResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateWalletResponse")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Generate a fresh keypair. Nothing is stored.
pub fn create_wallet() -> CreateWalletResponse {
    let keypair = Keypair::generate();
    let public_key = keypair.pubkey().to_string();
    info!("Generated new wallet {}", truncate_address(&public_key, 4, 4));

    CreateWalletResponse {
        public_key,
        private_key: keypair.to_base58(),
        warning: WALLET_WARNING.to_string(),
    }
}
