/// SPL token account layout
///
/// Only the leading fixed fields are decoded: mint, owner and amount. The
/// rest of the 165-byte account (delegate, state, native flag, close
/// authority) is not needed by any tool.

use super::{DomainError, Pubkey};

/// Size of an SPL token account
pub const TOKEN_ACCOUNT_LEN: usize = 165;

const MINT_OFFSET: usize = 0;
const OWNER_OFFSET: usize = 32;
const AMOUNT_OFFSET: usize = 64;
const AMOUNT_END: usize = AMOUNT_OFFSET + 8;

/// The decoded head of an SPL token account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplTokenAccount {
    pub mint: Pubkey,
    pub owner: Pubkey,
    /// Raw amount in the mint's smallest unit
    pub amount: u64,
}

impl SplTokenAccount {
    /// Decode account data
    ///
    /// Token-2022 accounts carry extensions after the base layout, so
    /// anything at least as long as the base account is accepted.
    pub fn unpack(data: &[u8]) -> Result<Self, DomainError> {
        if data.len() < TOKEN_ACCOUNT_LEN {
            return Err(DomainError::InvalidAccountData {
                expected: TOKEN_ACCOUNT_LEN,
                actual: data.len(),
            });
        }

        let mint = Pubkey::try_from_slice(&data[MINT_OFFSET..OWNER_OFFSET])?;
        let owner = Pubkey::try_from_slice(&data[OWNER_OFFSET..AMOUNT_OFFSET])?;

        let mut amount_bytes = [0u8; 8];
        amount_bytes.copy_from_slice(&data[AMOUNT_OFFSET..AMOUNT_END]);

        Ok(Self {
            mint,
            owner,
            amount: u64::from_le_bytes(amount_bytes),
        })
    }
}
