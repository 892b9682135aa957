/// Unit conversions between lamports, SOL and raw SPL token amounts

/// Number of lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert lamports to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Convert SOL to lamports
///
/// Rounds to the nearest lamport so that `sol_to_lamports(lamports_to_sol(x))`
/// gives back `x`. Negative and NaN inputs saturate to zero.
pub fn sol_to_lamports(sol: f64) -> u64 {
    (sol * LAMPORTS_PER_SOL as f64).round() as u64
}

/// Scale a raw token amount by the mint's decimals
pub fn format_token_amount(amount: u64, decimals: u8) -> f64 {
    amount as f64 / 10f64.powi(decimals as i32)
}
