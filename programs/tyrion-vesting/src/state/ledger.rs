use anchor_lang::prelude::*;

/// Singleton ledger configuration PDA.
#[account]
pub struct Ledger {
    /// Authority for administrative operations (fees, exemptions, sweeps).
    pub authority: Pubkey,
    /// Lamports a non-exempt creator must provide with `add_vesting`.
    pub vesting_fee: u64,
    /// Lamports a non-exempt beneficiary must provide with `withdraw`.
    /// Decrease-only after initialization.
    pub withdrawal_fee: u64,
    /// Next schedule id; assigned then incremented on each `add_vesting`.
    pub next_vesting_id: u64,
    /// Fee lamports held by this PDA on top of its rent-exempt balance.
    pub collected_fees: u64,
    /// Bump seed for PDA.
    pub bump: u8,
}

impl Ledger {
    pub const SIZE: usize =
        32 + // authority
        8 +  // vesting_fee
        8 +  // withdrawal_fee
        8 +  // next_vesting_id
        8 +  // collected_fees
        1;   // bump
}
