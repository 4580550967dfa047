use anchor_lang::prelude::*;

/// Per-address fee exemption flag.
/// PDA: `["fee_exempt", address]`. Read by `add_vesting` and `withdraw`.
#[account]
pub struct FeeExempt {
    pub address: Pubkey,
    pub exempt: bool,
    pub bump: u8,
}

impl FeeExempt {
    pub const SIZE: usize =
        32 + // address
        1 +  // exempt
        1;   // bump
}
