use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::Ledger;

pub fn set_vesting_fee(ctx: Context<SetVestingFee>, fee: u64) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ledger.authority,
        LedgerError::Unauthorized
    );

    let old = ledger.vesting_fee;
    ledger.vesting_fee = fee;

    emit!(VestingFeeSet { old_fee: old, new_fee: fee });
    Ok(())
}

#[derive(Accounts)]
pub struct SetVestingFee<'info> {
    #[account(mut, seeds = [b"ledger"], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    pub authority: Signer<'info>,
}

#[event]
pub struct VestingFeeSet {
    pub old_fee: u64,
    pub new_fee: u64,
}
