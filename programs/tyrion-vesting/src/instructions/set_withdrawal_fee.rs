use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::Ledger;

/// Decrease-only: the withdrawal fee can never be raised back up.
pub fn set_withdrawal_fee(ctx: Context<SetWithdrawalFee>, fee: u64) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ledger.authority,
        LedgerError::Unauthorized
    );
    require!(fee < ledger.withdrawal_fee, LedgerError::FeeMustDecrease);

    let old = ledger.withdrawal_fee;
    ledger.withdrawal_fee = fee;

    emit!(WithdrawalFeeSet { old_fee: old, new_fee: fee });
    Ok(())
}

#[derive(Accounts)]
pub struct SetWithdrawalFee<'info> {
    #[account(mut, seeds = [b"ledger"], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    pub authority: Signer<'info>,
}

#[event]
pub struct WithdrawalFeeSet {
    pub old_fee: u64,
    pub new_fee: u64,
}
