use anchor_lang::prelude::*;

use crate::state::VestingSchedule;

/// Read-only quote of the schedule's current amounts. Callable by anyone,
/// no fee; works while the schedule is paused (the quote is then frozen).
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
    let v = &ctx.accounts.vesting;
    let now = Clock::get()?.unix_timestamp;

    let vested = v.vested_amount(now)?;
    let withdrawable = v.withdrawable_amount(now)?;

    emit!(VestingQuote {
        id: v.id,
        beneficiary: v.beneficiary,
        vested_amount: vested,
        withdrawn_amount: v.withdrawn_amount,
        withdrawable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [b"vesting", vesting.id.to_le_bytes().as_ref()],
        bump = vesting.bump
    )]
    pub vesting: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub id: u64,
    pub beneficiary: Pubkey,
    pub vested_amount: u64,
    pub withdrawn_amount: u64,
    pub withdrawable: u64,
}
