use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::VestingSchedule;

/// Extension-only duration change. The vested fraction at any fixed elapsed
/// time recomputes against the new, larger denominator.
pub fn extend_vesting(ctx: Context<ExtendVesting>, new_duration: i64) -> Result<()> {
    let v = &mut ctx.accounts.vesting;
    require_keys_eq!(ctx.accounts.owner.key(), v.owner, LedgerError::Unauthorized);
    require!(new_duration > v.duration, LedgerError::DurationMustIncrease);

    let old = v.duration;
    v.duration = new_duration;

    emit!(VestingExtended {
        id: v.id,
        old_duration: old,
        new_duration,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ExtendVesting<'info> {
    #[account(
        mut,
        seeds = [b"vesting", vesting.id.to_le_bytes().as_ref()],
        bump = vesting.bump
    )]
    pub vesting: Account<'info, VestingSchedule>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingExtended {
    pub id: u64,
    pub old_duration: i64,
    pub new_duration: i64,
}
