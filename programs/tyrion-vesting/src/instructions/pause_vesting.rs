use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::VestingSchedule;

pub fn pause_vesting(ctx: Context<PauseVesting>, pause: bool) -> Result<()> {
    let v = &mut ctx.accounts.vesting;
    require_keys_eq!(ctx.accounts.owner.key(), v.owner, LedgerError::Unauthorized);

    let now = Clock::get()?.unix_timestamp;
    if pause {
        v.pause(now)?;
    } else {
        v.resume(now)?;
    }

    emit!(VestingPauseToggled {
        id: v.id,
        owner: v.owner,
        paused: pause,
        accumulated_paused_time: v.accumulated_paused_time,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct PauseVesting<'info> {
    #[account(
        mut,
        seeds = [b"vesting", vesting.id.to_le_bytes().as_ref()],
        bump = vesting.bump
    )]
    pub vesting: Account<'info, VestingSchedule>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingPauseToggled {
    pub id: u64,
    pub owner: Pubkey,
    pub paused: bool,
    pub accumulated_paused_time: i64,
}
