use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::VestingSchedule;

pub fn change_vesting_owner(ctx: Context<ChangeVestingOwner>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), LedgerError::InvalidPubkey);

    let v = &mut ctx.accounts.vesting;
    require_keys_eq!(ctx.accounts.owner.key(), v.owner, LedgerError::Unauthorized);

    let old = v.owner;
    v.owner = new_owner;

    emit!(VestingOwnerChanged {
        id: v.id,
        old_owner: old,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeVestingOwner<'info> {
    #[account(
        mut,
        seeds = [b"vesting", vesting.id.to_le_bytes().as_ref()],
        bump = vesting.bump
    )]
    pub vesting: Account<'info, VestingSchedule>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingOwnerChanged {
    pub id: u64,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}
