use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::VestingSchedule;

/// Owner-initiated beneficiary reassignment. Accrued-but-unwithdrawn
/// amounts follow the schedule to the new beneficiary.
pub fn transfer_vesting_beneficiary(
    ctx: Context<TransferVestingBeneficiary>,
    new_beneficiary: Pubkey,
) -> Result<()> {
    require!(new_beneficiary != Pubkey::default(), LedgerError::InvalidPubkey);

    let v = &mut ctx.accounts.vesting;
    require_keys_eq!(ctx.accounts.owner.key(), v.owner, LedgerError::Unauthorized);

    let old = v.beneficiary;
    v.beneficiary = new_beneficiary;

    emit!(VestingBeneficiaryTransferred {
        id: v.id,
        old_beneficiary: old,
        new_beneficiary,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferVestingBeneficiary<'info> {
    #[account(
        mut,
        seeds = [b"vesting", vesting.id.to_le_bytes().as_ref()],
        bump = vesting.bump
    )]
    pub vesting: Account<'info, VestingSchedule>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingBeneficiaryTransferred {
    pub id: u64,
    pub old_beneficiary: Pubkey,
    pub new_beneficiary: Pubkey,
}
