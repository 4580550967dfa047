use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::{FeeExempt, Ledger};

/// Grants or revokes fee exemption for `address`. Exemption covers both the
/// vesting fee on `add_vesting` and the withdrawal fee on `withdraw`.
pub fn set_fee_exempted(ctx: Context<SetFeeExempted>, exempt: bool) -> Result<()> {
    require!(
        ctx.accounts.address.key() != Pubkey::default(),
        LedgerError::InvalidPubkey
    );

    let fee_exempt = &mut ctx.accounts.fee_exempt;
    fee_exempt.address = ctx.accounts.address.key();
    fee_exempt.exempt = exempt;
    fee_exempt.bump = ctx.bumps.fee_exempt;

    emit!(FeeExemptionSet {
        address: fee_exempt.address,
        exempt,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetFeeExempted<'info> {
    #[account(
        seeds = [b"ledger"],
        bump = ledger.bump,
        constraint = authority.key() == ledger.authority @ LedgerError::Unauthorized
    )]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: only its key is stored; exemption is keyed by address.
    pub address: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + FeeExempt::SIZE,
        seeds = [b"fee_exempt", address.key().as_ref()],
        bump
    )]
    pub fee_exempt: Account<'info, FeeExempt>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct FeeExemptionSet {
    pub address: Pubkey,
    pub exempt: bool,
}
