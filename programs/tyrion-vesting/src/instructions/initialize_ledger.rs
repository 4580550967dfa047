use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_VESTING_FEE, DEFAULT_WITHDRAWAL_FEE};
use crate::state::Ledger;

pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.authority = ctx.accounts.authority.key();
    ledger.vesting_fee = DEFAULT_VESTING_FEE;
    ledger.withdrawal_fee = DEFAULT_WITHDRAWAL_FEE;
    ledger.next_vesting_id = 0;
    ledger.collected_fees = 0;
    ledger.bump = ctx.bumps.ledger;

    emit!(LedgerInitialized {
        authority: ledger.authority,
        vesting_fee: ledger.vesting_fee,
        withdrawal_fee: ledger.withdrawal_fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Ledger::SIZE,
        seeds = [b"ledger"],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub authority: Pubkey,
    pub vesting_fee: u64,
    pub withdrawal_fee: u64,
}
