use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::Ledger;

/// Sweeps collected fee lamports from the ledger PDA to `destination`.
/// The rent-exempt balance stays behind; only fees on top of it move.
pub fn withdraw_fees(ctx: Context<WithdrawFees>) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ledger.authority,
        LedgerError::Unauthorized
    );

    let amount = ledger.collected_fees;
    if amount == 0 {
        emit!(FeesWithdrawn {
            destination: ctx.accounts.destination.key(),
            amount: 0,
        });
        return Ok(());
    }

    let ledger_ai = ctx.accounts.ledger.to_account_info();
    let destination_ai = ctx.accounts.destination.to_account_info();
    {
        let mut from_lamports = ledger_ai.try_borrow_mut_lamports()?;
        **from_lamports = from_lamports
            .checked_sub(amount)
            .ok_or(LedgerError::MathOverflow)?;
    }
    {
        let mut to_lamports = destination_ai.try_borrow_mut_lamports()?;
        **to_lamports = to_lamports
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
    }

    ctx.accounts.ledger.collected_fees = 0;

    emit!(FeesWithdrawn {
        destination: ctx.accounts.destination.key(),
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(mut, seeds = [b"ledger"], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: fee destination chosen by the authority; only receives lamports.
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,

    pub authority: Signer<'info>,
}

#[event]
pub struct FeesWithdrawn {
    pub destination: Pubkey,
    pub amount: u64,
}
