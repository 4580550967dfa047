use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer as TransferLamports};
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::{FeeExempt, Ledger, VestingSchedule};

pub fn withdraw(ctx: Context<Withdraw>, fee_lamports: u64) -> Result<()> {
    // Capture AccountInfo before taking mutable borrows.
    let vesting_ai = ctx.accounts.vesting.to_account_info();

    let v = &ctx.accounts.vesting;
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        v.beneficiary,
        LedgerError::Unauthorized
    );
    // An open pause interval blocks withdrawal entirely.
    require!(!v.is_paused(), LedgerError::VestingPaused);

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        v.mint,
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        v.beneficiary,
        LedgerError::InvalidTokenAccount
    );

    let exempt = ctx
        .accounts
        .fee_exempt
        .as_ref()
        .is_some_and(|fe| fe.exempt);
    if !exempt {
        require!(
            fee_lamports >= ctx.accounts.ledger.withdrawal_fee,
            LedgerError::FeeNotProvided
        );
    }
    if fee_lamports > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                TransferLamports {
                    from: ctx.accounts.beneficiary.to_account_info(),
                    to: ctx.accounts.ledger.to_account_info(),
                },
            ),
            fee_lamports,
        )?;
        let ledger = &mut ctx.accounts.ledger;
        ledger.collected_fees = ledger
            .collected_fees
            .checked_add(fee_lamports)
            .ok_or(LedgerError::MathOverflow)?;
    }

    let now = Clock::get()?.unix_timestamp;
    let amount = ctx.accounts.vesting.withdrawable_amount(now)?;

    // Nothing vested yet is a successful no-op, not a failure.
    if amount > 0 {
        require!(
            ctx.accounts.vault.amount >= amount,
            LedgerError::TransferFailed
        );

        let id_bytes = ctx.accounts.vesting.id.to_le_bytes();
        let bump = ctx.accounts.vesting.bump;
        let signer_seeds: &[&[&[u8]]] = &[&[b"vesting", id_bytes.as_ref(), &[bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.beneficiary_token_account.to_account_info(),
                    authority: vesting_ai,
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    let v = &mut ctx.accounts.vesting;
    v.withdrawn_amount = v
        .withdrawn_amount
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;

    emit!(TokensWithdrawn {
        id: v.id,
        beneficiary: v.beneficiary,
        amount,
        withdrawn_total: v.withdrawn_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [b"ledger"], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [b"vesting", vesting.id.to_le_bytes().as_ref()],
        bump = vesting.bump
    )]
    pub vesting: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"vault", vesting.key().as_ref()],
        bump,
        constraint = vault.mint == vesting.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    /// Exemption flag for the beneficiary; omitted for non-exempt callers.
    #[account(
        seeds = [b"fee_exempt", beneficiary.key().as_ref()],
        bump = fee_exempt.bump
    )]
    pub fee_exempt: Option<Account<'info, FeeExempt>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensWithdrawn {
    pub id: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub withdrawn_total: u64,
}
