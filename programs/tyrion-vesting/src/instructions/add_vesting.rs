use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer as TransferLamports};
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::UNPAUSED;
use crate::error::LedgerError;
use crate::state::{FeeExempt, Ledger, VestingSchedule};

pub fn add_vesting(
    ctx: Context<AddVesting>,
    beneficiary: Pubkey,
    start_ts: i64,
    duration: i64,
    total_amount: u64,
    fee_lamports: u64,
) -> Result<()> {
    require!(total_amount > 0, LedgerError::InvalidConfig);
    require!(duration > 0, LedgerError::InvalidConfig);
    // start_ts may lie in the past (accrual begins immediately) or the
    // future; only the zero sentinel is rejected.
    require!(start_ts > 0, LedgerError::InvalidTimestamp);
    require!(beneficiary != Pubkey::default(), LedgerError::InvalidPubkey);

    let exempt = ctx
        .accounts
        .fee_exempt
        .as_ref()
        .is_some_and(|fe| fe.exempt);
    if !exempt {
        require!(
            fee_lamports >= ctx.accounts.ledger.vesting_fee,
            LedgerError::FeeNotProvided
        );
    }
    if fee_lamports > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                TransferLamports {
                    from: ctx.accounts.creator.to_account_info(),
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

    require_keys_eq!(
        ctx.accounts.creator_token_account.mint,
        ctx.accounts.mint.key(),
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.creator_token_account.owner,
        ctx.accounts.creator.key(),
        LedgerError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.creator_token_account.amount >= total_amount,
        LedgerError::TransferFailed
    );

    // Escrow transfer-in; the whole transaction (including schedule
    // creation) aborts if the transfer fails.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        total_amount,
    )?;

    let ledger = &mut ctx.accounts.ledger;
    let id = ledger.next_vesting_id;
    ledger.next_vesting_id = id.checked_add(1).ok_or(LedgerError::MathOverflow)?;

    let v = &mut ctx.accounts.vesting;
    v.id = id;
    v.owner = ctx.accounts.creator.key();
    v.beneficiary = beneficiary;
    v.mint = ctx.accounts.mint.key();
    v.start_ts = start_ts;
    v.duration = duration;
    v.total_amount = total_amount;
    v.withdrawn_amount = 0;
    v.paused_at = UNPAUSED;
    v.accumulated_paused_time = 0;
    v.bump = ctx.bumps.vesting;

    emit!(VestingAdded {
        id,
        owner: v.owner,
        beneficiary,
        mint: v.mint,
        start_ts,
        duration,
        total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddVesting<'info> {
    #[account(mut, seeds = [b"ledger"], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = creator,
        space = 8 + VestingSchedule::SIZE,
        seeds = [b"vesting", ledger.next_vesting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub vesting: Account<'info, VestingSchedule>,

    #[account(
        init,
        payer = creator,
        token::mint = mint,
        token::authority = vesting,
        seeds = [b"vault", vesting.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub creator_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub creator: Signer<'info>,

    /// Exemption flag for the creator; omitted for non-exempt callers.
    #[account(
        seeds = [b"fee_exempt", creator.key().as_ref()],
        bump = fee_exempt.bump
    )]
    pub fee_exempt: Option<Account<'info, FeeExempt>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingAdded {
    pub id: u64,
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub mint: Pubkey,
    pub start_ts: i64,
    pub duration: i64,
    pub total_amount: u64,
}
