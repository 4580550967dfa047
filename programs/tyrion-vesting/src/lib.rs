use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("61EiRiRNSU4ZEhnn8JpC6L9VRHz6oKvD9YzSP6bNZNWq");

#[program]
pub mod tyrion_vesting {
    use super::*;

    /// Initialize the singleton ledger config with default fees.
    /// Only called once by the deployer, who becomes the authority.
    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx)
    }

    /// Create a vesting schedule: escrows `total_amount` of the mint into a
    /// program vault and assigns the next sequential id. Non-exempt callers
    /// must provide at least the current vesting fee in lamports.
    pub fn add_vesting(
        ctx: Context<AddVesting>,
        beneficiary: Pubkey,
        start_ts: i64,
        duration: i64,
        total_amount: u64,
        fee_lamports: u64,
    ) -> Result<()> {
        instructions::add_vesting::add_vesting(
            ctx,
            beneficiary,
            start_ts,
            duration,
            total_amount,
            fee_lamports,
        )
    }

    /// Transfer the currently withdrawable amount to the beneficiary.
    /// Fails while the schedule is paused; a zero amount is a no-op.
    pub fn withdraw(ctx: Context<Withdraw>, fee_lamports: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, fee_lamports)
    }

    /// Pause (`true`) or resume (`false`) accrual on a schedule.
    pub fn pause_vesting(ctx: Context<PauseVesting>, pause: bool) -> Result<()> {
        instructions::pause_vesting::pause_vesting(ctx, pause)
    }

    /// Reassign a schedule's administrative owner.
    pub fn change_vesting_owner(
        ctx: Context<ChangeVestingOwner>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::change_vesting_owner::change_vesting_owner(ctx, new_owner)
    }

    /// Reassign a schedule's beneficiary.
    pub fn transfer_vesting_beneficiary(
        ctx: Context<TransferVestingBeneficiary>,
        new_beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::transfer_vesting_beneficiary::transfer_vesting_beneficiary(
            ctx,
            new_beneficiary,
        )
    }

    /// Extend a schedule's duration (increase-only).
    pub fn extend_vesting(ctx: Context<ExtendVesting>, new_duration: i64) -> Result<()> {
        instructions::extend_vesting::extend_vesting(ctx, new_duration)
    }

    /// Emit the current vested/withdrawable amounts for a schedule.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx)
    }

    /// Set the creation fee (authority only).
    pub fn set_vesting_fee(ctx: Context<SetVestingFee>, fee: u64) -> Result<()> {
        instructions::set_vesting_fee::set_vesting_fee(ctx, fee)
    }

    /// Lower the withdrawal fee (authority only, decrease-only).
    pub fn set_withdrawal_fee(ctx: Context<SetWithdrawalFee>, fee: u64) -> Result<()> {
        instructions::set_withdrawal_fee::set_withdrawal_fee(ctx, fee)
    }

    /// Grant or revoke fee exemption for an address (authority only).
    pub fn set_fee_exempted(ctx: Context<SetFeeExempted>, exempt: bool) -> Result<()> {
        instructions::set_fee_exempted::set_fee_exempted(ctx, exempt)
    }

    /// Sweep collected fee lamports to a destination (authority only).
    pub fn withdraw_fees(ctx: Context<WithdrawFees>) -> Result<()> {
        instructions::withdraw_fees::withdraw_fees(ctx)
    }
}
