use anchor_lang::prelude::*;

/// Custom error codes for the vesting ledger program.
#[error_code]
pub enum LedgerError {
    #[msg("Fee not provided")]
    FeeNotProvided,

    #[msg("Vesting is paused")]
    VestingPaused,

    #[msg("Vesting is not paused")]
    VestingNotPaused,

    #[msg("Vesting is already paused")]
    VestingAlreadyPaused,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("New duration must be greater than the current duration")]
    DurationMustIncrease,

    #[msg("New withdrawal fee must be lower than the current fee")]
    FeeMustDecrease,

    #[msg("Escrow transfer failed: insufficient balance")]
    TransferFailed,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
