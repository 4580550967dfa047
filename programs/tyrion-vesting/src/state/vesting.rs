use anchor_lang::prelude::*;

use crate::constants::UNPAUSED;
use crate::error::LedgerError;
use crate::utils::accrual;

/// One vesting schedule. PDA: `["vesting", id_le]`.
///
/// Schedules are never closed; a fully-withdrawn schedule remains queryable
/// with `withdrawn_amount == total_amount`.
#[account]
pub struct VestingSchedule {
    /// Sequential id, unique, assigned at creation.
    pub id: u64,
    /// Creator; gates pause, extension and reassignment operations.
    pub owner: Pubkey,
    /// Only key allowed to withdraw; reassignable by the owner.
    pub beneficiary: Pubkey,
    /// Mint of the vested token.
    pub mint: Pubkey,
    /// Vesting start (Unix seconds). Past and future both allowed.
    pub start_ts: i64,
    /// Vesting length in seconds. Extension-only.
    pub duration: i64,
    /// Tokens escrowed at creation. Immutable.
    pub total_amount: u64,
    /// Cumulative tokens withdrawn. Never exceeds `total_amount`.
    pub withdrawn_amount: u64,
    /// Start of the open pause interval, or `UNPAUSED`.
    pub paused_at: i64,
    /// Seconds spent paused across all closed pause intervals.
    pub accumulated_paused_time: i64,
    /// Bump seed for PDA.
    pub bump: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        8 +  // id
        32 + // owner
        32 + // beneficiary
        32 + // mint
        8 +  // start_ts
        8 +  // duration
        8 +  // total_amount
        8 +  // withdrawn_amount
        8 +  // paused_at
        8 +  // accumulated_paused_time
        1;   // bump

    pub fn is_paused(&self) -> bool {
        self.paused_at != UNPAUSED
    }

    /// Open a pause interval. Accrual freezes at `now_ts` until `resume`.
    pub fn pause(&mut self, now_ts: i64) -> core::result::Result<(), LedgerError> {
        if self.is_paused() {
            return Err(LedgerError::VestingAlreadyPaused);
        }
        self.paused_at = now_ts;
        Ok(())
    }

    /// Close the open pause interval, folding its length into
    /// `accumulated_paused_time` so accrual resumes where it froze.
    pub fn resume(&mut self, now_ts: i64) -> core::result::Result<(), LedgerError> {
        if !self.is_paused() {
            return Err(LedgerError::VestingNotPaused);
        }
        let paused_for = now_ts
            .checked_sub(self.paused_at)
            .ok_or(LedgerError::MathOverflow)?;
        self.accumulated_paused_time = self
            .accumulated_paused_time
            .checked_add(paused_for)
            .ok_or(LedgerError::MathOverflow)?;
        self.paused_at = UNPAUSED;
        Ok(())
    }

    pub fn vested_amount(&self, now_ts: i64) -> core::result::Result<u64, LedgerError> {
        accrual::vested_amount(
            now_ts,
            self.start_ts,
            self.duration,
            self.paused_at,
            self.accumulated_paused_time,
            self.total_amount,
        )
    }

    pub fn withdrawable_amount(&self, now_ts: i64) -> core::result::Result<u64, LedgerError> {
        accrual::withdrawable_amount(
            now_ts,
            self.start_ts,
            self.duration,
            self.paused_at,
            self.accumulated_paused_time,
            self.total_amount,
            self.withdrawn_amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(start_ts: i64, duration: i64, total_amount: u64) -> VestingSchedule {
        VestingSchedule {
            id: 0,
            owner: Pubkey::new_unique(),
            beneficiary: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            start_ts,
            duration,
            total_amount,
            withdrawn_amount: 0,
            paused_at: UNPAUSED,
            accumulated_paused_time: 0,
            bump: 255,
        }
    }

    const DAY: i64 = 86_400;

    #[test]
    fn pause_cycle_shifts_the_end_without_resetting_accrual() {
        // 100 tokens over 30 days, paused for 5 days at the halfway mark.
        let start = 1_700_000_000;
        let mut s = schedule(start, 30 * DAY, 100);

        let pause_ts = start + 15 * DAY;
        assert_eq!(s.withdrawable_amount(pause_ts).unwrap(), 50);

        s.pause(pause_ts).unwrap();
        // Frozen while paused.
        assert_eq!(s.withdrawable_amount(pause_ts + 5 * DAY).unwrap(), 50);

        s.resume(pause_ts + 5 * DAY).unwrap();
        assert_eq!(s.accumulated_paused_time, 5 * DAY);
        // Accrual resumes where it froze; full amount at the shifted end.
        assert_eq!(s.withdrawable_amount(pause_ts + 5 * DAY + 1).unwrap(), 50);
        assert_eq!(s.withdrawable_amount(start + 35 * DAY).unwrap(), 100);
    }

    #[test]
    fn double_pause_and_double_resume_fail() {
        let start = 1_700_000_000;
        let mut s = schedule(start, 1_000, 100);

        assert!(matches!(s.resume(start), Err(LedgerError::VestingNotPaused)));
        s.pause(start + 10).unwrap();
        assert!(matches!(s.pause(start + 20), Err(LedgerError::VestingAlreadyPaused)));
        s.resume(start + 30).unwrap();
        assert!(matches!(s.resume(start + 40), Err(LedgerError::VestingNotPaused)));
        assert_eq!(s.accumulated_paused_time, 20);
    }

    #[test]
    fn withdrawable_subtracts_withdrawn() {
        let start = 1_700_000_000;
        let mut s = schedule(start, 1_000, 100);
        s.withdrawn_amount = 30;

        assert_eq!(s.withdrawable_amount(start + 500).unwrap(), 20);
        assert_eq!(s.withdrawable_amount(start + 2_000).unwrap(), 70);
    }
}
