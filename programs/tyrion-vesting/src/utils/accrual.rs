//! Linear vesting accrual with pause accounting.
//!
//! - effective_now = paused_at while an open pause interval exists, else now
//! - elapsed = clamp(effective_now - start - accumulated_paused_time, 0, duration)
//! - vested = total * elapsed / duration (u128 intermediate, floor division)
//! - withdrawable = vested - withdrawn, floored at 0
//!
//! Pause time is modeled as an accumulator rather than a state machine: the
//! open interval is `paused_at`, closed intervals are summed into
//! `accumulated_paused_time`, and both shift the effective clock.

use crate::constants::UNPAUSED;
use crate::error::LedgerError;

/// Non-paused seconds elapsed since `start_ts`, clamped to `[0, duration]`.
pub fn effective_elapsed(
    now_ts: i64,
    start_ts: i64,
    duration: i64,
    paused_at: i64,
    paused_total: i64,
) -> Result<i64, LedgerError> {
    if duration <= 0 {
        return Err(LedgerError::InvalidConfig);
    }
    let effective_now = if paused_at != UNPAUSED { paused_at } else { now_ts };
    let elapsed = effective_now
        .checked_sub(start_ts)
        .ok_or(LedgerError::MathOverflow)?
        .checked_sub(paused_total)
        .ok_or(LedgerError::MathOverflow)?;
    Ok(elapsed.clamp(0, duration))
}

/// Tokens unlocked by elapsed non-paused time, capped at `total_amount`.
pub fn vested_amount(
    now_ts: i64,
    start_ts: i64,
    duration: i64,
    paused_at: i64,
    paused_total: i64,
    total_amount: u64,
) -> Result<u64, LedgerError> {
    let elapsed = effective_elapsed(now_ts, start_ts, duration, paused_at, paused_total)?;
    let vested = (total_amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(LedgerError::MathOverflow)?
        / (duration as u128);
    u64::try_from(vested).map_err(|_| LedgerError::MathOverflow)
}

/// Vested amount minus what was already withdrawn, floored at 0.
#[allow(clippy::too_many_arguments)]
pub fn withdrawable_amount(
    now_ts: i64,
    start_ts: i64,
    duration: i64,
    paused_at: i64,
    paused_total: i64,
    total_amount: u64,
    withdrawn: u64,
) -> Result<u64, LedgerError> {
    let vested = vested_amount(now_ts, start_ts, duration, paused_at, paused_total, total_amount)?;
    Ok(vested.saturating_sub(withdrawn))
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;

    fn vested(now: i64, duration: i64, total: u64) -> u64 {
        vested_amount(now, START, duration, UNPAUSED, 0, total).unwrap()
    }

    #[test]
    fn zero_at_start_and_before() {
        assert_eq!(vested(START, 1_000, 100), 0);
        assert_eq!(vested(START - 500, 1_000, 100), 0);
    }

    #[test]
    fn linear_between_start_and_end() {
        assert_eq!(vested(START + 250, 1_000, 100), 25);
        assert_eq!(vested(START + 500, 1_000, 100), 50);
        assert_eq!(vested(START + 999, 1_000, 100), 99);
    }

    #[test]
    fn caps_at_total_after_end() {
        assert_eq!(vested(START + 1_000, 1_000, 100), 100);
        assert_eq!(vested(START + 100_000, 1_000, 100), 100);
    }

    #[test]
    fn past_start_accrues_immediately() {
        // Schedule created with start_ts 250s in the past: pro-rated at once.
        let now = START + 250;
        assert_eq!(
            vested_amount(now, START, 1_000, UNPAUSED, 0, 100).unwrap(),
            25
        );
    }

    #[test]
    fn large_amounts_do_not_overflow_u64_math() {
        let total = u64::MAX;
        let v = vested_amount(START + 500, START, 1_000, UNPAUSED, 0, total).unwrap();
        assert_eq!(v, total / 2);
        assert_eq!(
            vested_amount(START + 1_000, START, 1_000, UNPAUSED, 0, total).unwrap(),
            total
        );
    }

    #[test]
    fn open_pause_interval_freezes_the_clock() {
        let paused_at = START + 500;
        // Measured at pause time and well after: identical.
        let at_pause = vested_amount(paused_at, START, 1_000, paused_at, 0, 100).unwrap();
        let later = vested_amount(paused_at + 400, START, 1_000, paused_at, 0, 100).unwrap();
        assert_eq!(at_pause, 50);
        assert_eq!(later, 50);
    }

    #[test]
    fn accumulated_pause_time_shifts_the_end() {
        // 300s of closed pause intervals: end moves from start+1000 to start+1300.
        assert_eq!(
            vested_amount(START + 1_000, START, 1_000, UNPAUSED, 300, 100).unwrap(),
            70
        );
        assert_eq!(
            vested_amount(START + 1_300, START, 1_000, UNPAUSED, 300, 100).unwrap(),
            100
        );
    }

    #[test]
    fn extension_recomputes_against_larger_denominator() {
        let before = vested(START + 500, 1_000, 100);
        let after = vested(START + 500, 1_500, 100);
        assert_eq!(before, 50);
        assert_eq!(after, 33);
    }

    #[test]
    fn withdrawable_subtracts_and_floors_at_zero() {
        assert_eq!(
            withdrawable_amount(START + 500, START, 1_000, UNPAUSED, 0, 100, 20).unwrap(),
            30
        );
        // Extension dropped vested below what was already withdrawn.
        assert_eq!(
            withdrawable_amount(START + 500, START, 1_500, UNPAUSED, 0, 100, 50).unwrap(),
            0
        );
    }

    #[test]
    fn monotonically_non_decreasing_while_unpaused() {
        let mut last = 0;
        for now in (START - 100..START + 1_200).step_by(7) {
            let v = vested_amount(now, START, 1_000, UNPAUSED, 0, 1_000_003).unwrap();
            assert!(v >= last, "vested amount decreased at now={now}");
            last = v;
        }
        assert_eq!(last, 1_000_003);
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        assert!(vested_amount(START, START, 0, UNPAUSED, 0, 100).is_err());
        assert!(vested_amount(START, START, -5, UNPAUSED, 0, 100).is_err());
    }
}
