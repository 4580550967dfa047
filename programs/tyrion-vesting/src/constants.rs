//! Program-wide constants.

/// Sentinel for `VestingSchedule::paused_at` meaning "no open pause interval".
pub const UNPAUSED: i64 = 0;

/// Default creation fee charged to non-exempt callers of `add_vesting`, in
/// lamports (1 SOL).
pub const DEFAULT_VESTING_FEE: u64 = 1_000_000_000;

/// Default fee charged to non-exempt beneficiaries on `withdraw`, in
/// lamports (0.01 SOL). Only ever lowered after deployment.
pub const DEFAULT_WITHDRAWAL_FEE: u64 = 10_000_000;
