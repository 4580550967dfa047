pub mod initialize_ledger;
pub mod add_vesting;
pub mod withdraw;
pub mod pause_vesting;
pub mod change_vesting_owner;
pub mod transfer_vesting_beneficiary;
pub mod extend_vesting;
pub mod emit_vesting_quote;
pub mod set_vesting_fee;
pub mod set_withdrawal_fee;
pub mod set_fee_exempted;
pub mod withdraw_fees;

pub use initialize_ledger::*;
pub use add_vesting::*;
pub use withdraw::*;
pub use pause_vesting::*;
pub use change_vesting_owner::*;
pub use transfer_vesting_beneficiary::*;
pub use extend_vesting::*;
pub use emit_vesting_quote::*;
pub use set_vesting_fee::*;
pub use set_withdrawal_fee::*;
pub use set_fee_exempted::*;
pub use withdraw_fees::*;
