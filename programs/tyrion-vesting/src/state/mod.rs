pub mod fee_exempt;
pub mod ledger;
pub mod vesting;

pub use fee_exempt::*;
pub use ledger::*;
pub use vesting::*;
