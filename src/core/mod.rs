pub mod clock;
pub mod currency;
pub mod error;
pub mod ledger;
pub mod transaction;

pub use error::{TransferError, TransferResult};
pub use ledger::{Ledger, SharedLedger};
pub use transaction::{Amount, Transaction};
