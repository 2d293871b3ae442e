pub mod confirmation;
pub mod ledger;
pub mod policy;

pub use confirmation::ConfirmationCodes;
pub use ledger::{BookingLedger, LedgerError};
pub use policy::{CancellationOutcome, CancellationPolicy, DEFAULT_REFUND_WINDOW_HOURS};
