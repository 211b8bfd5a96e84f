//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction records, kinds, and statuses
//! - `ledger`: The reconstructed payment hierarchy and its totals
//! - `refund`: Refund allocation output values
//! - `error`: Error types for builds and record loading

pub mod error;
pub mod ledger;
pub mod refund;
pub mod transaction;

pub use error::LedgerError;
pub use ledger::{AuthorisationNode, Ledger, LedgerTotals, PaymentTree};
pub use refund::{RefundInstruction, RefundOutcome};
pub use transaction::{TransactionCode, TransactionKind, TransactionRecord, TransactionStatus};
