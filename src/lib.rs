//! Refund Ledger Library
//! # Overview
//!
//! This library reconstructs the financial state of a payment from a flat
//! append-only log of transaction records and decides how a requested
//! refund should be distributed across the payment's authorisations.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionRecord, Ledger, RefundInstruction, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - The `RecordStore` collaborator seam
//!   - [`core::builder`] - Flat records to three-tier ledger reconstruction
//!   - [`core::allocator`] - Greedy per-authorisation refund allocation
//!   - [`core::record_store`] - Insertion-ordered in-memory store
//! - [`io`] - CSV record file loading
//!
//! # The ledger model
//!
//! A payment is exactly three tiers deep:
//!
//! - **Purchase**: the root transaction that establishes the payment
//! - **Authorisation**: reserves/charges funds against the purchase
//! - **Refund**: reverses part or all of a specific authorisation
//!
//! Only records with status OK participate. Refunds are never searched for
//! children of their own. Alongside the hierarchy the builder accumulates
//! authorised, refunded, and net totals (net = authorised - refunded), the
//! original purchase amount, and a carried-but-unenforced 115% cap.
//!
//! # Refund allocation
//!
//! [`allocate_refund`] walks authorisations in the order the store returned
//! them, draining each positive remaining balance in turn. A request beyond
//! the total refundable balance reports the shortfall instead of any
//! instructions, unless forced, in which case the coverable part is
//! returned and the remainder is dropped.
//!
//! # Example
//!
//! ```
//! use refund_ledger::{
//!     allocate_refund, LedgerBuilder, MemoryRecordStore, RefundOutcome, TransactionKind,
//!     TransactionRecord, TransactionStatus,
//! };
//! use rust_decimal::Decimal;
//!
//! let mut store = MemoryRecordStore::new();
//! store.insert(TransactionRecord {
//!     code: "p1".into(),
//!     related_code: None,
//!     kind: TransactionKind::Purchase,
//!     status: TransactionStatus::Ok,
//!     amount: Decimal::new(10000, 2),
//!     payment_id: "pay-1".into(),
//!     gateway_tx_id: "vps-p1".into(),
//!     security_key: "key-p1".into(),
//!     auth_code: "auth-p1".into(),
//! });
//! store.insert(TransactionRecord {
//!     code: "a1".into(),
//!     related_code: Some("p1".into()),
//!     kind: TransactionKind::Authorise,
//!     status: TransactionStatus::Ok,
//!     amount: Decimal::new(10000, 2),
//!     payment_id: String::new(),
//!     gateway_tx_id: "vps-a1".into(),
//!     security_key: "key-a1".into(),
//!     auth_code: "auth-a1".into(),
//! });
//!
//! let ledger = LedgerBuilder::new(&store).build("pay-1").unwrap();
//! assert_eq!(ledger.net_total(), Some(Decimal::new(10000, 2)));
//!
//! let outcome = allocate_refund(&ledger, Decimal::new(2500, 2), false).unwrap();
//! let RefundOutcome::Instructions(instructions) = outcome else { unreachable!() };
//! assert_eq!(instructions[0].amount, Decimal::new(2500, 2));
//! ```

// Module declarations
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{allocate_refund, LedgerBuilder, MemoryRecordStore, RecordStore};
pub use io::{load_store, CsvRecordReader};
pub use types::{
    AuthorisationNode, Ledger, LedgerError, LedgerTotals, PaymentTree, RefundInstruction,
    RefundOutcome, TransactionCode, TransactionKind, TransactionRecord, TransactionStatus,
};
