//! Transaction-related types for the refund ledger
//!
//! This module defines the transaction record as it comes back from the
//! record store, along with the kind and status enums that drive
//! reconciliation filtering.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier of a transaction record (the vendor transaction code)
pub type TransactionCode = String;

/// Kinds of transaction records found in the store
///
/// Only `Purchase`, `Authorise`, and `Refund` participate in ledger
/// reconstruction. `Void` and `Abort` records exist in the same log but are
/// never fetched by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    /// The root transaction that establishes a payment
    Purchase,

    /// Reserves/charges funds against a purchase
    ///
    /// Authorisations are the targets of refund allocation; each one carries
    /// the gateway correlation fields a later refund must reference.
    Authorise,

    /// Reverses part or all of a specific authorisation
    Refund,

    /// Cancels a settled transaction; not part of reconciliation
    Void,

    /// Aborts a deferred transaction; not part of reconciliation
    Abort,
}

/// Processing status of a transaction record
///
/// Only `Ok` records participate in reconciliation; every other status means
/// the gateway did not move funds for that record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// The gateway accepted and completed the transaction
    Ok,

    /// Authentication with the gateway failed
    NotAuthed,

    /// The gateway rejected the transaction
    Rejected,

    /// The gateway reported an error
    Error,

    /// Still awaiting a gateway outcome
    Pending,

    /// The transaction was aborted before completion
    Abort,
}

/// One row from the record store
///
/// Records form a flat append-only log. `related_code` links a record to the
/// one it modifies or extends: authorisations point at the root purchase,
/// refunds point at an authorisation. The gateway correlation fields are
/// opaque to reconciliation and are carried through so an approved refund
/// can be executed against the gateway later.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Unique identifier of this record
    pub code: TransactionCode,

    /// Code of the record this one modifies/extends
    ///
    /// `None` for the root purchase.
    pub related_code: Option<TransactionCode>,

    /// What this record represents (purchase, authorise, refund, ...)
    pub kind: TransactionKind,

    /// Gateway outcome for this record
    pub status: TransactionStatus,

    /// Transaction amount with 2 decimal places (minor-unit) precision
    pub amount: Decimal,

    /// Payment identifier the root purchase was stored under
    ///
    /// Populated on the root; child records may leave it empty.
    pub payment_id: String,

    /// Gateway-side transaction identifier, carried through for refund execution
    pub gateway_tx_id: String,

    /// Gateway security key, carried through for refund execution
    pub security_key: String,

    /// Gateway authorisation code, carried through for refund execution
    pub auth_code: String,
}
