//! Collaborator traits for record storage
//!
//! The record store is an external read dependency, injected per build. It
//! may be backed by a SQL table, a message log, or the in-memory store in
//! this crate; the builder only needs these two reads.

use crate::types::{LedgerError, TransactionKind, TransactionRecord, TransactionStatus};

/// Read access to the flat transaction record log
///
/// # Ordering contract
///
/// `find_children` must return records in a stable, chronologically
/// meaningful order (insertion order for the backing log). The ledger
/// builder does not re-sort what it receives, and the greedy refund
/// allocator walks authorisations in exactly this order, so the order an
/// implementation returns directly decides which authorisation a refund
/// lands on first.
///
/// Implementations are treated as stateless synchronous dependencies: a read
/// either returns records or fails with [`LedgerError::StoreFailure`], which
/// is fatal for the build in progress. Connection lifecycle, pooling, and
/// retries all live behind the implementation.
pub trait RecordStore {
    /// Find the single root purchase record stored under a payment identifier
    ///
    /// Returns `Ok(None)` when no record matches; the builder turns that
    /// into the empty-ledger sentinel rather than an error.
    fn find_root_by_payment_id(
        &self,
        payment_id: &str,
    ) -> Result<Option<TransactionRecord>, LedgerError>;

    /// Find all records of one kind and status linked to a parent record
    ///
    /// Used with `(Authorise, Ok)` against the root and `(Refund, Ok)`
    /// against each authorisation. Results follow the ordering contract
    /// above.
    fn find_children(
        &self,
        related_code: &str,
        kind: TransactionKind,
        status: TransactionStatus,
    ) -> Result<Vec<TransactionRecord>, LedgerError>;
}
