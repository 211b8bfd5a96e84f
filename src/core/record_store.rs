//! In-memory record store
//!
//! This module provides the MemoryRecordStore, the reference implementation
//! of the [`RecordStore`] trait. It keeps records in insertion order, which
//! makes the trait's ordering contract hold whenever records are inserted
//! chronologically (as the CSV loader does, row by row).
//!
//! Production deployments put a database-backed implementation behind the
//! same trait; this one serves reconciliation tests and small embedded uses.

use crate::core::traits::RecordStore;
use crate::types::{LedgerError, TransactionKind, TransactionRecord, TransactionStatus};

/// Insertion-ordered in-memory store of transaction records
///
/// Reads scan the backing vector linearly. The record logs this crate works
/// with are per-payment and small (a handful of authorisations and refunds),
/// so scans are cheaper than maintaining secondary indexes.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    /// All records, in the order they were inserted
    records: Vec<TransactionRecord>,
}

impl MemoryRecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        MemoryRecordStore {
            records: Vec::new(),
        }
    }

    /// Append a record to the log
    ///
    /// Insertion order is significant: it is the order `find_children`
    /// returns matches in.
    pub fn insert(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    fn find_root_by_payment_id(
        &self,
        payment_id: &str,
    ) -> Result<Option<TransactionRecord>, LedgerError> {
        Ok(self
            .records
            .iter()
            .find(|record| {
                record.kind == TransactionKind::Purchase && record.payment_id == payment_id
            })
            .cloned())
    }

    fn find_children(
        &self,
        related_code: &str,
        kind: TransactionKind,
        status: TransactionStatus,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        Ok(self
            .records
            .iter()
            .filter(|record| {
                record.kind == kind
                    && record.status == status
                    && record.related_code.as_deref() == Some(related_code)
            })
            .cloned()
            .collect())
    }
}
