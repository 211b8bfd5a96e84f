//! Core business logic module
//!
//! This module contains the reconciliation components:
//! - `traits` - The `RecordStore` collaborator seam
//! - `builder` - Flat records to three-tier ledger reconstruction
//! - `allocator` - Greedy per-authorisation refund allocation
//! - `record_store` - Insertion-ordered in-memory store implementation

pub mod allocator;
pub mod builder;
pub mod record_store;
pub mod traits;

pub use allocator::allocate_refund;
pub use builder::LedgerBuilder;
pub use record_store::MemoryRecordStore;
pub use traits::RecordStore;
