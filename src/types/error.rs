//! Error types for the refund ledger
//!
//! This module defines all error kinds a ledger build or record load can
//! surface. Two outcomes that look like errors deliberately are not:
//! a missing root purchase is reported as the empty ledger sentinel, and a
//! refund shortfall is a value-typed allocation outcome. Everything here is
//! a hard failure for the operation that raised it.

use thiserror::Error;

/// Main error type for ledger reconstruction and record loading
///
/// Store read failures are fatal for the current build: no retry, no
/// partial ledger. Loader errors carry enough context (path, line) to
/// point at the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The record store could not be reached or a read failed
    #[error("record store failure: {message}")]
    StoreFailure {
        /// Description of the underlying store error
        message: String,
    },

    /// A checked decimal operation overflowed while accumulating totals
    #[error("arithmetic overflow in {operation} for record {code}")]
    ArithmeticOverflow {
        /// Accumulation step that overflowed
        operation: String,
        /// Record being folded in when the overflow occurred
        code: String,
    },

    /// Record file not found at the specified path
    #[error("file not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading a record file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A record row could not be parsed
    #[error("record parse error{}: {message}", line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A record row carried an unknown transaction kind
    #[error("invalid transaction kind '{kind}' for record {code}")]
    InvalidKind {
        /// The unrecognised kind string
        kind: String,
        /// Record the row was describing
        code: String,
    },

    /// A record row carried an unknown transaction status
    #[error("invalid transaction status '{status}' for record {code}")]
    InvalidStatus {
        /// The unrecognised status string
        status: String,
        /// Record the row was describing
        code: String,
    },

    /// A record row carried a malformed amount
    #[error("invalid amount '{amount}' for record {code}")]
    InvalidAmount {
        /// The malformed amount string
        amount: String,
        /// Record the row was describing
        code: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a StoreFailure error
    pub fn store_failure(message: impl Into<String>) -> Self {
        LedgerError::StoreFailure {
            message: message.into(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, code: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            code: code.to_string(),
        }
    }

    /// Create an InvalidKind error
    pub fn invalid_kind(kind: &str, code: &str) -> Self {
        LedgerError::InvalidKind {
            kind: kind.to_string(),
            code: code.to_string(),
        }
    }

    /// Create an InvalidStatus error
    pub fn invalid_status(status: &str, code: &str) -> Self {
        LedgerError::InvalidStatus {
            status: status.to_string(),
            code: code.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, code: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
            code: code.to_string(),
        }
    }
}
