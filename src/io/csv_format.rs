//! CSV format handling for transaction record files
//!
//! This module centralizes the CSV format concerns:
//! - CsvRow structure for deserialization
//! - Conversion from CSV rows to the domain record type
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{LedgerError, TransactionKind, TransactionRecord, TransactionStatus};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// CSV row structure for deserialization
///
/// Matches record files with columns: code, related_code, kind, status,
/// amount, payment_id, gateway_tx_id, security_key, auth_code. The
/// `related_code` column is empty for the root purchase; the payment and
/// gateway columns may be empty on rows where they do not apply.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRow {
    pub code: String,
    pub related_code: Option<String>,
    pub kind: String,
    pub status: String,
    pub amount: String,
    pub payment_id: Option<String>,
    pub gateway_tx_id: Option<String>,
    pub security_key: Option<String>,
    pub auth_code: Option<String>,
}

/// Convert a CsvRow to a TransactionRecord
///
/// This function:
/// - Parses the kind and status strings case-insensitively
/// - Parses the amount string into a Decimal
/// - Treats an empty `related_code` as absent (root purchase)
///
/// # Returns
///
/// * `Ok(TransactionRecord)` - successfully converted row
/// * `Err(LedgerError)` - which field was invalid and for which record
pub fn convert_csv_row(row: CsvRow) -> Result<TransactionRecord, LedgerError> {
    let kind = match row.kind.to_uppercase().as_str() {
        "PURCHASE" => TransactionKind::Purchase,
        "AUTHORISE" => TransactionKind::Authorise,
        "REFUND" => TransactionKind::Refund,
        "VOID" => TransactionKind::Void,
        "ABORT" => TransactionKind::Abort,
        _ => return Err(LedgerError::invalid_kind(&row.kind, &row.code)),
    };

    let status = match row.status.to_uppercase().as_str() {
        "OK" => TransactionStatus::Ok,
        "NOTAUTHED" => TransactionStatus::NotAuthed,
        "REJECTED" => TransactionStatus::Rejected,
        "ERROR" => TransactionStatus::Error,
        "PENDING" => TransactionStatus::Pending,
        "ABORT" => TransactionStatus::Abort,
        _ => return Err(LedgerError::invalid_status(&row.status, &row.code)),
    };

    let amount = Decimal::from_str(row.amount.trim())
        .map_err(|_| LedgerError::invalid_amount(&row.amount, &row.code))?;

    let related_code = row.related_code.filter(|code| !code.trim().is_empty());

    Ok(TransactionRecord {
        code: row.code,
        related_code,
        kind,
        status,
        amount,
        payment_id: row.payment_id.unwrap_or_default(),
        gateway_tx_id: row.gateway_tx_id.unwrap_or_default(),
        security_key: row.security_key.unwrap_or_default(),
        auth_code: row.auth_code.unwrap_or_default(),
    })
}
