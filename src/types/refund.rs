//! Refund allocation output types
//!
//! These are pure value objects handed back to the embedding system, which
//! is responsible for executing them against the payment gateway and writing
//! the resulting refund records back to the store.

use rust_decimal::Decimal;
use serde::Serialize;

use super::transaction::TransactionCode;

/// One concrete refund to execute against a single authorisation
///
/// The gateway correlation fields are copied verbatim from the target
/// authorisation record; a gateway refund call must reference all three.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefundInstruction {
    /// Code of the authorisation this refund targets
    pub authorisation_code: TransactionCode,

    /// Gateway-side transaction identifier of the authorisation
    pub gateway_tx_id: String,

    /// Gateway security key of the authorisation
    pub security_key: String,

    /// Gateway authorisation code of the authorisation
    pub auth_code: String,

    /// Amount to refund against this authorisation (always positive)
    pub amount: Decimal,
}

/// Outcome of a refund allocation against a built ledger
#[derive(Debug, Clone, PartialEq)]
pub enum RefundOutcome {
    /// The requested amount was fully covered; execute these in order
    ///
    /// Under `force`, the instructions may sum to less than the requested
    /// amount; the uncovered remainder is dropped without a trace, matching
    /// the historical allocation behaviour.
    Instructions(Vec<RefundInstruction>),

    /// The requested amount exceeds the refundable balance by this much
    ///
    /// No instructions are returned in this case; allocation is
    /// all-or-nothing unless forced.
    Shortfall(Decimal),
}

impl RefundOutcome {
    /// The instructions, if the allocation succeeded
    pub fn instructions(&self) -> Option<&[RefundInstruction]> {
        match self {
            RefundOutcome::Instructions(instructions) => Some(instructions),
            RefundOutcome::Shortfall(_) => None,
        }
    }

    /// The shortfall amount, if the allocation could not be covered
    pub fn shortfall(&self) -> Option<Decimal> {
        match self {
            RefundOutcome::Instructions(_) => None,
            RefundOutcome::Shortfall(amount) => Some(*amount),
        }
    }
}
