//! Ledger types for one reconstructed payment
//!
//! The ledger is a fixed three-tier hierarchy: one root purchase, its
//! authorisations, and each authorisation's refunds. It is built once per
//! reconciliation request and immutable thereafter; a new request always
//! rebuilds it from the record store.

use rust_decimal::Decimal;

use super::transaction::TransactionRecord;

/// Aggregate totals accumulated while the ledger is built
///
/// Invariant: `net == authorised - refunded`, maintained incrementally as
/// records are folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerTotals {
    /// Sum of all OK authorisation amounts
    pub authorised: Decimal,

    /// Sum of all OK refund amounts across every authorisation
    pub refunded: Decimal,

    /// `authorised - refunded`
    pub net: Decimal,

    /// Amount of the root purchase
    pub original_amount: Decimal,

    /// Policy ceiling: `original_amount * 1.15`, rounded to 2 decimal places
    ///
    /// Carried for callers; nothing in this crate enforces it.
    pub cap_amount: Decimal,
}

/// One authorisation under the root purchase, with its refunds
///
/// Invariant: `remaining == authorisation.amount - sum(refunds amounts)`.
/// `remaining` goes negative only when the store holds over-refunded data;
/// such nodes are kept but skipped by allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorisationNode {
    /// The authorisation record itself
    pub authorisation: TransactionRecord,

    /// OK refund records against this authorisation, in store order
    pub refunds: Vec<TransactionRecord>,

    /// Refundable balance left on this authorisation
    pub remaining: Decimal,
}

impl AuthorisationNode {
    /// Look up one of this node's refunds by record code
    pub fn refund(&self, code: &str) -> Option<&TransactionRecord> {
        self.refunds.iter().find(|refund| refund.code == code)
    }
}

/// The reconstructed hierarchy and totals for one payment
///
/// Authorisations keep the exact order the record store returned them in.
/// That order is a documented contract (chronological per the store) and
/// directly determines refund-allocation tie-breaking, so it is never
/// re-sorted here.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentTree {
    /// The root purchase record
    pub root: TransactionRecord,

    /// Authorisation nodes in store (insertion) order
    pub authorisations: Vec<AuthorisationNode>,

    /// Running aggregates folded in during the build
    pub totals: LedgerTotals,

    /// Number of over-refunded authorisations tolerated during the build
    pub inconsistent_nodes: usize,
}

impl PaymentTree {
    /// Look up an authorisation node by record code
    pub fn authorisation(&self, code: &str) -> Option<&AuthorisationNode> {
        self.authorisations
            .iter()
            .find(|node| node.authorisation.code == code)
    }
}

/// Result of reconstructing a payment from the record store
///
/// `Empty` means no purchase record matched the payment identifier. It is
/// not an error: every query against it reports "unavailable" (`None`) so
/// callers can tell "no payment found" apart from "payment with zero
/// totals".
#[derive(Debug, Clone, PartialEq)]
pub enum Ledger {
    /// No root purchase found for the payment identifier
    Empty,

    /// Fully reconstructed payment hierarchy
    Built(PaymentTree),
}

impl Ledger {
    /// Whether this ledger is the no-payment sentinel
    pub fn is_empty(&self) -> bool {
        matches!(self, Ledger::Empty)
    }

    /// The reconstructed tree, if a payment was found
    pub fn tree(&self) -> Option<&PaymentTree> {
        match self {
            Ledger::Empty => None,
            Ledger::Built(tree) => Some(tree),
        }
    }

    /// Code of the root purchase record
    pub fn root_code(&self) -> Option<&str> {
        self.tree().map(|tree| tree.root.code.as_str())
    }

    /// Total of all OK authorisation amounts
    ///
    /// `None` when no payment was found (not a numeric zero).
    pub fn authorised_total(&self) -> Option<Decimal> {
        self.tree().map(|tree| tree.totals.authorised)
    }

    /// Total of all OK refund amounts
    ///
    /// `None` when no payment was found (not a numeric zero).
    pub fn refunded_total(&self) -> Option<Decimal> {
        self.tree().map(|tree| tree.totals.refunded)
    }

    /// Net total: authorised minus refunded
    ///
    /// `None` when no payment was found (not a numeric zero).
    pub fn net_total(&self) -> Option<Decimal> {
        self.tree().map(|tree| tree.totals.net)
    }

    /// Amount of the root purchase
    pub fn original_amount(&self) -> Option<Decimal> {
        self.tree().map(|tree| tree.totals.original_amount)
    }

    /// Policy ceiling carried on the totals (115% of the original amount)
    pub fn cap_amount(&self) -> Option<Decimal> {
        self.tree().map(|tree| tree.totals.cap_amount)
    }

    /// Diagnostic count of over-refunded authorisations
    pub fn inconsistent_nodes(&self) -> Option<usize> {
        self.tree().map(|tree| tree.inconsistent_nodes)
    }
}
