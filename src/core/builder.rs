//! Ledger builder
//!
//! This module reconstructs the three-tier payment hierarchy (purchase →
//! authorisations → refunds) from the flat record log and accumulates the
//! aggregate totals along the way. The builder owns a scratch accumulator
//! per call and returns a frozen [`Ledger`]; partially built state is never
//! exposed.
//!
//! Depth is fixed: refunds are never searched for children of their own. A
//! record that references a refund is invisible to reconciliation.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::core::traits::RecordStore;
use crate::types::{
    AuthorisationNode, Ledger, LedgerError, LedgerTotals, PaymentTree, TransactionKind,
    TransactionStatus,
};

/// Multiplier for the carried policy ceiling (115% of the original amount)
const CAP_RATE: Decimal = Decimal::from_parts(115, 0, 0, false, 2);

/// Reconstructs payment ledgers from an injected record store
///
/// A builder borrows its store for the duration of the calls made against
/// it; each `build` performs fresh reads and returns an independent ledger.
/// There is no caching and no shared mutable state across builds.
pub struct LedgerBuilder<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> LedgerBuilder<'a, S> {
    /// Create a builder over the given record store
    pub fn new(store: &'a S) -> Self {
        LedgerBuilder { store }
    }

    /// Reconstruct the ledger for one payment identifier
    ///
    /// Fetches the root purchase, then all OK authorisations linked to it,
    /// then for each authorisation all OK refunds linked to that
    /// authorisation, folding amounts into the running totals as it goes.
    /// Children are kept in exactly the order the store returned them.
    ///
    /// # Returns
    ///
    /// * `Ok(Ledger::Empty)` - no purchase record matched the identifier
    /// * `Ok(Ledger::Built(_))` - the reconstructed hierarchy and totals
    /// * `Err(LedgerError)` - a store read failed or totals overflowed;
    ///   fatal for this build, nothing partial is returned
    pub fn build(&self, payment_id: &str) -> Result<Ledger, LedgerError> {
        let Some(root) = self.store.find_root_by_payment_id(payment_id)? else {
            debug!(payment_id, "no root purchase found");
            return Ok(Ledger::Empty);
        };

        let original_amount = root.amount;
        let cap_amount = original_amount
            .checked_mul(CAP_RATE)
            .ok_or_else(|| LedgerError::arithmetic_overflow("cap amount", &root.code))?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let mut totals = LedgerTotals {
            authorised: Decimal::ZERO,
            refunded: Decimal::ZERO,
            net: Decimal::ZERO,
            original_amount,
            cap_amount,
        };
        let mut authorisations = Vec::new();
        let mut inconsistent_nodes = 0;

        let authorisation_records =
            self.store
                .find_children(&root.code, TransactionKind::Authorise, TransactionStatus::Ok)?;

        for authorisation in authorisation_records {
            totals.authorised = totals
                .authorised
                .checked_add(authorisation.amount)
                .ok_or_else(|| {
                    LedgerError::arithmetic_overflow("authorised total", &authorisation.code)
                })?;
            totals.net = totals.net.checked_add(authorisation.amount).ok_or_else(|| {
                LedgerError::arithmetic_overflow("net total", &authorisation.code)
            })?;

            let mut node = AuthorisationNode {
                remaining: authorisation.amount,
                refunds: Vec::new(),
                authorisation,
            };

            let refund_records = self.store.find_children(
                &node.authorisation.code,
                TransactionKind::Refund,
                TransactionStatus::Ok,
            )?;

            for refund in refund_records {
                node.remaining = node
                    .remaining
                    .checked_sub(refund.amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("remaining", &refund.code))?;
                totals.refunded = totals.refunded.checked_add(refund.amount).ok_or_else(|| {
                    LedgerError::arithmetic_overflow("refunded total", &refund.code)
                })?;
                totals.net = totals
                    .net
                    .checked_sub(refund.amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("net total", &refund.code))?;
                node.refunds.push(refund);
            }

            // Over-refunded nodes are store inconsistencies: kept in the
            // ledger, skipped by allocation, surfaced only as a count.
            if node.remaining < Decimal::ZERO {
                warn!(
                    authorisation = %node.authorisation.code,
                    remaining = %node.remaining,
                    "authorisation refunded beyond its amount"
                );
                inconsistent_nodes += 1;
            }

            authorisations.push(node);
        }

        debug!(
            payment_id,
            root = %root.code,
            authorisations = authorisations.len(),
            authorised = %totals.authorised,
            refunded = %totals.refunded,
            net = %totals.net,
            "ledger built"
        );

        Ok(Ledger::Built(PaymentTree {
            root,
            authorisations,
            totals,
            inconsistent_nodes,
        }))
    }
}
