//! Refund allocation
//!
//! Decides how a requested refund amount is spread across the ledger's
//! authorisations. The walk is greedy and deterministic: authorisations are
//! visited in build order (the store's chronological order) and each one is
//! drained before the next is touched. Reproducing this exact order is a
//! compatibility requirement with previously reconciled ledgers, so no
//! other strategy (largest-remaining-first, proportional, ...) is offered.

use rust_decimal::Decimal;
use tracing::debug;

use crate::types::{Ledger, RefundInstruction, RefundOutcome};

/// Allocate a requested refund amount across a ledger's authorisations
///
/// Walks the authorisations in build order, emitting an instruction of
/// `min(node remaining, amount left to allocate)` for every node with a
/// positive remaining balance until the request is covered. Nodes with a
/// zero or negative remaining balance (fully refunded, or over-refunded on
/// inconsistent store data) are skipped entirely.
///
/// If the request exceeds the total refundable balance:
///
/// * `force == false` - the whole allocation is discarded and the numeric
///   shortfall is returned instead; allocation is all-or-nothing.
/// * `force == true` - the coverable instructions are returned as-is and
///   the remainder is silently left unallocated.
///
/// # Returns
///
/// * `None` - the ledger is the empty sentinel ("unavailable")
/// * `Some(RefundOutcome::Instructions(_))` - per-authorisation refunds
/// * `Some(RefundOutcome::Shortfall(_))` - the uncoverable remainder
pub fn allocate_refund(ledger: &Ledger, requested: Decimal, force: bool) -> Option<RefundOutcome> {
    let tree = ledger.tree()?;

    let mut instructions = Vec::new();
    let mut remaining_to_allocate = requested;

    for node in &tree.authorisations {
        if node.remaining <= Decimal::ZERO || remaining_to_allocate <= Decimal::ZERO {
            continue;
        }

        let amount = node.remaining.min(remaining_to_allocate);
        remaining_to_allocate -= amount;

        instructions.push(RefundInstruction {
            authorisation_code: node.authorisation.code.clone(),
            gateway_tx_id: node.authorisation.gateway_tx_id.clone(),
            security_key: node.authorisation.security_key.clone(),
            auth_code: node.authorisation.auth_code.clone(),
            amount,
        });
    }

    if remaining_to_allocate > Decimal::ZERO && !force {
        debug!(
            root = %tree.root.code,
            requested = %requested,
            shortfall = %remaining_to_allocate,
            "refund request exceeds refundable balance"
        );
        return Some(RefundOutcome::Shortfall(remaining_to_allocate));
    }

    Some(RefundOutcome::Instructions(instructions))
}
