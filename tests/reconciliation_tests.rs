//! End-to-end reconciliation tests
//!
//! These tests drive the complete pipeline: a CSV record file is loaded
//! into the in-memory store, a ledger is built for a payment identifier,
//! and refund allocations are requested against it. They pin down the
//! externally observable behaviour:
//!
//! - Aggregate totals and their net invariant
//! - Allocation ordering, exact coverage, shortfall, and force semantics
//! - The empty-ledger sentinel for unknown payment identifiers
//! - Build idempotence on an unchanged store

use refund_ledger::{
    allocate_refund, load_store, Ledger, LedgerBuilder, MemoryRecordStore, RefundOutcome,
};
use rstest::rstest;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str =
    "code,related_code,kind,status,amount,payment_id,gateway_tx_id,security_key,auth_code\n";

/// The worked reconciliation scenario: a 100.00 purchase, authorisations
/// A1=60.00 then A2=40.00, one 20.00 refund against A1, plus non-OK noise
/// records that must not participate.
const EXAMPLE_ROWS: &str = "\
p1,,PURCHASE,OK,100.00,pay-1,vps-p1,key-p1,auth-p1
a1,p1,AUTHORISE,OK,60.00,,vps-a1,key-a1,auth-a1
a2,p1,AUTHORISE,OK,40.00,,vps-a2,key-a2,auth-a2
a3,p1,AUTHORISE,REJECTED,40.00,,vps-a3,key-a3,auth-a3
r1,a1,REFUND,OK,20.00,,vps-r1,key-r1,auth-r1
r2,a2,REFUND,PENDING,40.00,,vps-r2,key-r2,auth-r2
";

fn write_fixture(rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(HEADER.as_bytes()).unwrap();
    file.write_all(rows.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn example_store() -> MemoryRecordStore {
    let fixture = write_fixture(EXAMPLE_ROWS);
    load_store(fixture.path()).expect("fixture should load")
}

fn example_ledger() -> Ledger {
    let store = example_store();
    LedgerBuilder::new(&store)
        .build("pay-1")
        .expect("build should succeed")
}

fn amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn instruction_summary(outcome: &RefundOutcome) -> Vec<(String, Decimal)> {
    outcome
        .instructions()
        .expect("expected instructions")
        .iter()
        .map(|i| (i.authorisation_code.clone(), i.amount))
        .collect()
}

#[test]
fn totals_match_the_worked_example() {
    let ledger = example_ledger();

    assert_eq!(ledger.authorised_total(), Some(amount(10000)));
    assert_eq!(ledger.refunded_total(), Some(amount(2000)));
    assert_eq!(ledger.net_total(), Some(amount(8000)));
    assert_eq!(ledger.original_amount(), Some(amount(10000)));
    assert_eq!(ledger.cap_amount(), Some(amount(11500)));
    assert_eq!(ledger.root_code(), Some("p1"));
}

#[test]
fn net_invariant_holds_on_built_ledger() {
    let ledger = example_ledger();
    let tree = ledger.tree().unwrap();

    assert_eq!(tree.totals.net, tree.totals.authorised - tree.totals.refunded);
    for node in &tree.authorisations {
        let refunded: Decimal = node.refunds.iter().map(|r| r.amount).sum();
        assert_eq!(node.remaining, node.authorisation.amount - refunded);
    }
}

#[test]
fn allocation_covers_fifty_across_both_authorisations() {
    let ledger = example_ledger();
    let outcome = allocate_refund(&ledger, amount(5000), false).unwrap();

    assert_eq!(
        instruction_summary(&outcome),
        vec![("a1".to_string(), amount(4000)), ("a2".to_string(), amount(1000))]
    );
}

#[test]
fn allocation_past_refundable_balance_reports_shortfall() {
    let ledger = example_ledger();
    // Refundable remaining is 40.00 + 40.00 = 80.00.
    let outcome = allocate_refund(&ledger, amount(9000), false).unwrap();

    assert_eq!(outcome, RefundOutcome::Shortfall(amount(1000)));
}

#[test]
fn forced_allocation_returns_coverable_part_only() {
    let ledger = example_ledger();
    let outcome = allocate_refund(&ledger, amount(9000), true).unwrap();

    assert_eq!(
        instruction_summary(&outcome),
        vec![("a1".to_string(), amount(4000)), ("a2".to_string(), amount(4000))]
    );
}

#[rstest]
#[case::zero(0)]
#[case::single_node(2500)]
#[case::spans_nodes(6000)]
#[case::exact_balance(8000)]
fn covered_allocations_sum_exactly_to_request(#[case] cents: i64) {
    let ledger = example_ledger();
    let outcome = allocate_refund(&ledger, amount(cents), false).unwrap();

    let total: Decimal = outcome
        .instructions()
        .expect("request within balance must yield instructions")
        .iter()
        .map(|i| i.amount)
        .sum();
    assert_eq!(total, amount(cents));
}

#[test]
fn instructions_carry_the_authorisation_gateway_fields() {
    let ledger = example_ledger();
    let outcome = allocate_refund(&ledger, amount(5000), false).unwrap();
    let instructions = outcome.instructions().unwrap();

    assert_eq!(instructions[0].gateway_tx_id, "vps-a1");
    assert_eq!(instructions[0].security_key, "key-a1");
    assert_eq!(instructions[0].auth_code, "auth-a1");
    assert_eq!(instructions[1].gateway_tx_id, "vps-a2");
}

#[test]
fn unknown_payment_is_unavailable_everywhere() {
    let store = example_store();
    let ledger = LedgerBuilder::new(&store).build("pay-missing").unwrap();

    assert!(ledger.is_empty());
    assert_eq!(ledger.authorised_total(), None);
    assert_eq!(ledger.refunded_total(), None);
    assert_eq!(ledger.net_total(), None);
    assert_eq!(allocate_refund(&ledger, amount(1000), false), None);
    assert_eq!(allocate_refund(&ledger, amount(1000), true), None);
}

#[test]
fn rebuilding_from_unchanged_store_is_idempotent() {
    let store = example_store();
    let builder = LedgerBuilder::new(&store);

    let first = builder.build("pay-1").unwrap();
    let second = builder.build("pay-1").unwrap();

    assert_eq!(first, second);
    let first_codes: Vec<_> = first
        .tree()
        .unwrap()
        .authorisations
        .iter()
        .map(|n| n.authorisation.code.clone())
        .collect();
    let second_codes: Vec<_> = second
        .tree()
        .unwrap()
        .authorisations
        .iter()
        .map(|n| n.authorisation.code.clone())
        .collect();
    assert_eq!(first_codes, second_codes);
}

#[test]
fn fully_refunded_payment_allocates_nothing() {
    let rows = "\
p1,,PURCHASE,OK,100.00,pay-1,,,
a1,p1,AUTHORISE,OK,100.00,,vps-a1,key-a1,auth-a1
r1,a1,REFUND,OK,60.00,,,,
r2,a1,REFUND,OK,40.00,,,,
";
    let fixture = write_fixture(rows);
    let store = load_store(fixture.path()).unwrap();
    let ledger = LedgerBuilder::new(&store).build("pay-1").unwrap();

    assert_eq!(ledger.net_total(), Some(Decimal::ZERO));

    // Any positive request is pure shortfall; zero stays an empty list.
    let outcome = allocate_refund(&ledger, amount(1), false).unwrap();
    assert_eq!(outcome, RefundOutcome::Shortfall(amount(1)));
    let outcome = allocate_refund(&ledger, Decimal::ZERO, false).unwrap();
    assert_eq!(outcome, RefundOutcome::Instructions(vec![]));
}

#[test]
fn over_refunded_store_is_tolerated_end_to_end() {
    let rows = "\
p1,,PURCHASE,OK,100.00,pay-1,,,
a1,p1,AUTHORISE,OK,60.00,,vps-a1,key-a1,auth-a1
a2,p1,AUTHORISE,OK,40.00,,vps-a2,key-a2,auth-a2
r1,a1,REFUND,OK,75.00,,,,
";
    let fixture = write_fixture(rows);
    let store = load_store(fixture.path()).unwrap();
    let ledger = LedgerBuilder::new(&store).build("pay-1").unwrap();

    assert_eq!(ledger.inconsistent_nodes(), Some(1));

    // The over-refunded a1 is skipped; only a2 is refundable.
    let outcome = allocate_refund(&ledger, amount(4000), false).unwrap();
    assert_eq!(instruction_summary(&outcome), vec![("a2".to_string(), amount(4000))]);

    let outcome = allocate_refund(&ledger, amount(4100), false).unwrap();
    assert_eq!(outcome, RefundOutcome::Shortfall(amount(100)));
}
