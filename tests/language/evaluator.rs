//! Integration tests for the evaluator
//!
//! Tests the attribute rules through the public `validate` and
//! `Evaluator::evaluate` entry points.

use vending_language::{
    Evaluator, EvaluatorConfig, Limits, RefundPolicy, Symbol, Verdict, Violation, ViolationKind,
    validate,
};

fn rejection(input: &str) -> Violation {
    match validate(input) {
        Verdict::Rejected(violation) => violation,
        Verdict::Accepted { .. } => panic!("expected {input:?} to be rejected"),
    }
}

// =============================================================================
// Accepted Inputs
// =============================================================================

#[test]
fn empty_string_accepted() {
    assert_eq!(
        validate(""),
        Verdict::Accepted {
            balance: 0,
            purchases: 0
        }
    );
}

#[test]
fn exact_purchase_accepted() {
    assert_eq!(
        validate("$$$R"),
        Verdict::Accepted {
            balance: 0,
            purchases: 1
        }
    );
}

#[test]
fn nested_purchase_uses_outer_coins() {
    assert_eq!(
        validate("{$$$R}"),
        Verdict::Accepted {
            balance: 0,
            purchases: 0
        }
    );
    assert!(validate("$$$ { R }").is_accepted());
    assert!(validate("$$$ { { { R } } }").is_accepted());
}

#[test]
fn nested_quota_is_separate_from_outer() {
    // Three purchases outside, three inside.
    let outer = "$$$R".repeat(3);
    let inner = format!("{{{}}}", "$$$R".repeat(3));
    assert!(validate(&format!("{outer}{inner}")).is_accepted());
    assert!(validate(&format!("{inner}{outer}")).is_accepted());
}

#[test]
fn leftover_balance_is_reported() {
    assert_eq!(validate("$$<$").balance(), Some(2));
    assert_eq!(validate("{$$}").balance(), Some(2));
}

// =============================================================================
// Rejected Inputs
// =============================================================================

#[test]
fn insufficient_balance_for_purchase() {
    let violation = rejection("$$R");
    assert_eq!(violation.index, 2);
    assert_eq!(
        violation.kind,
        ViolationKind::InsufficientBalance {
            symbol: Symbol::Purchase,
            balance: 2,
            required: 3
        }
    );
}

#[test]
fn insufficient_balance_for_return() {
    let violation = rejection("$<<");
    assert_eq!(violation.index, 2);
    assert_eq!(violation.symbol(), Some(Symbol::Return));
}

#[test]
fn fourth_open_exceeds_depth() {
    let violation = rejection("{{{{}}}}");
    assert_eq!(violation.index, 3);
    assert_eq!(
        violation.kind,
        ViolationKind::DepthExceeded { depth: 4, limit: 3 }
    );
    assert!(validate("{{{}}}").is_accepted());
}

#[test]
fn fourth_purchase_exceeds_quota() {
    let violation = rejection("$$$R$$$R$$$R$$$R");
    assert_eq!(violation.index, 15);
    assert_eq!(
        violation.kind,
        ViolationKind::PurchaseQuotaExceeded { quota: 3 }
    );
}

#[test]
fn quota_reported_before_balance() {
    // No coins left for the fourth R; the quota still wins.
    let violation = rejection("$$$R$$$R$$$RR");
    assert_eq!(violation.index, 12);
    assert!(matches!(
        violation.kind,
        ViolationKind::PurchaseQuotaExceeded { .. }
    ));
}

#[test]
fn unmatched_close() {
    let violation = rejection("}");
    assert_eq!(violation.index, 0);
    assert_eq!(violation.kind, ViolationKind::UnmatchedClose);

    assert_eq!(rejection("{}}").index, 2);
}

#[test]
fn unclosed_scope() {
    let violation = rejection("{");
    assert_eq!(violation.index, 1);
    assert_eq!(violation.kind, ViolationKind::UnclosedScope { open: 1 });

    assert_eq!(
        rejection("{{$").kind,
        ViolationKind::UnclosedScope { open: 2 }
    );
}

#[test]
fn unknown_symbol_index_counts_whitespace() {
    let violation = rejection("$ $ x");
    assert_eq!(violation.index, 4);
    assert_eq!(violation.kind, ViolationKind::UnknownSymbol { found: 'x' });
}

#[test]
fn symbol_indices_ignore_whitespace() {
    assert_eq!(rejection("$ $   R").index, 2);
    assert_eq!(rejection("  }").index, 0);
}

#[test]
fn first_violation_stops_evaluation() {
    // The return fails before the unknown symbol or unclosed scope is seen.
    let violation = rejection("{ < x");
    assert_eq!(violation.index, 1);
    assert!(matches!(
        violation.kind,
        ViolationKind::InsufficientBalance { .. }
    ));
}

#[test]
fn nested_scope_cannot_overspend() {
    let violation = rejection("$$ { $ R R } ");
    assert_eq!(violation.index, 5);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn strict_refund_policy() {
    let strict = Evaluator::with_config(EvaluatorConfig::strict());

    assert!(strict.evaluate("$$$R").is_accepted());
    assert!(strict.evaluate("$<").is_accepted());

    let evaluation = strict.evaluate("$$ { $ }");
    let violation = evaluation.verdict.violation().cloned().unwrap();
    assert_eq!(violation.kind, ViolationKind::UnrefundedBalance { balance: 3 });
    assert_eq!(violation.index, 5);
}

#[test]
fn lenient_is_the_default_policy() {
    assert_eq!(
        Evaluator::new().config().refund_policy,
        RefundPolicy::Lenient
    );
}

#[test]
fn custom_limits() {
    let config = EvaluatorConfig::default().with_limits(
        Limits::new()
            .with_max_depth(1)
            .with_purchase_cost(1)
            .with_purchase_quota(1),
    );
    let evaluator = Evaluator::with_config(config);

    assert!(evaluator.evaluate("$R").is_accepted());
    assert!(!evaluator.evaluate("$R$R").is_accepted());
    assert!(!evaluator.evaluate("{{}}").is_accepted());
    assert!(evaluator.evaluate("{$R}$R").is_accepted());
}

#[test]
fn unbounded_depth_limit() {
    let config =
        EvaluatorConfig::default().with_limits(Limits::new().with_max_depth(u32::MAX));
    let evaluator = Evaluator::with_config(config);

    assert!(evaluator.evaluate("{}").is_accepted());
    let deep = format!("{}{}", "{".repeat(64), "}".repeat(64));
    assert!(evaluator.evaluate(&deep).is_accepted());
}

// =============================================================================
// Trace
// =============================================================================

#[test]
fn trace_records_each_symbol() {
    let evaluation = Evaluator::new().evaluate("$$$$ { R } <");
    assert!(evaluation.is_accepted());

    let steps = evaluation.steps();
    assert_eq!(steps.len(), 8);
    assert!(steps.iter().enumerate().all(|(i, s)| s.index == i));

    assert_eq!(steps[4].symbol, Symbol::Open);
    assert_eq!(steps[4].depth, 1);
    assert_eq!(steps[4].balance, 4);

    assert_eq!(steps[5].symbol, Symbol::Purchase);
    assert_eq!(steps[5].balance, 1);
    assert_eq!(steps[5].purchases, 1);

    assert_eq!(steps[6].symbol, Symbol::Close);
    assert_eq!(steps[6].depth, 0);
    assert_eq!(steps[6].balance, 1);
    assert_eq!(steps[6].purchases, 0);

    assert_eq!(steps[7].balance, 0);
}

#[test]
fn validate_is_idempotent() {
    for input in ["", "$$$R", "{{{{}}}}", "$ x", "{"] {
        assert_eq!(validate(input), validate(input));
    }
}

#[test]
fn evaluator_is_shareable_across_threads() {
    let evaluator = &Evaluator::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = ["$$$R", "$$R", "{$$$R}", "}"]
            .into_iter()
            .map(|input| s.spawn(move || evaluator.evaluate(input).is_accepted()))
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, false, true, false]);
    });
}
