//! Property tests over generated machine strings

use proptest::prelude::*;
use vending_language::{Evaluator, EvaluatorConfig, Symbol, Verdict, ViolationKind, validate};

/// Strategy for well-nested strings: coins, returns and purchases inside
/// balanced scopes of bounded depth.
fn nested_program(depth: u32) -> BoxedStrategy<String> {
    let leaf = prop::collection::vec(prop_oneof![Just("$"), Just("<"), Just("R")], 0..8)
        .prop_map(|items| items.concat());
    if depth == 0 {
        return leaf.boxed();
    }
    prop::collection::vec(
        prop_oneof![
            3 => leaf,
            1 => nested_program(depth - 1).prop_map(|inner| format!("{{{inner}}}")),
        ],
        0..4,
    )
    .prop_map(|parts| parts.concat())
    .boxed()
}

proptest! {
    #[test]
    fn depth_violations_only_beyond_three(input in nested_program(5)) {
        let mut max_depth = 0u32;
        let mut depth = 0u32;
        for c in input.chars() {
            match c {
                '{' => { depth += 1; max_depth = max_depth.max(depth); }
                '}' => depth -= 1,
                _ => {}
            }
        }

        let verdict = validate(&input);
        let depth_exceeded = matches!(
            verdict.violation().map(|v| &v.kind),
            Some(ViolationKind::DepthExceeded { .. })
        );
        if max_depth <= 3 {
            prop_assert!(!depth_exceeded);
        }
        // Nesting is balanced, so these never occur.
        let unbalanced = matches!(
            verdict.violation().map(|v| &v.kind),
            Some(ViolationKind::UnmatchedClose | ViolationKind::UnclosedScope { .. })
        );
        prop_assert!(!unbalanced);
    }

    #[test]
    fn accepted_balance_matches_symbol_counts(input in nested_program(3)) {
        if let Verdict::Accepted { balance, .. } = validate(&input) {
            let count = |c: char| i64::try_from(input.chars().filter(|&x| x == c).count()).unwrap();
            prop_assert_eq!(i64::from(balance), count('$') - count('<') - 3 * count('R'));
        }
    }

    #[test]
    fn strict_accepts_only_zero_balance(input in nested_program(3)) {
        let lenient = validate(&input);
        let strict = Evaluator::with_config(EvaluatorConfig::strict()).evaluate(&input).verdict;
        match &lenient {
            Verdict::Accepted { balance: 0, .. } => prop_assert!(strict.is_accepted()),
            Verdict::Accepted { balance, .. } => prop_assert_eq!(
                strict.violation().map(|v| v.kind.clone()),
                Some(ViolationKind::UnrefundedBalance { balance: *balance })
            ),
            Verdict::Rejected(_) => prop_assert_eq!(&strict, &lenient),
        }
    }

    #[test]
    fn rejection_index_points_at_offending_symbol(input in nested_program(4)) {
        let compact: Vec<char> = input.chars().collect();
        if let Verdict::Rejected(violation) = validate(&input) {
            if let Some(symbol) = violation.symbol() {
                prop_assert_eq!(Symbol::from_char(compact[violation.index]), Some(symbol));
            }
        }
    }
}
