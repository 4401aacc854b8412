//! Integration tests for the tree formatter

use vending_language::Evaluator;
use vending_report::{TreeFormatter, TreeStyle, VerdictFormatter};

#[test]
fn visual_tree_for_nested_input() {
    let evaluation = Evaluator::new().evaluate("$$$ { R } $");
    let rendered = TreeFormatter::new(TreeStyle::Visual).render(&evaluation);
    let expected = "\
P[balance=1, valid=true, depth=0, purchases=0]
└── C[balance=1, valid=true, depth=0, purchases=0]
    ├── $ (balance=1)
    ├── $ (balance=2)
    ├── $ (balance=3)
    ├── { C }[balance=0, valid=true, depth=1, purchases=1]
    │   └── R (balance=0)
    └── $ (balance=1)
ACCEPTED balance=1 purchases=0";
    assert_eq!(rendered, expected);
}

#[test]
fn indented_tree_for_nested_input() {
    let evaluation = Evaluator::new().evaluate("{ $ }");
    let rendered = TreeFormatter::new(TreeStyle::Indented).render(&evaluation);
    let expected = "\
P (balance=1, valid=true, depth=0, purchases=0)
  C (balance=1, valid=true, depth=0, purchases=0)
    { C } (balance=1, valid=true, depth=1, purchases=0)
      $ (balance=1)
ACCEPTED balance=1 purchases=0";
    assert_eq!(rendered, expected);
}

#[test]
fn tree_shows_error_on_innermost_block() {
    let evaluation = Evaluator::new().evaluate("{ { < } }");
    let lines = TreeFormatter::default().lines(&evaluation);
    assert_eq!(
        lines[4],
        "            ! ERROR: insufficient balance for return: have 0, need 1 at index 2"
    );
    assert_eq!(lines.iter().filter(|l| l.contains("valid=false")).count(), 4);
}
