//! Derivation tree rendering.

use vending_language::{DerivationTree, Evaluation, Node, NodeId};

use crate::format::{VerdictFormatter, summary_line};

/// Layout used for the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TreeStyle {
    /// Box-drawing connectors.
    #[default]
    Visual,
    /// Two spaces of indentation per level.
    Indented,
}

/// Renders the decorated derivation tree followed by the outcome line.
#[derive(Clone, Debug, Default)]
pub struct TreeFormatter {
    /// Layout to use.
    pub style: TreeStyle,
}

impl TreeFormatter {
    /// Creates a tree formatter with the given style.
    #[must_use]
    pub const fn new(style: TreeStyle) -> Self {
        Self { style }
    }

    fn attributes(node: &Node) -> String {
        format!(
            "balance={}, valid={}, depth={}, purchases={}",
            node.balance, node.valid, node.depth, node.purchases
        )
    }

    fn visual(tree: &DerivationTree, id: NodeId, prefix: &str, last: bool, out: &mut Vec<String>) {
        let node = tree.node(id);
        let is_root = id == tree.root();
        let connector = match (is_root, last) {
            (true, _) => "",
            (false, true) => "└── ",
            (false, false) => "├── ",
        };

        if node.is_nonterminal() {
            out.push(format!(
                "{prefix}{connector}{}[{}]",
                node.label(),
                Self::attributes(node)
            ));
        } else {
            out.push(format!(
                "{prefix}{connector}{} (balance={})",
                node.label(),
                node.balance
            ));
        }

        let child_prefix = match (is_root, last) {
            (true, _) => String::new(),
            (false, true) => format!("{prefix}    "),
            (false, false) => format!("{prefix}│   "),
        };

        if let Some(error) = &node.error {
            out.push(format!("{child_prefix}! ERROR: {error}"));
        }

        let count = node.children.len();
        for (i, (child, _)) in tree.children(id).enumerate() {
            Self::visual(tree, child, &child_prefix, i + 1 == count, out);
        }
    }

    fn indented(tree: &DerivationTree, id: NodeId, level: usize, out: &mut Vec<String>) {
        let node = tree.node(id);
        let indent = "  ".repeat(level);

        if node.is_nonterminal() {
            out.push(format!(
                "{indent}{} ({})",
                node.label(),
                Self::attributes(node)
            ));
        } else {
            out.push(format!("{indent}{} (balance={})", node.label(), node.balance));
        }

        if let Some(error) = &node.error {
            out.push(format!("{indent}  ! ERROR: {error}"));
        }

        for (child, _) in tree.children(id) {
            Self::indented(tree, child, level + 1, out);
        }
    }
}

impl VerdictFormatter for TreeFormatter {
    fn lines(&self, evaluation: &Evaluation) -> Vec<String> {
        let tree = DerivationTree::from_evaluation(evaluation);
        let mut out = Vec::with_capacity(tree.len() + 1);

        match self.style {
            TreeStyle::Visual => Self::visual(&tree, tree.root(), "", true, &mut out),
            TreeStyle::Indented => Self::indented(&tree, tree.root(), 0, &mut out),
        }

        out.push(summary_line(&evaluation.verdict));
        out
    }
}
