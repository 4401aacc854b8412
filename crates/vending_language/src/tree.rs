//! Decorated derivation trees.
//!
//! The tree is rebuilt from an [`Evaluation`]'s trace, so it covers exactly
//! the prefix the evaluator processed. The right-recursive `C → A C | ε` is
//! flattened: a block's children are its items in order.
//!
//! ```text
//! P[balance=0, valid=true, depth=0, purchases=0]
//! └── C[balance=0, valid=true, depth=0, purchases=0]
//!     ├── $ (balance=1)
//!     └── { C }[balance=0, valid=true, depth=1, purchases=0]
//!         └── < (balance=0)
//! ```

use vending_foundation::Symbol;

use crate::evaluator::Evaluation;
use crate::verdict::Verdict;

/// Index of a node within its [`DerivationTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a node derives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The start symbol `P`.
    Program,
    /// A block `C`: the top-level region or a braced `{ C }`.
    Block,
    /// A terminal operation (`$`, `R` or `<`).
    Terminal(Symbol),
}

/// One node with its attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// What this node derives.
    pub kind: NodeKind,
    /// Nesting depth.
    pub depth: u32,
    /// Balance inherited on entry (blocks only; 0 otherwise).
    pub entry_balance: u32,
    /// Exit balance for blocks and the program, post-operation balance for
    /// terminals.
    pub balance: u32,
    /// Purchases made directly in the enclosing scope.
    pub purchases: u32,
    /// False if this node or any descendant holds a violation.
    pub valid: bool,
    /// Violation message attached to this node.
    pub error: Option<String>,
    /// Child nodes, in input order.
    pub children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, depth: u32, balance: u32) -> Self {
        Self {
            kind,
            depth,
            entry_balance: balance,
            balance,
            purchases: 0,
            valid: true,
            error: None,
            children: Vec::new(),
        }
    }

    /// Returns true for `P` and `C` nodes.
    #[must_use]
    pub const fn is_nonterminal(&self) -> bool {
        !matches!(self.kind, NodeKind::Terminal(_))
    }

    /// Returns the grammar label of this node.
    #[must_use]
    pub fn label(&self) -> String {
        match self.kind {
            NodeKind::Program => "P".to_string(),
            NodeKind::Block if self.depth == 0 => "C".to_string(),
            NodeKind::Block => "{ C }".to_string(),
            NodeKind::Terminal(symbol) => symbol.to_string(),
        }
    }
}

/// Arena-backed derivation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationTree {
    nodes: Vec<Node>,
}

impl DerivationTree {
    const ROOT: NodeId = NodeId(0);
    const TOP_BLOCK: NodeId = NodeId(1);

    /// Builds the tree for an evaluation.
    ///
    /// The evaluation must have been recorded with tracing enabled; without
    /// steps the tree only holds `P` and the empty top-level block.
    #[must_use]
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        let mut tree = Self {
            nodes: vec![
                Node::new(NodeKind::Program, 0, 0),
                Node::new(NodeKind::Block, 0, 0),
            ],
        };
        tree.nodes[Self::ROOT.0].children.push(Self::TOP_BLOCK);

        let mut open = vec![Self::TOP_BLOCK];

        for step in evaluation.steps() {
            let current = open.last().copied().unwrap_or(Self::TOP_BLOCK);
            match step.symbol {
                Symbol::Open => {
                    let block = tree.push_child(
                        current,
                        Node::new(NodeKind::Block, step.depth, step.balance),
                    );
                    open.push(block);
                }
                Symbol::Close => {
                    if open.len() > 1 {
                        open.pop();
                    }
                    // Balance synthesized out of the closed block lands in the parent.
                    let parent = open.last().copied().unwrap_or(Self::TOP_BLOCK);
                    tree.nodes[current.0].balance = step.balance;
                    tree.nodes[parent.0].balance = step.balance;
                }
                Symbol::Coin | Symbol::Return | Symbol::Purchase => {
                    let mut leaf = Node::new(NodeKind::Terminal(step.symbol), step.depth, 0);
                    leaf.balance = step.balance;
                    leaf.purchases = step.purchases;
                    tree.push_child(current, leaf);

                    let block = &mut tree.nodes[current.0];
                    block.balance = step.balance;
                    block.purchases = step.purchases;
                }
            }
        }

        if let Verdict::Rejected(violation) = &evaluation.verdict {
            let innermost = open.last().copied().unwrap_or(Self::TOP_BLOCK);
            tree.nodes[innermost.0].error = Some(violation.to_string());
            for id in open.iter().chain(std::iter::once(&Self::ROOT)) {
                tree.nodes[id.0].valid = false;
            }
        }

        let top = &tree.nodes[Self::TOP_BLOCK.0];
        let (balance, purchases) = (top.balance, top.purchases);
        let root = &mut tree.nodes[Self::ROOT.0];
        root.balance = balance;
        root.purchases = purchases;

        tree
    }

    fn push_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Returns the `P` node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Returns a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the children of a node with their ids.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes[id.0]
            .children
            .iter()
            .map(|&child| (child, &self.nodes[child.0]))
    }

    /// Total number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least `P` and the top-level block.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if no node holds a violation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.node(self.root()).valid
    }
}
