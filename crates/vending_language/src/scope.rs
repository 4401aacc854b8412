//! Nesting scopes.
//!
//! The root scope (the implicit top-level region) always exists at depth 0.
//! Each `{` opens a scope one level deeper; the stack never holds more
//! scopes than the depth limit allows.

/// One nesting level and its attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scope {
    /// Nesting level (0 for the root).
    pub depth: u32,
    /// Balance inherited from the parent when the scope opened.
    pub entry_balance: u32,
    /// Coins currently available.
    pub balance: u32,
    /// Purchases made directly in this scope.
    pub purchases: u32,
}

impl Scope {
    /// Creates the top-level scope.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            depth: 0,
            entry_balance: 0,
            balance: 0,
            purchases: 0,
        }
    }

    /// Creates a child of `parent`, inheriting depth and balance.
    ///
    /// The depth saturates at `u32::MAX`.
    #[must_use]
    pub const fn child_of(parent: &Self) -> Self {
        Self {
            depth: parent.depth.saturating_add(1),
            entry_balance: parent.balance,
            balance: parent.balance,
            purchases: 0,
        }
    }
}

/// Scopes preallocated up front; deeper limits grow the stack on demand.
const PREALLOCATED_SCOPES: u32 = 8;

/// Bounded stack of open scopes above the root.
#[derive(Clone, Debug)]
pub struct ScopeStack {
    root: Scope,
    nested: Vec<Scope>,
    max_depth: u32,
}

impl ScopeStack {
    /// Creates a stack holding only the root scope.
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self {
            root: Scope::root(),
            nested: Vec::with_capacity(max_depth.min(PREALLOCATED_SCOPES) as usize),
            max_depth,
        }
    }

    /// Returns the innermost open scope.
    #[must_use]
    pub fn current(&self) -> &Scope {
        self.nested.last().unwrap_or(&self.root)
    }

    /// Returns the innermost open scope mutably.
    pub fn current_mut(&mut self) -> &mut Scope {
        match self.nested.last_mut() {
            Some(scope) => scope,
            None => &mut self.root,
        }
    }

    /// Returns the top-level scope.
    #[must_use]
    pub const fn root(&self) -> &Scope {
        &self.root
    }

    /// Number of scopes open above the root.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.nested.len()
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.current().depth
    }

    /// Opens a child scope of the current one.
    ///
    /// # Errors
    ///
    /// Returns the depth the scope would have had when it exceeds the limit.
    pub fn open(&mut self) -> Result<&Scope, u32> {
        let child = Scope::child_of(self.current());
        if child.depth > self.max_depth {
            return Err(child.depth);
        }
        self.nested.push(child);
        Ok(self.current())
    }

    /// Closes the innermost scope, handing its balance to the parent.
    ///
    /// Returns the closed scope, or `None` if only the root is open.
    pub fn close(&mut self) -> Option<Scope> {
        let closed = self.nested.pop()?;
        self.current_mut().balance = closed.balance;
        Some(closed)
    }
}
