//! Parser configuration.

/// Default limit on nested expressions and subqueries.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs controlling how strictly the parser accepts its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth of expressions and subqueries. Deeper input
    /// is rejected with a parse error instead of exhausting the stack.
    pub max_depth: usize,
    /// Accept `JOIN t` without `ON` when another join follows directly,
    /// using `TRUE` as the join condition.
    pub allow_join_without_on: bool,
}

impl ParserOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_join_without_on: true,
        }
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables or disables the JOIN-without-ON relaxation.
    #[must_use]
    pub const fn allow_join_without_on(mut self, allow: bool) -> Self {
        self.allow_join_without_on = allow;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}
