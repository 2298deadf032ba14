//! # Quine-McCluskey Logic Minimizer
//!
//! This crate builds, evaluates and exactly minimizes boolean expression
//! trees using the Quine-McCluskey algorithm: prime implicant derivation,
//! a coverage table and essential-plus-greedy cover selection.
//!
//! ## Overview
//!
//! Expressions are trees of variables, constants and binary operators
//! (`and`, `or`, `xor`, `nand`, `nor`, `xnor`), with negation stored as a
//! flag on any node. The crate is useful for:
//!
//! - Exact simplification of boolean functions
//! - Truth table generation and inspection
//! - Teaching and verifying two-level logic minimization
//! - Canonicalizing expressions for comparison
//!
//! Everything is deterministic: the same expression always yields the same
//! truth table, the same prime implicants and the same minimized string.
//!
//! ## Three Ways to Build Expressions
//!
//! ### 1. Method calls and the `expr!` macro
//!
//! ```
//! use quine_logic::{expr, Node, Simplify};
//!
//! # fn main() -> Result<(), quine_logic::MinimizeError> {
//! let a = Node::variable("a");
//! let b = Node::variable("b");
//! let c = Node::variable("c");
//!
//! // The consensus term b*c never decides this function
//! let redundant = expr!(a * b + !a * c + b * c);
//! let minimized = redundant.simplify()?;
//!
//! assert_eq!(minimized.to_string(), "((not(a) and c) or (a and b))");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Operator overloading
//!
//! `*`, `+`, `^` and `!` are overloaded for both values and references:
//!
//! ```
//! use quine_logic::Node;
//!
//! let a = Node::variable("a");
//! let b = Node::variable("b");
//!
//! let xnor = &a * &b + !&a * !&b;
//! assert_eq!(xnor.to_string(), "((a and b) or (not(a) and not(b)))");
//!
//! let xor = &a ^ &b;
//! assert_eq!(xor.to_string(), "(a xor b)");
//! ```
//!
//! ### 3. Parsing text or JSON
//!
//! The parser accepts word operators (`and`, `or`, `not`, `xor`, `nand`,
//! `nor`, `xnor`) and their symbol aliases (`*`, `+`, `^`, `~`, `!`, ...):
//!
//! ```
//! use quine_logic::Tree;
//!
//! # fn main() -> Result<(), quine_logic::ParseError> {
//! let tree: Tree = "a and not b or c".parse()?;
//! assert_eq!(tree.to_string(), "((a and not(b)) or c)");
//! # Ok(())
//! # }
//! ```
//!
//! JSON documents use `variable` / `operator` / `constant` objects; see
//! [`Node::from_json`] for the schema.
//!
//! ## Truth Tables
//!
//! [`Tree::truth_table`] enumerates all assignments in binary counting
//! order over the variables as first seen in the expression:
//!
//! ```
//! use quine_logic::Tree;
//!
//! # fn main() -> Result<(), quine_logic::ParseError> {
//! let tree: Tree = "a xor b".parse()?;
//! let table = tree.truth_table();
//!
//! assert_eq!(table.minterms(), vec![1, 2]);
//! println!("{}", table); // classic | a | b | (a xor b) | layout
//! # Ok(())
//! # }
//! ```
//!
//! ## Minimization
//!
//! [`Simplify`] is implemented by [`Tree`] and [`Node`]. The default
//! output is sum-of-products; `simplify_pos` produces the dual
//! product-of-sums form. Tautologies and contradictions collapse to
//! constants:
//!
//! ```
//! use quine_logic::{Node, Simplify};
//!
//! # fn main() -> Result<(), quine_logic::MinimizeError> {
//! let a = Node::variable("a");
//! assert_eq!(a.and(&a.not()).simplify()?, Node::constant(false));
//! assert_eq!(a.or(&a.not()).simplify()?, Node::constant(true));
//! # Ok(())
//! # }
//! ```
//!
//! The phase functions [`prime_implicants`], [`select_cover`],
//! [`build_sum_of_products`] and [`build_product_of_sums`] are public for
//! callers that already work with minterm numbers.

// Public modules
pub mod expression;
pub mod minimize;
pub mod tree;
pub mod truth_table;

// Re-export high-level public API
pub use expression::{
    EvalError, Expression, Node, Operator, ParseError, SchemaError, Variable,
};
pub use minimize::{
    build_product_of_sums, build_sum_of_products, prime_implicants, select_cover, Implicant,
    MinimizeError, Simplify,
};
pub use tree::Tree;
pub use truth_table::TruthTable;

/// Compact expression-building macro, re-exported for use alongside [`Node`]
pub use quine_logic_macros::expr;

/// Configuration for the minimization algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizeConfig {
    /// Upper bound on distinct variables accepted for minimization
    ///
    /// Truth table enumeration is exponential in the variable count, so
    /// minimization refuses expressions above this bound with
    /// [`MinimizeError::TooManyVariables`] instead of allocating `2^k`
    /// rows.
    pub max_variables: usize,
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        MinimizeConfig { max_variables: 16 }
    }
}

impl MinimizeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_limit() {
        assert_eq!(MinimizeConfig::default().max_variables, 16);
        assert_eq!(MinimizeConfig::new(), MinimizeConfig::default());
    }

    #[test]
    fn test_macro_and_methods_agree() {
        let a = Node::variable("a");
        let b = Node::variable("b");

        assert_eq!(expr!(a * b), a.and(&b));
        assert_eq!(expr!(a + !b), a.or(&b.not()));
        assert_eq!(expr!("a" ^ "b"), a.xor(&b));
    }
}
