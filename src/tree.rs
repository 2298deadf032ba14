//! The top-level tree wrapping an expression with its variable order

use crate::expression::{EvalError, Node, ParseError, SchemaError};
use crate::minimize::{
    build_product_of_sums, build_sum_of_products, prime_implicants, select_cover, MinimizeError,
    Simplify,
};
use crate::truth_table::TruthTable;
use crate::MinimizeConfig;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// An expression tree paired with its canonical variable order
///
/// The order is fixed at construction: a depth-first left-to-right walk of
/// the expression, keeping each variable at its first appearance. All truth
/// table rows, minterm numbers and minimized literal orders derive from it,
/// which makes every operation on a given tree deterministic.
///
/// ```
/// use quine_logic::{Simplify, Tree};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tree: Tree = "a and b or a and b and c".parse()?;
/// assert_eq!(tree.simplify()?.to_string(), "(a and b)");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
    variables: Vec<Arc<str>>,
}

impl Tree {
    /// Wrap an expression, collecting its variables in first-seen order
    pub fn new(root: Node) -> Tree {
        let variables = root.collect_variables();
        Tree { root, variables }
    }

    /// Parse an expression from its text form
    ///
    /// See [`Node::parse`] for the accepted syntax.
    pub fn parse(input: &str) -> Result<Tree, ParseError> {
        Node::parse(input).map(Tree::new)
    }

    /// Build a tree from a JSON document
    ///
    /// See [`Node::from_json`] for the accepted shape.
    pub fn from_json(value: &Value) -> Result<Tree, SchemaError> {
        Node::from_json(value).map(Tree::new)
    }

    /// Build a tree from a JSON document string
    pub fn from_json_str(text: &str) -> Result<Tree, SchemaError> {
        Node::from_json_str(text).map(Tree::new)
    }

    /// The wrapped expression
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Unwrap the expression, discarding the variable order
    pub fn into_root(self) -> Node {
        self.root
    }

    /// The canonical variable order
    ///
    /// ```
    /// use quine_logic::Tree;
    /// use std::sync::Arc;
    ///
    /// let tree: Tree = "b or not(a) and b".parse()?;
    /// assert_eq!(tree.variables(), [Arc::from("b"), Arc::from("a")]);
    /// # Ok::<(), quine_logic::ParseError>(())
    /// ```
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Evaluate the tree under the given assignment
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> Result<bool, EvalError> {
        self.root.evaluate(assignment)
    }

    /// Enumerate all `2^k` assignments into a truth table
    ///
    /// Row indices follow the canonical variable order with the first
    /// variable as the most significant bit.
    pub fn truth_table(&self) -> TruthTable {
        TruthTable::from_node(&self.root, self.variables.clone())
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Tree {
        Tree::new(root)
    }
}

impl FromStr for Tree {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Tree, ParseError> {
        Tree::parse(input)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

impl Simplify for Tree {
    fn simplify_with_config(&self, config: &MinimizeConfig) -> Result<Tree, MinimizeError> {
        let width = self.variables.len();
        if width > config.max_variables {
            return Err(MinimizeError::TooManyVariables {
                count: width,
                limit: config.max_variables,
            });
        }

        let minterms = self.truth_table().minterms();
        let primes = prime_implicants(width, &minterms);
        let cover = select_cover(&primes, &minterms);
        Ok(Tree::new(build_sum_of_products(&cover, &self.variables)))
    }

    fn simplify_pos_with_config(&self, config: &MinimizeConfig) -> Result<Tree, MinimizeError> {
        let width = self.variables.len();
        if width > config.max_variables {
            return Err(MinimizeError::TooManyVariables {
                count: width,
                limit: config.max_variables,
            });
        }

        // Minimize the complement, then read the cover back as sums.
        let maxterms = self.truth_table().maxterms();
        let primes = prime_implicants(width, &maxterms);
        let cover = select_cover(&primes, &maxterms);
        Ok(Tree::new(build_product_of_sums(&cover, &self.variables)))
    }
}

impl Simplify for Node {
    fn simplify_with_config(&self, config: &MinimizeConfig) -> Result<Node, MinimizeError> {
        Tree::new(self.clone())
            .simplify_with_config(config)
            .map(Tree::into_root)
    }

    fn simplify_pos_with_config(&self, config: &MinimizeConfig) -> Result<Node, MinimizeError> {
        Tree::new(self.clone())
            .simplify_pos_with_config(config)
            .map(Tree::into_root)
    }
}
