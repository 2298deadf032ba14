//! Boolean expression trees with operator overloading and parsing support
//!
//! This module provides the expression representation the rest of the crate
//! operates on. Expressions can be constructed programmatically using method
//! combinators or operator overloading, with the `expr!` macro, parsed from
//! strings, or loaded from nested JSON documents.
//!
//! # Main Types
//!
//! - [`Node`] - the closed node union: a [`Variable`] leaf, a boxed
//!   [`Expression`] with two operands, or a constant. Every tree operation
//!   matches exhaustively over these three kinds.
//! - [`Operator`] - the binary connectives: AND, OR, XOR, NAND, NOR, XNOR.
//!
//! Negation is a flag on variables and expressions rather than a separate
//! node: `not` toggles the flag, so double negation cancels structurally.
//!
//! # Quick Start
//!
//! ## Using the `expr!` Macro
//!
//! ```
//! use quine_logic::{expr, Node};
//!
//! // String literals create variables on the spot
//! let mux = expr!("sel" * "high" + !"sel" * "low");
//!
//! // Existing Node values compose by identifier
//! let sel = Node::variable("sel");
//! let high = Node::variable("high");
//! let low = Node::variable("low");
//! let same = expr!(sel * high + !sel * low);
//! assert_eq!(mux, same);
//! ```
//!
//! ## Parsing from Strings
//!
//! ```
//! use quine_logic::Node;
//!
//! # fn main() -> std::io::Result<()> {
//! let parsed = Node::parse("a and not b or c")?;
//! assert_eq!(parsed.to_string(), "((a and not(b)) or c)");
//!
//! // Word and symbol tokens are interchangeable
//! assert_eq!(parsed, Node::parse("a & !b | c")?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Evaluating
//!
//! ```
//! use quine_logic::Node;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), quine_logic::EvalError> {
//! let a = Node::variable("a");
//! let b = Node::variable("b");
//! let expr = a.and(&b.not());
//!
//! let assignment = HashMap::from([
//!     (Arc::<str>::from("a"), true),
//!     (Arc::from("b"), false),
//! ]);
//! assert!(expr.evaluate(&assignment)?);
//! # Ok(())
//! # }
//! ```

// Submodules
mod display;
pub mod error;
mod eval;
mod operators;
mod parser;
mod schema;

pub use error::{EvalError, ParseError, SchemaError};

use std::sync::Arc;

/// A named boolean atom with an optional negation flag
///
/// Variables are leaves of the expression tree. Equality for evaluation
/// purposes is by name: many `Variable` instances may share a name and all
/// read the same slot of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The identifier looked up in assignments; never empty
    pub name: Arc<str>,
    /// Whether the looked-up value is inverted
    pub negated: bool,
}

impl Variable {
    /// Create a variable leaf with the given name
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. Validated loaders reject empty names with
    /// an error before reaching this constructor.
    pub fn new(name: &str) -> Self {
        assert!(!name.is_empty(), "variable name must not be empty");
        Variable {
            name: Arc::from(name),
            negated: false,
        }
    }
}

/// A binary operator node combining two operands
///
/// The `negated` flag applies to the combined result, after the operator:
/// `not (a or b)` is a single `Expression` with `negated` set, not a separate
/// node wrapping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The connective applied to the two operand results
    pub operator: Operator,
    /// Left operand subtree, exclusively owned
    pub left: Node,
    /// Right operand subtree, exclusively owned
    pub right: Node,
    /// Whether the combined result is inverted
    pub negated: bool,
}

impl Expression {
    /// Combine two operand trees under an operator
    pub fn new(operator: Operator, left: Node, right: Node) -> Self {
        Expression {
            operator,
            left,
            right,
            negated: false,
        }
    }
}

/// A node of a boolean expression tree
///
/// The union is closed: every node is a variable leaf, a binary expression,
/// or a constant. Constants mainly arise as minimization results for
/// degenerate always-true/always-false functions, but can also be built
/// directly and parsed (`true`, `false`, `1`, `0`).
///
/// # Examples
///
/// ## Method-based API
/// ```
/// use quine_logic::Node;
///
/// let a = Node::variable("a");
/// let b = Node::variable("b");
/// let expr = a.or(&b).and(&a.not().or(&b.not()));
/// assert_eq!(expr.to_string(), "((a or b) and (not(a) or not(b)))");
/// ```
///
/// ## Operator overloading (requires explicit &)
/// ```
/// use quine_logic::Node;
///
/// let a = Node::variable("a");
/// let b = Node::variable("b");
/// let expr = (&a + &b) * (!&a + !&b);
/// assert_eq!(expr, a.or(&b).and(&a.not().or(&b.not())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A named leaf
    Variable(Variable),
    /// A binary operator over two subtrees
    Expression(Box<Expression>),
    /// A constant truth value
    Constant(bool),
}

impl Node {
    /// Create a variable node with the given name
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty; see [`Variable::new`].
    pub fn variable(name: &str) -> Self {
        Node::Variable(Variable::new(name))
    }

    /// Create a constant node (true or false)
    pub fn constant(value: bool) -> Self {
        Node::Constant(value)
    }

    /// Combine two owned subtrees under an operator
    pub fn binary(operator: Operator, left: Node, right: Node) -> Self {
        Node::Expression(Box::new(Expression::new(operator, left, right)))
    }

    /// Logical AND of this node and another
    pub fn and(&self, other: &Node) -> Node {
        Node::binary(Operator::And, self.clone(), other.clone())
    }

    /// Logical OR of this node and another
    pub fn or(&self, other: &Node) -> Node {
        Node::binary(Operator::Or, self.clone(), other.clone())
    }

    /// Logical XOR of this node and another
    pub fn xor(&self, other: &Node) -> Node {
        Node::binary(Operator::Xor, self.clone(), other.clone())
    }

    /// Logical NAND of this node and another
    pub fn nand(&self, other: &Node) -> Node {
        Node::binary(Operator::Nand, self.clone(), other.clone())
    }

    /// Logical NOR of this node and another
    pub fn nor(&self, other: &Node) -> Node {
        Node::binary(Operator::Nor, self.clone(), other.clone())
    }

    /// Logical XNOR of this node and another
    pub fn xnor(&self, other: &Node) -> Node {
        Node::binary(Operator::Xnor, self.clone(), other.clone())
    }

    /// Logical NOT of this node
    ///
    /// Toggles the negation flag on variables and expressions, so double
    /// negation cancels structurally. Negating a constant folds to the
    /// flipped constant.
    ///
    /// ```
    /// use quine_logic::Node;
    ///
    /// let a = Node::variable("a");
    /// assert_eq!(a.not().to_string(), "not(a)");
    /// assert_eq!(a.not().not(), a);
    /// ```
    pub fn not(&self) -> Node {
        self.clone().negate()
    }

    /// Logical NOT, consuming this node
    ///
    /// Same result as [`Node::not`] without cloning the subtree.
    pub fn negate(mut self) -> Node {
        match &mut self {
            Node::Variable(variable) => variable.negated = !variable.negated,
            Node::Expression(expression) => expression.negated = !expression.negated,
            Node::Constant(value) => *value = !*value,
        }
        self
    }

    /// Collect all distinct variable names in this subtree
    ///
    /// Names appear in first-seen order during a left-to-right depth-first
    /// traversal. This order is the canonical variable ordering: it fixes
    /// truth table columns, minterm numbering and minimization output, so it
    /// is deliberately positional rather than alphabetical.
    ///
    /// ```
    /// use quine_logic::Node;
    /// use std::sync::Arc;
    ///
    /// let b = Node::variable("b");
    /// let a = Node::variable("a");
    /// let expr = b.and(&a).or(&b);
    ///
    /// assert_eq!(expr.collect_variables(), vec![Arc::from("b"), Arc::from("a")]);
    /// ```
    pub fn collect_variables(&self) -> Vec<Arc<str>> {
        let mut names = Vec::new();
        self.collect_variables_into(&mut names);
        names
    }

    fn collect_variables_into(&self, names: &mut Vec<Arc<str>>) {
        match self {
            Node::Variable(variable) => {
                if !names.iter().any(|name| *name == variable.name) {
                    names.push(Arc::clone(&variable.name));
                }
            }
            Node::Expression(expression) => {
                expression.left.collect_variables_into(names);
                expression.right.collect_variables_into(names);
            }
            Node::Constant(_) => {}
        }
    }
}

/// The binary connectives understood by the expression tree
///
/// The minimization engine itself is operator-agnostic: it consumes a truth
/// table, so any of these can appear in input trees. Minimization output
/// only ever uses AND and OR (plus negation flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// True when both operands are true
    And,
    /// True when either operand is true
    Or,
    /// True when the operands differ
    Xor,
    /// Negated AND
    Nand,
    /// Negated OR
    Nor,
    /// True when the operands agree
    Xnor,
}

impl Operator {
    /// The lowercase keyword for this operator, as used in canonical strings
    pub fn name(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
            Operator::Nand => "nand",
            Operator::Nor => "nor",
            Operator::Xnor => "xnor",
        }
    }

    /// Look up an operator by keyword, ignoring ASCII case
    ///
    /// ```
    /// use quine_logic::Operator;
    ///
    /// assert_eq!(Operator::from_name("or"), Some(Operator::Or));
    /// assert_eq!(Operator::from_name("XNOR"), Some(Operator::Xnor));
    /// assert_eq!(Operator::from_name("implies"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Operator> {
        let operator = match name.to_ascii_lowercase().as_str() {
            "and" => Operator::And,
            "or" => Operator::Or,
            "xor" => Operator::Xor,
            "nand" => Operator::Nand,
            "nor" => Operator::Nor,
            "xnor" => Operator::Xnor,
            _ => return None,
        };
        Some(operator)
    }
}
