//! Canonical string rendering for expression trees
//!
//! The canonical form always parenthesizes binary nodes and spells negation
//! as a `not(...)` wrapper, so every rendering parses back to a structurally
//! identical tree. This is the form used for output comparison: two trees
//! render identically exactly when they are structurally equal.

use super::{Expression, Node, Operator, Variable};
use std::fmt;

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders `name` or `not(name)`
impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "not({})", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Renders `(left op right)`, or `not(left op right)` when negated
///
/// The `not(...)` wrapper replaces the ordinary parentheses, so negated
/// nodes never render a doubled `not((...))`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "not({} {} {})", self.left, self.operator, self.right)
        } else {
            write!(f, "({} {} {})", self.left, self.operator, self.right)
        }
    }
}

/// Canonical rendering of a node
///
/// # Examples
///
/// ```
/// use quine_logic::Node;
///
/// let a = Node::variable("a");
/// let b = Node::variable("b");
///
/// assert_eq!(a.or(&b.not()).to_string(), "(a or not(b))");
/// assert_eq!(a.and(&b).not().to_string(), "not(a and b)");
/// assert_eq!(Node::constant(true).to_string(), "true");
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Variable(variable) => variable.fmt(f),
            Node::Expression(expression) => expression.fmt(f),
            Node::Constant(value) => f.write_str(if *value { "true" } else { "false" }),
        }
    }
}
