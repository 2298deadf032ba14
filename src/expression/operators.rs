//! Operator overloading for expression nodes

use super::Node;
use std::ops::{Add, BitXor, Mul, Not};

/// Logical AND operator for references: `&a * &b`
///
/// Implements the `*` operator for expression nodes using references.
/// This is the most convenient form when the operands are reused afterwards.
///
/// # Examples
///
/// ```
/// use quine_logic::Node;
///
/// let a = Node::variable("a");
/// let b = Node::variable("b");
/// let result = &a * &b;  // Equivalent to a.and(&b)
/// ```
impl Mul for &Node {
    type Output = Node;

    fn mul(self, rhs: &Node) -> Node {
        self.and(rhs)
    }
}

/// Logical AND operator: `a * b` (delegates to the method API)
impl Mul for Node {
    type Output = Node;

    fn mul(self, rhs: Node) -> Node {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a + &b`
///
/// Implements the `+` operator for expression nodes using references.
///
/// # Examples
///
/// ```
/// use quine_logic::Node;
///
/// let a = Node::variable("a");
/// let b = Node::variable("b");
/// let result = &a + &b;  // Equivalent to a.or(&b)
/// ```
impl Add for &Node {
    type Output = Node;

    fn add(self, rhs: &Node) -> Node {
        self.or(rhs)
    }
}

/// Logical OR operator: `a + b` (delegates to the method API)
impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Node) -> Node {
        self.or(&rhs)
    }
}

/// Logical XOR operator for references: `&a ^ &b`
///
/// # Examples
///
/// ```
/// use quine_logic::Node;
///
/// let a = Node::variable("a");
/// let b = Node::variable("b");
/// let result = &a ^ &b;  // Equivalent to a.xor(&b)
/// ```
impl BitXor for &Node {
    type Output = Node;

    fn bitxor(self, rhs: &Node) -> Node {
        self.xor(rhs)
    }
}

/// Logical XOR operator: `a ^ b` (delegates to the method API)
impl BitXor for Node {
    type Output = Node;

    fn bitxor(self, rhs: Node) -> Node {
        self.xor(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
///
/// # Examples
///
/// ```
/// use quine_logic::Node;
///
/// let a = Node::variable("a");
/// let result = !&a;  // Equivalent to a.not()
/// ```
impl Not for &Node {
    type Output = Node;

    fn not(self) -> Node {
        Node::not(self)
    }
}

/// Logical NOT operator: `!a` (delegates to the method API)
impl Not for Node {
    type Output = Node;

    fn not(self) -> Node {
        self.negate()
    }
}
