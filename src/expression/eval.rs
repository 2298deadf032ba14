//! Evaluation of expression trees against variable assignments

use super::error::EvalError;
use super::{Expression, Node, Operator, Variable};
use std::collections::HashMap;
use std::sync::Arc;

impl Operator {
    /// The truth function of this operator
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Operator::And => left && right,
            Operator::Or => left || right,
            Operator::Xor => left != right,
            Operator::Nand => !(left && right),
            Operator::Nor => !(left || right),
            Operator::Xnor => left == right,
        }
    }
}

impl Variable {
    /// Look up this variable in the assignment and apply its negation flag
    ///
    /// Fails with [`EvalError::UnboundVariable`] if the name is absent.
    /// Missing variables are never silently defaulted.
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> Result<bool, EvalError> {
        let value = assignment
            .get(self.name.as_ref())
            .copied()
            .ok_or_else(|| EvalError::UnboundVariable {
                name: Arc::clone(&self.name),
            })?;
        Ok(value ^ self.negated)
    }
}

impl Expression {
    /// Evaluate both operands, combine them, then apply the negation flag
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> Result<bool, EvalError> {
        let left = self.left.evaluate(assignment)?;
        let right = self.right.evaluate(assignment)?;
        Ok(self.operator.apply(left, right) ^ self.negated)
    }
}

impl Node {
    /// Evaluate the subtree rooted at this node
    ///
    /// The assignment must bind every variable the subtree mentions;
    /// the first unbound name encountered aborts evaluation.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Node;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let a = Node::variable("a");
    /// let b = Node::variable("b");
    /// let expr = a.xor(&b);
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assignment.insert(Arc::from("b"), false);
    ///
    /// assert_eq!(expr.evaluate(&assignment), Ok(true));
    ///
    /// assignment.insert(Arc::from("b"), true);
    /// assert_eq!(expr.evaluate(&assignment), Ok(false));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> Result<bool, EvalError> {
        match self {
            Node::Variable(variable) => variable.evaluate(assignment),
            Node::Expression(expression) => expression.evaluate(assignment),
            Node::Constant(value) => Ok(*value),
        }
    }
}
