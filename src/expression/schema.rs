//! Loading expression trees from nested JSON documents
//!
//! The accepted shape mirrors the tree structure: leaves are objects with a
//! `variable` key, internal nodes carry `operator`, `left` and `right`, and
//! both may carry `has_not`. `left`/`right` are themselves node objects,
//! recursively. A `constant` leaf closes the node union:
//!
//! ```json
//! {
//!     "operator": "or",
//!     "left": {"variable": "a", "has_not": false},
//!     "right": {
//!         "operator": "and",
//!         "left": {"variable": "b", "has_not": true},
//!         "right": {"variable": "c", "has_not": false},
//!         "has_not": false
//!     },
//!     "has_not": false
//! }
//! ```

use super::error::SchemaError;
use super::{Expression, Node, Operator, Variable};
use serde_json::{Map, Value};
use std::sync::Arc;

impl Node {
    /// Build an expression tree from a parsed JSON value
    ///
    /// Keys are examined in order: an object with a `variable` key is a
    /// leaf, one with a `constant` key is a constant, anything else must
    /// carry the `operator`/`left`/`right` internal-node shape. `has_not`
    /// may be omitted anywhere and defaults to `false`. Operator names are
    /// matched ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Node;
    /// use serde_json::json;
    ///
    /// # fn main() -> Result<(), quine_logic::SchemaError> {
    /// let doc = json!({
    ///     "operator": "or",
    ///     "left": {"variable": "a"},
    ///     "right": {"variable": "b", "has_not": true},
    /// });
    /// let node = Node::from_json(&doc)?;
    /// assert_eq!(node.to_string(), "(a or not(b))");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, SchemaError> {
        let object = value.as_object().ok_or_else(|| SchemaError::NotAnObject {
            found: Arc::from(json_type_name(value)),
        })?;

        if object.contains_key("variable") {
            variable_from_object(object)
        } else if object.contains_key("constant") {
            constant_from_object(object)
        } else {
            expression_from_object(object)
        }
    }

    /// Build an expression tree from a JSON document string
    ///
    /// Convenience wrapper around [`Node::from_json`]; malformed JSON is
    /// reported as [`SchemaError::Json`].
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }
}

fn variable_from_object(object: &Map<String, Value>) -> Result<Node, SchemaError> {
    let name = require_str(object, "variable")?;
    if name.is_empty() {
        return Err(SchemaError::EmptyVariableName);
    }
    let negated = optional_bool(object, "has_not")?;
    Ok(Node::Variable(Variable {
        name: Arc::from(name),
        negated,
    }))
}

fn constant_from_object(object: &Map<String, Value>) -> Result<Node, SchemaError> {
    let value = require(object, "constant")?
        .as_bool()
        .ok_or_else(|| invalid_value("constant", "boolean"))?;
    Ok(Node::Constant(value))
}

fn expression_from_object(object: &Map<String, Value>) -> Result<Node, SchemaError> {
    let name = require_str(object, "operator")?;
    let operator = Operator::from_name(name).ok_or_else(|| SchemaError::UnknownOperator {
        name: Arc::from(name),
    })?;
    let left = Node::from_json(require(object, "left")?)?;
    let right = Node::from_json(require(object, "right")?)?;
    let negated = optional_bool(object, "has_not")?;
    Ok(Node::Expression(Box::new(Expression {
        operator,
        left,
        right,
        negated,
    })))
}

fn require<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value, SchemaError> {
    object.get(key).ok_or_else(|| SchemaError::MissingKey {
        key: Arc::from(key),
    })
}

fn require_str<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a str, SchemaError> {
    require(object, key)?
        .as_str()
        .ok_or_else(|| invalid_value(key, "string"))
}

fn optional_bool(object: &Map<String, Value>, key: &str) -> Result<bool, SchemaError> {
    match object.get(key) {
        None => Ok(false),
        Some(value) => value
            .as_bool()
            .ok_or_else(|| invalid_value(key, "boolean")),
    }
}

fn invalid_value(key: &str, expected: &'static str) -> SchemaError {
    SchemaError::InvalidValue {
        key: Arc::from(key),
        expected,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
