//! Truth table construction and rendering

use crate::expression::Node;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The complete truth table of an expression
///
/// Rows enumerate every assignment over the expression's variables in
/// binary counting order: row index `r` assigns bit `k - 1 - i` of `r` to
/// the `i`-th variable, so the first variable is the most significant bit
/// and row indices coincide with minterm numbers. A table over `k`
/// variables always has `2^k` rows; a constant expression has one.
///
/// Formatting a table produces the classic ASCII layout, one column per
/// variable plus the expression's result column:
///
/// ```text
/// | a | b | (a xor b) |
/// +---+---+-----------+
/// | 0 | 0 |     0     |
/// | 0 | 1 |     1     |
/// | 1 | 0 |     1     |
/// | 1 | 1 |     0     |
/// ```
///
/// ```
/// use quine_logic::Tree;
///
/// let tree: Tree = "a xor b".parse()?;
/// let table = tree.truth_table();
///
/// assert_eq!(table.rows(), 4);
/// assert_eq!(table.minterms(), vec![1, 2]);
/// assert_eq!(table.maxterms(), vec![0, 3]);
/// # Ok::<(), quine_logic::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<Arc<str>>,
    values: Vec<bool>,
    expression: String,
}

impl TruthTable {
    pub(crate) fn from_node(root: &Node, variables: Vec<Arc<str>>) -> TruthTable {
        let width = variables.len();
        let rows = 1usize << width;

        let mut values = Vec::with_capacity(rows);
        let mut assignment = HashMap::with_capacity(width);
        for row in 0..rows {
            assignment.clear();
            for (position, name) in variables.iter().enumerate() {
                let bit = row >> (width - 1 - position) & 1 == 1;
                assignment.insert(Arc::clone(name), bit);
            }
            let value = root
                .evaluate(&assignment)
                .expect("assignment covers every collected variable");
            values.push(value);
        }

        TruthTable {
            expression: root.to_string(),
            variables,
            values,
        }
    }

    /// The variables heading the table, in column order
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Number of rows, `2^k` for `k` variables
    pub fn rows(&self) -> usize {
        self.values.len()
    }

    /// The rendered expression shown in the result column header
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The result column value at `row`
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below [`rows`](TruthTable::rows).
    pub fn value(&self, row: usize) -> bool {
        self.values[row]
    }

    /// The whole result column in row order
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Reconstruct the variable assignment of `row`
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below [`rows`](TruthTable::rows).
    pub fn assignment(&self, row: usize) -> HashMap<Arc<str>, bool> {
        assert!(row < self.values.len(), "row {} out of range", row);
        self.variables
            .iter()
            .enumerate()
            .map(|(position, name)| (Arc::clone(name), self.bit(row, position)))
            .collect()
    }

    /// Row indices where the expression evaluates to true
    pub fn minterms(&self) -> Vec<usize> {
        self.term_indices(true)
    }

    /// Row indices where the expression evaluates to false
    pub fn maxterms(&self) -> Vec<usize> {
        self.term_indices(false)
    }

    fn term_indices(&self, polarity: bool) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == polarity)
            .map(|(row, _)| row)
            .collect()
    }

    fn bit(&self, row: usize, position: usize) -> bool {
        row >> (self.variables.len() - 1 - position) & 1 == 1
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {} | {} |",
            self.variables.iter().join(" | "),
            self.expression
        )?;

        let column_dashes = self
            .variables
            .iter()
            .map(|name| "-".repeat(name.len()))
            .join("-+-");
        write!(
            f,
            "\n+-{}-+-{}-+",
            column_dashes,
            "-".repeat(self.expression.len())
        )?;

        for row in 0..self.values.len() {
            let cells = self
                .variables
                .iter()
                .enumerate()
                .map(|(position, name)| {
                    let bit = if self.bit(row, position) { "1" } else { "0" };
                    format!("{:^width$}", bit, width = name.len())
                })
                .join(" | ");
            let result = if self.values[row] { "1" } else { "0" };
            write!(
                f,
                "\n| {} | {:^width$} |",
                cells,
                result,
                width = self.expression.len()
            )?;
        }

        Ok(())
    }
}
