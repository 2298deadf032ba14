//! Exact Quine-McCluskey minimization
//!
//! The engine consumes a variable count and the set of minterms on which a
//! function is true, and produces a minimal cover of prime implicants in
//! three phases:
//!
//! 1. **Group and combine**: minterms start as fully-specified implicants,
//!    grouped by their count of 1 bits. Implicants in adjacent groups that
//!    differ in exactly one specified bit merge into a generalized implicant
//!    with that bit as a don't-care, level by level until nothing merges.
//!    Anything never merged at its level is a prime implicant.
//! 2. **Coverage table**: primes against the original minterms, one mark per
//!    subsumption.
//! 3. **Cover selection**: minterms covered by exactly one prime force that
//!    prime into the cover; any remainder is closed greedily, preferring the
//!    prime covering the most uncovered minterms, then fewer don't-cares,
//!    then earliest generation order.
//!
//! Every phase is pure and deterministic: identical inputs produce an
//! identical implicant sequence, and therefore an identical reconstructed
//! expression. The greedy fallback in phase 3 is not guaranteed globally
//! minimal on cyclic coverage tables; callers needing that guarantee would
//! have to replace it with an exact set-cover search.
//!
//! [`Simplify`] is the high-level entry point implemented by
//! [`Tree`](crate::Tree) and [`Node`](crate::Node); the phase functions are
//! public for callers that already work in minterm space.

pub mod error;
mod implicant;

pub use error::MinimizeError;
pub use implicant::Implicant;

use crate::expression::{Node, Variable};
use crate::MinimizeConfig;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Types that can be rewritten into minimal two-level form
///
/// Minimization never mutates the receiver: all methods return a new
/// instance and the original stays usable. The sum-of-products methods are
/// the primary surface; the product-of-sums variants minimize the
/// complement and return the De Morgan dual, which can be smaller for
/// functions that are false on few rows.
///
/// ```
/// use quine_logic::{Node, Simplify, Tree};
///
/// # fn main() -> Result<(), quine_logic::MinimizeError> {
/// let a = Node::variable("a");
/// let b = Node::variable("b");
/// let c = Node::variable("c");
///
/// let redundant = Tree::new(a.and(&b).or(&a.and(&b).and(&c)));
/// let minimized = redundant.simplify()?;
/// assert_eq!(minimized.to_string(), "(a and b)");
/// # Ok(())
/// # }
/// ```
pub trait Simplify {
    /// Minimize into sum-of-products form with the default configuration
    fn simplify(&self) -> Result<Self, MinimizeError>
    where
        Self: Sized,
    {
        self.simplify_with_config(&MinimizeConfig::default())
    }

    /// Minimize into sum-of-products form
    ///
    /// Fails with [`MinimizeError::TooManyVariables`] before any truth
    /// table work when the variable count exceeds the configured bound.
    fn simplify_with_config(&self, config: &MinimizeConfig) -> Result<Self, MinimizeError>
    where
        Self: Sized;

    /// Minimize into product-of-sums form with the default configuration
    fn simplify_pos(&self) -> Result<Self, MinimizeError>
    where
        Self: Sized,
    {
        self.simplify_pos_with_config(&MinimizeConfig::default())
    }

    /// Minimize into product-of-sums form
    fn simplify_pos_with_config(&self, config: &MinimizeConfig) -> Result<Self, MinimizeError>
    where
        Self: Sized;
}

/// Derive all prime implicants of the function given by `minterms`
///
/// Minterms are row indices of a `width`-variable truth table; duplicates
/// are ignored. The result is ordered deterministically: by combination
/// level (fully-specified implicants first), then by count of 1 bits, then
/// by first appearance, which is the order cover selection reports.
///
/// # Examples
///
/// ```
/// use quine_logic::prime_implicants;
///
/// // f(a, b, c) true on rows {3, 4, 5, 6, 7}
/// let primes = prime_implicants(3, &[3, 4, 5, 6, 7]);
/// let patterns: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
/// assert_eq!(patterns, ["-11", "1--"]);
/// ```
pub fn prime_implicants(width: usize, minterms: &[usize]) -> Vec<Implicant> {
    let mut current = Vec::new();
    let mut seen = HashSet::new();
    for &minterm in minterms {
        let implicant = Implicant::from_minterm(width, minterm);
        if seen.insert(implicant.clone()) {
            current.push(implicant);
        }
    }

    let mut primes = Vec::new();
    while !current.is_empty() {
        // Group the current level by ones count, keeping insertion order
        // within each group.
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (index, implicant) in current.iter().enumerate() {
            groups.entry(implicant.ones()).or_default().push(index);
        }

        let mut combined = vec![false; current.len()];
        let mut next = Vec::new();
        let mut next_seen = HashSet::new();

        for (&ones, group) in &groups {
            if let Some(upper) = groups.get(&(ones + 1)) {
                for &i in group {
                    for &j in upper {
                        if let Some(merged) = current[i].combine(&current[j]) {
                            combined[i] = true;
                            combined[j] = true;
                            if next_seen.insert(merged.clone()) {
                                next.push(merged);
                            }
                        }
                    }
                }
            }
        }

        // Whatever never merged at this level cannot be generalized further.
        for (index, implicant) in current.into_iter().enumerate() {
            if !combined[index] {
                primes.push(implicant);
            }
        }

        current = next;
    }

    primes
}

/// Select a minimal cover of `minterms` from the given prime implicants
///
/// Implements phases 2 and 3: builds the coverage table, takes every
/// essential prime (sole cover of some minterm), then greedily closes the
/// remainder. Ties in the greedy step fall to the implicant with fewer
/// don't-cares, then to the one generated first. The returned cover is
/// re-sorted to the order of `primes`, so identical inputs always yield the
/// identical sequence.
///
/// `primes` is expected to come from [`prime_implicants`] over the same
/// minterm set; minterms no prime covers are left uncovered.
///
/// # Examples
///
/// ```
/// use quine_logic::{prime_implicants, select_cover};
///
/// let minterms = [3, 4, 5, 6, 7];
/// let primes = prime_implicants(3, &minterms);
/// let cover = select_cover(&primes, &minterms);
/// let patterns: Vec<String> = cover.iter().map(|p| p.to_string()).collect();
/// // Both primes are essential here
/// assert_eq!(patterns, ["-11", "1--"]);
/// ```
pub fn select_cover(primes: &[Implicant], minterms: &[usize]) -> Vec<Implicant> {
    // Phase 2: one mark per (prime, minterm) subsumption.
    let coverage: Vec<Vec<usize>> = primes
        .iter()
        .map(|prime| {
            minterms
                .iter()
                .copied()
                .filter(|&minterm| prime.covers(minterm))
                .collect()
        })
        .collect();

    let mut selected: Vec<usize> = Vec::new();
    let mut covered: HashSet<usize> = HashSet::new();

    // Essential primes: a minterm with exactly one covering prime forces it.
    for &minterm in minterms {
        let mut covering = (0..primes.len()).filter(|&prime| coverage[prime].contains(&minterm));
        if let (Some(only), None) = (covering.next(), covering.next()) {
            if !selected.contains(&only) {
                selected.push(only);
                covered.extend(coverage[only].iter().copied());
            }
        }
    }

    // Greedy closure of whatever the essentials left uncovered.
    loop {
        if minterms.iter().all(|minterm| covered.contains(minterm)) {
            break;
        }

        let mut best: Option<(usize, usize)> = None;
        for (index, marks) in coverage.iter().enumerate() {
            if selected.contains(&index) {
                continue;
            }
            let gain = marks
                .iter()
                .filter(|minterm| !covered.contains(minterm))
                .count();
            if gain == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_index, best_gain)) => {
                    gain > best_gain
                        || (gain == best_gain
                            && primes[index].specified() > primes[best_index].specified())
                }
            };
            if better {
                best = Some((index, gain));
            }
        }

        match best {
            Some((index, _)) => {
                selected.push(index);
                covered.extend(coverage[index].iter().copied());
            }
            // No prime covers the remaining minterms; only possible when
            // the primes did not come from the same minterm set.
            None => break,
        }
    }

    // Canonical output order is generation order, not selection order.
    selected.sort_unstable();
    selected.into_iter().map(|index| primes[index].clone()).collect()
}

/// Join a cover into a sum-of-products expression tree
///
/// Each implicant becomes a product of literals over the canonical variable
/// order: `1` positions as plain variables, `0` positions negated,
/// don't-cares omitted. Products are joined with OR in cover order. A
/// single-literal product stays a bare literal, a single-product sum stays
/// a bare product, an all-don't-care implicant collapses to `true` and an
/// empty cover to `false`.
pub fn build_sum_of_products(cover: &[Implicant], variables: &[Arc<str>]) -> Node {
    cover
        .iter()
        .map(|implicant| product_term(implicant, variables))
        .reduce(|acc, term| acc.or(&term))
        .unwrap_or_else(|| Node::constant(false))
}

/// Join a cover of the complement into a product-of-sums expression tree
///
/// The cover is expected to describe the maxterms (rows where the function
/// is false). De Morgan inverts every literal: `1` positions become negated
/// variables, `0` positions plain, and terms join with OR inside, AND
/// outside. Degenerate cases mirror [`build_sum_of_products`]: an empty
/// cover collapses to `true`, an all-don't-care implicant to `false`.
pub fn build_product_of_sums(cover: &[Implicant], variables: &[Arc<str>]) -> Node {
    cover
        .iter()
        .map(|implicant| sum_term(implicant, variables))
        .reduce(|acc, term| acc.and(&term))
        .unwrap_or_else(|| Node::constant(true))
}

fn product_term(implicant: &Implicant, variables: &[Arc<str>]) -> Node {
    implicant
        .bits()
        .iter()
        .zip(variables)
        .filter_map(|(bit, name)| bit.map(|polarity| literal(name, polarity)))
        .reduce(|acc, lit| acc.and(&lit))
        .unwrap_or_else(|| Node::constant(true))
}

fn sum_term(implicant: &Implicant, variables: &[Arc<str>]) -> Node {
    implicant
        .bits()
        .iter()
        .zip(variables)
        .filter_map(|(bit, name)| bit.map(|polarity| literal(name, !polarity)))
        .reduce(|acc, lit| acc.or(&lit))
        .unwrap_or_else(|| Node::constant(false))
}

fn literal(name: &Arc<str>, polarity: bool) -> Node {
    Node::Variable(Variable {
        name: Arc::clone(name),
        negated: !polarity,
    })
}

#[cfg(test)]
mod tests;
