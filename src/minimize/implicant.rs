//! Implicant representation for the minimization engine

use std::fmt;

/// A partial assignment over the canonical variable ordering
///
/// Each position holds `Some(true)` (the variable must be 1), `Some(false)`
/// (must be 0) or `None` (don't-care). An implicant covers every minterm
/// consistent with its specified positions; a minterm is the special case
/// with no don't-cares.
///
/// Rendered as a pattern string in truth-table column order, e.g. `"1-0"`
/// for "first variable 1, second free, third 0".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Implicant {
    bits: Vec<Option<bool>>,
}

impl Implicant {
    /// Build the fully-specified implicant for one minterm
    ///
    /// Bit `width - 1 - i` of `minterm` lands at position `i`: the first
    /// variable of the canonical ordering is the most significant bit of the
    /// minterm index, matching truth table row numbering.
    ///
    /// ```
    /// use quine_logic::Implicant;
    ///
    /// assert_eq!(Implicant::from_minterm(3, 5).to_string(), "101");
    /// assert_eq!(Implicant::from_minterm(3, 1).to_string(), "001");
    /// ```
    pub fn from_minterm(width: usize, minterm: usize) -> Self {
        let bits = (0..width)
            .map(|position| Some(minterm >> (width - 1 - position) & 1 == 1))
            .collect();
        Implicant { bits }
    }

    /// The positions of this implicant, one per variable
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Number of variable positions (specified or not)
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Number of positions specified as 1
    ///
    /// Phase 1 groups implicants by this count; only adjacent groups can
    /// combine.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|bit| **bit == Some(true)).count()
    }

    /// Number of specified (non-don't-care) positions
    ///
    /// Higher means more specific; the cover-selection tie-break prefers
    /// implicants with fewer don't-cares, i.e. a higher specified count.
    pub fn specified(&self) -> usize {
        self.bits.iter().filter(|bit| bit.is_some()).count()
    }

    /// Try to merge two implicants that differ in exactly one specified bit
    ///
    /// Don't-care positions must coincide: a dash matches only a dash.
    /// On success the differing position becomes a don't-care in the result.
    ///
    /// ```
    /// use quine_logic::Implicant;
    ///
    /// let a = Implicant::from_minterm(3, 6); // 110
    /// let b = Implicant::from_minterm(3, 7); // 111
    /// assert_eq!(a.combine(&b).unwrap().to_string(), "11-");
    ///
    /// let c = Implicant::from_minterm(3, 1); // 001
    /// assert_eq!(a.combine(&c), None); // differs in more than one bit
    /// ```
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.width() != other.width() {
            return None;
        }

        let mut differing = None;
        for (position, (mine, theirs)) in self.bits.iter().zip(&other.bits).enumerate() {
            match (mine, theirs) {
                (None, None) => {}
                (Some(a), Some(b)) if a == b => {}
                (Some(_), Some(_)) => {
                    if differing.replace(position).is_some() {
                        return None; // second differing bit
                    }
                }
                // dash on one side only
                _ => return None,
            }
        }

        differing.map(|position| {
            let mut bits = self.bits.clone();
            bits[position] = None;
            Implicant { bits }
        })
    }

    /// Whether this implicant subsumes the given minterm
    ///
    /// Every specified position must match the corresponding bit of the
    /// minterm index; don't-care positions match anything.
    pub fn covers(&self, minterm: usize) -> bool {
        let width = self.width();
        self.bits.iter().enumerate().all(|(position, bit)| match bit {
            None => true,
            Some(value) => (minterm >> (width - 1 - position) & 1 == 1) == *value,
        })
    }
}

/// Pattern-string rendering: `1`, `0` and `-` per position
impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            let c = match bit {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
