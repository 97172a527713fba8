//! The candidate universe
//!
//! Every permutation of D distinct digits, in lexicographic order. Built once per
//! digit count and shared read-only between sessions through an `Arc`.

use super::error::SolverError;
use crate::core::{Code, MAX_DIGITS};

/// All possible secrets for one digit count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    digits: usize,
    codes: Vec<Code>,
}

impl Universe {
    /// Build the universe of `digits`-digit codes
    ///
    /// Size is 10 × 9 × … × (10 − D + 1): 5040 for D = 4, 3,628,800 for D = 10.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidDigits` unless `1 <= digits <= 10`.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::solver::Universe;
    ///
    /// let universe = Universe::new(4).unwrap();
    /// assert_eq!(universe.len(), 5040);
    /// assert_eq!(universe.codes()[0].to_string(), "0123");
    /// ```
    pub fn new(digits: usize) -> Result<Self, SolverError> {
        if digits == 0 || digits > MAX_DIGITS {
            return Err(SolverError::InvalidDigits(digits));
        }

        let mut codes = Vec::with_capacity(permutation_count(digits));
        let mut prefix = Vec::with_capacity(digits);
        extend_permutations(digits, &mut prefix, 0, &mut codes);

        log::debug!("built {}-digit universe of {} codes", digits, codes.len());

        Ok(Self { digits, codes })
    }

    /// Code length of every member
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.digits
    }

    /// All codes in lexicographic order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Number of codes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a constructed universe
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Number of ordered selections of `digits` distinct digits from ten
#[must_use]
pub fn permutation_count(digits: usize) -> usize {
    (0..digits.min(MAX_DIGITS)).map(|i| MAX_DIGITS - i).product()
}

fn extend_permutations(digits: usize, prefix: &mut Vec<u8>, used: u16, out: &mut Vec<Code>) {
    if prefix.len() == digits {
        out.push(Code::from_unique(prefix));
        return;
    }

    for d in 0..MAX_DIGITS as u8 {
        if used & (1 << d) == 0 {
            prefix.push(d);
            extend_permutations(digits, prefix, used | (1 << d), out);
            prefix.pop();
        }
    }
}
