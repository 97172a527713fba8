//! Candidate tracking
//!
//! `CandidateSet` is a list of codes paired with a hash index for membership
//! queries. `CandidateStore` owns the live set for one session and shrinks it as
//! feedback arrives.

use super::error::SolverError;
use super::universe::Universe;
use crate::core::{Code, Outcome};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Ordered candidates with a by-value membership index
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    codes: Vec<Code>,
    index: FxHashSet<Code>,
}

impl CandidateSet {
    /// Build a set from codes, keeping their order
    #[must_use]
    pub fn new(codes: Vec<Code>) -> Self {
        let index = codes.iter().copied().collect();
        Self { codes, index }
    }

    /// The candidates in order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Check if `code` is a candidate
    #[inline]
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.index.contains(code)
    }

    /// Number of candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if no candidates remain
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Candidates that would answer `outcome` to `guess`
    #[must_use]
    pub fn consistent_with(&self, guess: &Code, outcome: Outcome) -> Self {
        self.codes
            .iter()
            .filter(|&candidate| Outcome::judge(guess, candidate) == outcome)
            .copied()
            .collect()
    }
}

impl FromIterator<Code> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The live candidate subset of one game
///
/// Starts equal to the universe and never grows.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    universe: Arc<Universe>,
    candidates: CandidateSet,
}

impl CandidateStore {
    /// Start with every code of the universe as a candidate
    #[must_use]
    pub fn new(universe: Arc<Universe>) -> Self {
        let candidates = CandidateSet::new(universe.codes().to_vec());
        Self {
            universe,
            candidates,
        }
    }

    /// Keep only candidates that would answer `outcome` to `guess`
    ///
    /// Returns the new candidate count.
    ///
    /// # Errors
    /// Returns `SolverError::InconsistentFeedback` if no candidate survives. The
    /// store is left unchanged in that case.
    pub fn filter(&mut self, guess: &Code, outcome: Outcome) -> Result<usize, SolverError> {
        let before = self.candidates.len();
        let filtered = self.candidates.consistent_with(guess, outcome);

        if filtered.is_empty() {
            return Err(SolverError::InconsistentFeedback {
                guess: *guess,
                outcome,
            });
        }

        self.candidates = filtered;
        log::debug!(
            "filtered on {guess} -> {outcome}: {before} -> {} candidates",
            self.candidates.len()
        );

        Ok(self.candidates.len())
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.candidates.len()
    }

    /// Check if exactly one candidate remains
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// The remaining candidate, if exactly one is left
    #[must_use]
    pub fn sole_candidate(&self) -> Option<Code> {
        match self.candidates.codes() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Check if no feedback has narrowed the universe yet
    #[inline]
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.candidates.len() == self.universe.len()
    }

    /// The remaining candidates
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// The universe this store draws from
    #[inline]
    #[must_use]
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Restore every code of the universe as a candidate
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::new(self.universe.codes().to_vec());
    }
}
