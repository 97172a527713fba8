//! Shannon entropy calculation for Hit/Blow outcomes
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Code, bucket_counts};

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum bucket size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct outcomes the guess can produce
    pub outcomes: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing outcome x.
///
/// # Examples
/// ```
/// use hit_and_blow::core::Code;
/// use hit_and_blow::solver::entropy::calculate_entropy;
///
/// let guess: Code = "0123".parse().unwrap();
/// let candidates: Vec<Code> = vec!["0123".parse().unwrap(), "4567".parse().unwrap()];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equally likely outcomes
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let counts = bucket_counts(guess, candidates);
    shannon_entropy(counts.values().copied())
}

/// Calculate Shannon entropy from bucket sizes
///
/// H = -Σ p * log₂(p)
///
/// Sizes are summed in sorted order so that two guesses with the same
/// distribution get bit-identical entropies, whatever order the buckets were
/// found in.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one bucket with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n buckets
///
/// # Examples
/// ```
/// use hit_and_blow::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<I>(bucket_sizes: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let mut sizes: Vec<usize> = bucket_sizes.into_iter().filter(|&n| n > 0).collect();
    sizes.sort_unstable();

    let total = sizes.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    sizes
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max bucket size.
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            outcomes: 0,
        };
    }

    let counts = bucket_counts(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = counts
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(counts.values().copied()),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
        outcomes: counts.len(),
    }
}
