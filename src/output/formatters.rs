//! Formatting utilities for terminal output

use crate::core::Outcome;

/// Format an outcome as pegs: `●` per hit, `○` per blow, `·` for the rest
///
/// # Examples
/// ```
/// use hit_and_blow::core::Outcome;
/// use hit_and_blow::output::formatters::outcome_pegs;
///
/// assert_eq!(outcome_pegs(Outcome::new(1, 2), 4), "●○○·");
/// ```
#[must_use]
pub fn outcome_pegs(outcome: Outcome, digits: usize) -> String {
    let hit = usize::from(outcome.hit());
    let blow = usize::from(outcome.blow());
    let misses = digits.saturating_sub(hit + blow);

    let mut result = String::with_capacity(digits * 3);
    result.push_str(&"●".repeat(hit));
    result.push_str(&"○".repeat(blow));
    result.push_str(&"·".repeat(misses));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar relative to the most it could be for `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
