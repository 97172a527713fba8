//! Hit/Blow feedback calculation and representation
//!
//! An outcome is the feedback for one guess against one secret:
//! - Hit: a guessed digit matching the secret's digit at the same position
//! - Blow: a guessed digit present in the secret at a different position

use super::Code;
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a guess: (hit, blow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Outcome {
    hit: u8,
    blow: u8,
}

/// Error type for unparseable or impossible feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    /// Input could not be read as two numbers
    Malformed(String),
    /// hit + blow exceeds the digit count
    OutOfRange { hit: u8, blow: u8, digits: usize },
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => write!(
                f,
                "Cannot read feedback '{input}', expected e.g. '1 2' or '1H2B'"
            ),
            Self::OutOfRange { hit, blow, digits } => write!(
                f,
                "Hit {hit} + Blow {blow} exceeds the {digits} digits of the code"
            ),
        }
    }
}

impl std::error::Error for OutcomeError {}

impl Outcome {
    /// Create an outcome from raw counts
    #[inline]
    #[must_use]
    pub const fn new(hit: u8, blow: u8) -> Self {
        Self { hit, blow }
    }

    /// The outcome of guessing the secret exactly
    #[inline]
    #[must_use]
    pub const fn solved(digits: usize) -> Self {
        Self::new(digits as u8, 0)
    }

    /// Digits in the right position
    #[inline]
    #[must_use]
    pub const fn hit(self) -> u8 {
        self.hit
    }

    /// Digits present at a different position
    #[inline]
    #[must_use]
    pub const fn blow(self) -> u8 {
        self.blow
    }

    /// Check if every one of `digits` positions is a hit
    #[inline]
    #[must_use]
    pub const fn is_solved(self, digits: usize) -> bool {
        self.hit as usize == digits
    }

    /// Judge `guess` against `secret`
    ///
    /// Both codes must have the same length; digits are unique by construction,
    /// so each secret digit can be matched at most once. Blows are the shared
    /// digits that are not hits.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::{Code, Outcome};
    ///
    /// let guess: Code = "1234".parse().unwrap();
    /// let secret: Code = "1325".parse().unwrap();
    /// assert_eq!(Outcome::judge(&guess, &secret), Outcome::new(1, 2));
    /// ```
    #[inline]
    #[must_use]
    pub fn judge(guess: &Code, secret: &Code) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "codes must have equal length");

        let hit = guess
            .digits()
            .iter()
            .zip(secret.digits())
            .filter(|(g, s)| g == s)
            .count() as u8;
        let shared = (guess.mask() & secret.mask()).count_ones() as u8;

        Self {
            hit,
            blow: shared - hit,
        }
    }

    /// Parse feedback typed by a player for a game of `digits` digits
    ///
    /// Accepts two numbers separated by spaces, commas or slashes (`"1 2"`,
    /// `"1,2"`), or tagged with H and B in that order (`"1H2B"`, `"1h 2b"`).
    ///
    /// # Errors
    /// Returns `OutcomeError::Malformed` if two numbers cannot be read, or
    /// `OutcomeError::OutOfRange` if they add up to more than `digits`.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::Outcome;
    ///
    /// assert_eq!(Outcome::parse("1H2B", 4).unwrap(), Outcome::new(1, 2));
    /// assert_eq!(Outcome::parse("0 4", 4).unwrap(), Outcome::new(0, 4));
    /// assert!(Outcome::parse("3 3", 4).is_err());
    /// ```
    pub fn parse(input: &str, digits: usize) -> Result<Self, OutcomeError> {
        const SEPARATORS: [char; 3] = [' ', ',', '/'];
        let malformed = || OutcomeError::Malformed(input.to_string());
        let text = input.trim();

        // Tagged form: hit count, then H, then blow count, then B
        let (hit, blow) = match text.strip_suffix(['b', 'B']) {
            Some(rest) => rest.split_once(['h', 'H']),
            None => text.split_once(SEPARATORS),
        }
        .ok_or_else(malformed)?;

        let number = |part: &str| {
            let part = part.trim_matches(SEPARATORS);
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u8>().map_err(|_| malformed())
        };
        let (hit, blow) = (number(hit)?, number(blow)?);

        if usize::from(hit) + usize::from(blow) > digits {
            return Err(OutcomeError::OutOfRange { hit, blow, digits });
        }

        Ok(Self::new(hit, blow))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}H{}B", self.hit, self.blow)
    }
}

/// Group candidates by the outcome they produce against `guess`
///
/// Returns the size of every non-empty outcome bucket.
#[must_use]
pub fn bucket_counts(guess: &Code, candidates: &[Code]) -> FxHashMap<Outcome, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let outcome = Outcome::judge(guess, candidate);
        *counts.entry(outcome).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn judge_all_blows() {
        assert_eq!(
            Outcome::judge(&code("1234"), &code("4321")),
            Outcome::new(0, 4)
        );
    }

    #[test]
    fn judge_exact_match() {
        let outcome = Outcome::judge(&code("1234"), &code("1234"));
        assert_eq!(outcome, Outcome::new(4, 0));
        assert!(outcome.is_solved(4));
        assert_eq!(outcome, Outcome::solved(4));
    }

    #[test]
    fn judge_mixed() {
        assert_eq!(
            Outcome::judge(&code("1234"), &code("1325")),
            Outcome::new(1, 2)
        );
    }

    #[test]
    fn judge_nothing_shared() {
        let outcome = Outcome::judge(&code("0123"), &code("4567"));
        assert_eq!(outcome.hit(), 0);
        assert_eq!(outcome.blow(), 0);
        assert!(!outcome.is_solved(4));
    }

    #[test]
    fn judge_matches_positional_definition() {
        // Compare the bitmask shortcut with the literal definition on a grid of codes
        let codes = ["0123", "3210", "1032", "5678", "0516", "9876", "2301", "1357"];
        for g in codes {
            for s in codes {
                let (guess, secret) = (code(g), code(s));
                let mut hit = 0;
                let mut blow = 0;
                for (i, d) in guess.digits().iter().enumerate() {
                    if secret.digits()[i] == *d {
                        hit += 1;
                    } else if secret.contains(*d) {
                        blow += 1;
                    }
                }
                assert_eq!(Outcome::judge(&guess, &secret), Outcome::new(hit, blow));
            }
        }
    }

    #[test]
    fn judge_is_symmetric_for_unique_digits() {
        let (a, b) = (code("0516"), code("6150"));
        assert_eq!(Outcome::judge(&a, &b), Outcome::judge(&b, &a));
    }

    #[test]
    fn parse_accepted_forms() {
        for input in ["1 2", "1,2", "1/2", "1H2B", "1h 2b", " 1  2 "] {
            assert_eq!(Outcome::parse(input, 4), Ok(Outcome::new(1, 2)), "{input}");
        }
        assert_eq!(Outcome::parse("10 0", 10), Ok(Outcome::new(10, 0)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Outcome::parse("12", 4),
            Err(OutcomeError::Malformed(_))
        ));
        assert!(matches!(
            Outcome::parse("1 2 3", 4),
            Err(OutcomeError::Malformed(_))
        ));
        assert!(matches!(
            Outcome::parse("one two", 4),
            Err(OutcomeError::Malformed(_))
        ));
        assert!(matches!(Outcome::parse("", 4), Err(OutcomeError::Malformed(_))));
    }

    #[test]
    fn parse_requires_hit_before_blow_tags() {
        for input in ["H1B2", "1B2H", "1H2", "1 2B", "B1H2B", "1H2BB"] {
            assert!(
                matches!(Outcome::parse(input, 4), Err(OutcomeError::Malformed(_))),
                "{input}"
            );
        }
        assert_eq!(Outcome::parse("1 , 2", 4), Ok(Outcome::new(1, 2)));
        assert_eq!(Outcome::parse("0H4B", 4), Ok(Outcome::new(0, 4)));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(
            Outcome::parse("3 2", 4),
            Err(OutcomeError::OutOfRange {
                hit: 3,
                blow: 2,
                digits: 4
            })
        );
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::new(2, 1).to_string(), "2H1B");
    }

    #[test]
    fn bucket_counts_partition_candidates() {
        let guess = code("0123");
        let candidates = [code("0123"), code("0132"), code("1023"), code("4567")];
        let counts = bucket_counts(&guess, &candidates);

        assert_eq!(counts.values().sum::<usize>(), candidates.len());
        assert_eq!(counts.get(&Outcome::new(4, 0)), Some(&1));
        assert_eq!(counts.get(&Outcome::new(2, 2)), Some(&2));
        assert_eq!(counts.get(&Outcome::new(0, 0)), Some(&1));
    }

    #[test]
    fn bucket_counts_empty() {
        assert!(bucket_counts(&code("0123"), &[]).is_empty());
    }
}
