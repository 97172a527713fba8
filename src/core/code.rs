//! Digit-sequence representation
//!
//! A `Code` is an ordered sequence of distinct decimal digits. It is used both for
//! secrets and for guesses. Alongside the digits it keeps a bitmask of which digits
//! are present so that Hit/Blow feedback can be computed without nested scans.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Largest supported code length (every decimal digit used once)
pub const MAX_DIGITS: usize = 10;

/// An ordered sequence of unique digits in `0..=9`
///
/// Equality and hashing are by value, so a `Code` can key hash sets directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    digits: [u8; MAX_DIGITS],
    len: u8,
    mask: u16,
}

/// Error type for invalid digit sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Length outside `1..=10`
    InvalidLength(usize),
    /// Length does not match the game's digit count
    WrongLength { expected: usize, found: usize },
    /// Input contained something other than `0`-`9`
    NonDigit(char),
    /// A numeric digit above 9
    DigitOutOfRange(u8),
    /// The same digit appears more than once
    DuplicateDigit(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must have between 1 and {MAX_DIGITS} digits, got {len}")
            }
            Self::WrongLength { expected, found } => {
                write!(f, "Code must be exactly {expected} digits, got {found}")
            }
            Self::NonDigit(ch) => write!(f, "Code must contain only digits, found '{ch}'"),
            Self::DigitOutOfRange(d) => write!(f, "Digit {d} is out of range 0-9"),
            Self::DuplicateDigit(d) => write!(f, "Digit {d} is used more than once"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from a digit slice
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The slice is empty or longer than 10
    /// - A digit is greater than 9
    /// - A digit is repeated
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::Code;
    ///
    /// let code = Code::new(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.to_string(), "1234");
    ///
    /// assert!(Code::new(&[1, 1, 2, 3]).is_err());
    /// assert!(Code::new(&[]).is_err());
    /// ```
    pub fn new(digits: &[u8]) -> Result<Self, CodeError> {
        if digits.is_empty() || digits.len() > MAX_DIGITS {
            return Err(CodeError::InvalidLength(digits.len()));
        }

        let mut mask = 0u16;
        for &d in digits {
            if d > 9 {
                return Err(CodeError::DigitOutOfRange(d));
            }
            if mask & (1 << d) != 0 {
                return Err(CodeError::DuplicateDigit(d));
            }
            mask |= 1 << d;
        }

        Ok(Self::from_unique(digits))
    }

    /// Build a code from digits already known to be unique and in range
    pub(crate) fn from_unique(digits: &[u8]) -> Self {
        debug_assert!(!digits.is_empty() && digits.len() <= MAX_DIGITS);

        let mut buf = [0u8; MAX_DIGITS];
        let mut mask = 0u16;
        for (slot, &d) in buf.iter_mut().zip(digits) {
            *slot = d;
            mask |= 1 << d;
        }

        Self {
            digits: buf,
            len: digits.len() as u8,
            mask,
        }
    }

    /// Parse player input such as `"0123"` for a game of `expected_len` digits
    ///
    /// Checks are applied in order: digits only, exact length, no duplicates.
    ///
    /// # Errors
    /// Returns the first `CodeError` encountered.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::{Code, CodeError};
    ///
    /// assert!(Code::parse("0123", 4).is_ok());
    /// assert_eq!(Code::parse("01a3", 4), Err(CodeError::NonDigit('a')));
    /// assert_eq!(
    ///     Code::parse("012", 4),
    ///     Err(CodeError::WrongLength { expected: 4, found: 3 })
    /// );
    /// assert_eq!(Code::parse("0113", 4), Err(CodeError::DuplicateDigit(1)));
    /// ```
    pub fn parse(input: &str, expected_len: usize) -> Result<Self, CodeError> {
        let code: Self = input.parse()?;
        if code.len() == expected_len {
            Ok(code)
        } else {
            Err(CodeError::WrongLength {
                expected: expected_len,
                found: code.len(),
            })
        }
    }

    /// The code `0, 1, 2, …, len-1`
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if `len` is 0 or greater than 10.
    pub fn sequential(len: usize) -> Result<Self, CodeError> {
        if len == 0 || len > MAX_DIGITS {
            return Err(CodeError::InvalidLength(len));
        }
        let digits: Vec<u8> = (0..len as u8).collect();
        Ok(Self::from_unique(&digits))
    }

    /// Draw a random secret of `len` distinct digits from the given RNG
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if `len` is 0 or greater than 10.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::Code;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let secret = Code::random(4, &mut rng).unwrap();
    /// assert_eq!(secret.len(), 4);
    /// ```
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, CodeError> {
        if len == 0 || len > MAX_DIGITS {
            return Err(CodeError::InvalidLength(len));
        }
        let mut pool: [u8; MAX_DIGITS] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        pool.shuffle(rng);
        Ok(Self::from_unique(&pool[..len]))
    }

    /// Number of digits
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false for a constructed code
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The digits as a slice
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// Bitmask with bit `d` set for each digit `d` present
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u16 {
        self.mask
    }

    /// Check if the code contains a digit anywhere
    #[inline]
    #[must_use]
    pub const fn contains(&self, digit: u8) -> bool {
        digit <= 9 && self.mask & (1 << digit) != 0
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut digits = Vec::with_capacity(trimmed.len());
        for ch in trimmed.chars() {
            let d = ch.to_digit(10).ok_or(CodeError::NonDigit(ch))?;
            digits.push(d as u8);
        }
        Self::new(&digits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_creation_valid() {
        let code = Code::new(&[4, 0, 9, 2]).unwrap();
        assert_eq!(code.digits(), &[4, 0, 9, 2]);
        assert_eq!(code.len(), 4);
        assert!(!code.is_empty());
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new(&[]), Err(CodeError::InvalidLength(0)));
        let too_long = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
        assert_eq!(Code::new(&too_long), Err(CodeError::InvalidLength(11)));
    }

    #[test]
    fn code_creation_rejects_duplicates_and_range() {
        assert_eq!(Code::new(&[1, 2, 1]), Err(CodeError::DuplicateDigit(1)));
        assert_eq!(Code::new(&[1, 12]), Err(CodeError::DigitOutOfRange(12)));
    }

    #[test]
    fn code_full_length_allowed() {
        let code = Code::new(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        assert_eq!(code.len(), MAX_DIGITS);
        assert_eq!(code.mask(), 0b11_1111_1111);
    }

    #[test]
    fn code_mask_and_contains() {
        let code = Code::new(&[0, 3, 9]).unwrap();
        assert_eq!(code.mask(), 0b10_0000_1001);
        assert!(code.contains(0));
        assert!(code.contains(9));
        assert!(!code.contains(5));
        assert!(!code.contains(12));
    }

    #[test]
    fn parse_checks_in_order() {
        // Non-digit reported before the length problem
        assert_eq!(Code::parse("1a", 4), Err(CodeError::NonDigit('a')));
        assert_eq!(
            Code::parse("12345", 4),
            Err(CodeError::WrongLength {
                expected: 4,
                found: 5
            })
        );
        assert_eq!(Code::parse("1223", 4), Err(CodeError::DuplicateDigit(2)));
        assert_eq!(Code::parse(" 5678 ", 4).unwrap().to_string(), "5678");
    }

    #[test]
    fn parse_rejects_signs_and_spaces_inside() {
        assert_eq!(Code::parse("-123", 4), Err(CodeError::NonDigit('-')));
        assert_eq!(Code::parse("12 34", 4), Err(CodeError::NonDigit(' ')));
    }

    #[test]
    fn sequential_codes() {
        assert_eq!(Code::sequential(4).unwrap().to_string(), "0123");
        assert_eq!(Code::sequential(1).unwrap().to_string(), "0");
        assert!(Code::sequential(0).is_err());
        assert!(Code::sequential(11).is_err());
    }

    #[test]
    fn random_codes_are_valid_and_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 1..=MAX_DIGITS {
            let code = Code::random(len, &mut rng).unwrap();
            assert_eq!(code.len(), len);
            // Round trip through validation proves uniqueness
            assert_eq!(Code::new(code.digits()), Ok(code));
        }

        let a = Code::random(4, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = Code::random(4, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn equality_is_by_value() {
        let a: Code = "0123".parse().unwrap();
        let b = Code::new(&[0, 1, 2, 3]).unwrap();
        let c: Code = "0132".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = rustc_hash::FxHashSet::default();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn code_display() {
        let code = Code::new(&[0, 5, 2]).unwrap();
        assert_eq!(format!("{code}"), "052");
    }
}
