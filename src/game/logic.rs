//! Secret holder and referee

use crate::core::{Code, CodeError, Outcome};
use rand::Rng;

/// One game's secret and the rules for guessing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret: Code,
}

impl Game {
    /// Start a game with a random secret of `digits` distinct digits
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` unless `1 <= digits <= 10`.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::game::Game;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let game = Game::new(4, &mut StdRng::seed_from_u64(1)).unwrap();
    /// let guess = game.validate_guess("0123").unwrap();
    /// assert!(game.judge(&guess).hit() <= 4);
    /// ```
    pub fn new<R: Rng + ?Sized>(digits: usize, rng: &mut R) -> Result<Self, CodeError> {
        Ok(Self::with_secret(Code::random(digits, rng)?))
    }

    /// Start a game with a known secret
    #[must_use]
    pub const fn with_secret(secret: Code) -> Self {
        Self { secret }
    }

    #[inline]
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.secret.len()
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Hit/Blow feedback for `guess` against the secret
    #[must_use]
    pub fn judge(&self, guess: &Code) -> Outcome {
        Outcome::judge(guess, &self.secret)
    }

    /// Parse a player's guess for this game
    ///
    /// # Errors
    /// Returns `CodeError` naming the first problem: a non-digit character, the
    /// wrong number of digits, or a repeated digit.
    pub fn validate_guess(&self, input: &str) -> Result<Code, CodeError> {
        Code::parse(input.trim(), self.digits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn random_secret_has_unique_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for digits in 1..=10 {
            let game = Game::new(digits, &mut rng).unwrap();
            assert_eq!(game.digits(), digits);
            assert_eq!(game.secret().mask().count_ones() as usize, digits);
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let a = Game::new(4, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = Game::new(4, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn rejects_unsupported_lengths() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Game::new(0, &mut rng), Err(CodeError::InvalidLength(0)));
        assert_eq!(Game::new(11, &mut rng), Err(CodeError::InvalidLength(11)));
    }

    #[test]
    fn judges_against_secret() {
        let game = Game::with_secret(code("1234"));
        assert_eq!(game.judge(&code("4321")), Outcome::new(0, 4));
        assert_eq!(game.judge(&code("1325")), Outcome::new(1, 2));
        assert!(game.judge(&code("1234")).is_solved(4));
    }

    #[test]
    fn validate_guess_reports_first_problem() {
        let game = Game::with_secret(code("1234"));

        assert_eq!(game.validate_guess(" 5678\n"), Ok(code("5678")));
        assert_eq!(game.validate_guess("12a4"), Err(CodeError::NonDigit('a')));
        assert_eq!(
            game.validate_guess("12345"),
            Err(CodeError::WrongLength {
                expected: 4,
                found: 5
            })
        );
        assert_eq!(game.validate_guess("1224"), Err(CodeError::DuplicateDigit(2)));
    }
}
