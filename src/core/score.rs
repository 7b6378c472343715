//! Mastermind feedback for a guess
//!
//! Scoring counts exact matches positionally, then counts the color overlap
//! between guess and secret as a multiset intersection. Every exact match is
//! also part of the overlap, so the wrong-position count is the difference.

use super::{CODE_LENGTH, Code, Palette, Tally};
use std::fmt;

/// Feedback for one guess: exact matches and right-color-wrong-position matches
///
/// Invariant: `exact + partial <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    exact: u8,
    partial: u8,
}

impl Score {
    /// All four slots exact
    pub const SOLVED: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// Create a score from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `exact + partial > 4`
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        debug_assert!(
            exact as usize + partial as usize <= CODE_LENGTH,
            "Score must not exceed 4 pegs"
        );
        Self { exact, partial }
    }

    /// Score `guess` against `secret`
    ///
    /// `secret_tally` must be the tally of `secret`; it is passed in so it can
    /// be built once per secret.
    ///
    /// # Algorithm
    /// 1. Exact pass: count slots where guess and secret agree
    /// 2. Overlap pass: for each palette color add min(guess count, secret count)
    /// 3. Wrong-position = overlap - exact
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Palette, Score, Tally};
    ///
    /// let palette = Palette::standard();
    /// let secret = Code::decode("RRGB", &palette).unwrap();
    /// let guess = Code::decode("RRRR", &palette).unwrap();
    /// let tally = Tally::build(&secret, &palette);
    ///
    /// // Only two reds are available in the secret, both already exact
    /// let score = Score::calculate(&secret, &guess, &tally, &palette);
    /// assert_eq!((score.exact(), score.partial()), (2, 0));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code, secret_tally: &Tally, palette: &Palette) -> Self {
        let exact = secret
            .colors()
            .iter()
            .zip(guess.colors())
            .filter(|(s, g)| s == g)
            .count() as u8;

        let guess_tally = Tally::build(guess, palette);
        let overlap = guess_tally.overlap(secret_tally, palette);

        Self {
            exact,
            partial: overlap - exact,
        }
    }

    /// Number of exact matches (right color, right slot)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of right-color, wrong-slot matches
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if every slot matched exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

/// Formats as `exact partial`, the program's output line
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.exact, self.partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(secret: &str, guess: &str) -> Score {
        let palette = Palette::standard();
        let secret = Code::decode(secret, &palette).unwrap();
        let guess = Code::decode(guess, &palette).unwrap();
        let tally = Tally::build(&secret, &palette);
        Score::calculate(&secret, &guess, &tally, &palette)
    }

    #[test]
    fn identical_guess_is_solved() {
        let s = score("RGYB", "RGYB");
        assert_eq!(s, Score::new(4, 0));
        assert!(s.is_solved());
        assert_eq!(s, Score::SOLVED);
    }

    #[test]
    fn repeated_guess_color_capped_by_secret() {
        // Overlap for red is min(4, 2) = 2, both already exact
        assert_eq!(score("RRGB", "RRRR"), Score::new(2, 0));
    }

    #[test]
    fn full_permutation_is_all_partial() {
        assert_eq!(score("RGYB", "BYGR"), Score::new(0, 4));
    }

    #[test]
    fn paired_duplicates() {
        // O and P each overlap twice; slots 0 and 3 line up
        assert_eq!(score("OOPP", "OPOP"), Score::new(2, 2));
        assert_eq!(score("OOPP", "PPOO"), Score::new(0, 4));
    }

    #[test]
    fn no_common_colors() {
        let s = score("RRGG", "YYBB");
        assert_eq!(s, Score::new(0, 0));
        assert!(!s.is_solved());
    }

    #[test]
    fn duplicate_in_guess_single_in_secret() {
        // One red in the secret, in slot 3; the guess reds both miss it
        assert_eq!(score("GYBR", "RRGG"), Score::new(0, 2));
        // Red exact in slot 0, the extra red earns nothing
        assert_eq!(score("RGYB", "RROO"), Score::new(1, 0));
    }

    #[test]
    fn duplicate_in_secret_single_in_guess() {
        assert_eq!(score("BBBY", "YBOO"), Score::new(1, 1));
    }

    #[test]
    fn pegs_never_exceed_code_length() {
        let palette = Palette::standard();
        let secrets: Vec<Code> = Code::all(&palette).step_by(11).collect();
        let guesses: Vec<Code> = Code::all(&palette).step_by(13).collect();

        for secret in &secrets {
            let tally = Tally::build(secret, &palette);
            for guess in &guesses {
                let s = Score::calculate(secret, guess, &tally, &palette);
                assert!(
                    s.exact() + s.partial() <= 4,
                    "{secret} vs {guess} gave {s}"
                );
                assert_eq!(s.is_solved(), secret == guess, "{secret} vs {guess}");
            }
        }
    }

    #[test]
    fn solved_only_for_identical_code() {
        let palette = Palette::standard();
        let secret = Code::decode("YOPB", &palette).unwrap();
        let tally = Tally::build(&secret, &palette);
        let solved: Vec<Code> = Code::all(&palette)
            .filter(|g| Score::calculate(&secret, g, &tally, &palette).is_solved())
            .collect();
        assert_eq!(solved, vec![secret]);
    }

    #[test]
    fn display_is_two_integers() {
        assert_eq!(score("RGYB", "BYGR").to_string(), "0 4");
        assert_eq!(Score::SOLVED.to_string(), "4 0");
    }
}
