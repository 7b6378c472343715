//! Four-slot color codes
//!
//! A `Code` is used both for the hidden secret and for a decoded guess.

use super::{Color, PALETTE_SIZE, Palette};
use rand::Rng;
use std::fmt;

/// Number of slots in a code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct codes over the palette (6^4)
pub const CODE_SPACE: usize = PALETTE_SIZE.pow(CODE_LENGTH as u32);

/// An ordered sequence of four colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

/// Error type for codes that cannot be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    UnrecognizedColor { letter: char, position: usize },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "code must be exactly {CODE_LENGTH} letters, got {len}")
            }
            Self::UnrecognizedColor { letter, position } => {
                write!(
                    f,
                    "unrecognized color code '{letter}' at position {}",
                    position + 1
                )
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from four colors
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Decode a guess typed as four letter codes
    ///
    /// Surrounding whitespace is ignored. Length is validated before letters.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4
    /// - A letter is not one of the palette's codes
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CodeError, Color, Palette};
    ///
    /// let palette = Palette::standard();
    /// let code = Code::decode("RGYB", &palette).unwrap();
    /// assert_eq!(code.colors()[3], Color::Blue);
    ///
    /// assert_eq!(Code::decode("RGB", &palette), Err(CodeError::InvalidLength(3)));
    /// assert!(Code::decode("RGXB", &palette).is_err());
    /// ```
    pub fn decode(input: &str, palette: &Palette) -> Result<Self, CodeError> {
        let input = input.trim();
        let len = input.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut colors = [Color::Red; CODE_LENGTH];
        for (position, (slot, letter)) in colors.iter_mut().zip(input.chars()).enumerate() {
            *slot = palette
                .lookup(letter)
                .ok_or(CodeError::UnrecognizedColor { letter, position })?;
        }

        Ok(Self(colors))
    }

    /// Draw a code with each slot sampled uniformly, with replacement
    #[must_use]
    pub fn random<R: Rng>(palette: &Palette, rng: &mut R) -> Self {
        let mut colors = [Color::Red; CODE_LENGTH];
        for slot in &mut colors {
            *slot = palette.color_at(rng.random_range(0..palette.len()));
        }
        Self(colors)
    }

    /// Code at `index` in the base-6 enumeration of all codes
    ///
    /// Slot 0 is the most significant digit, so index 0 is `RRRR` and
    /// index 1295 is `PPPP`.
    ///
    /// # Panics
    /// Panics in debug mode if `index >= 1296`
    #[must_use]
    pub fn from_index(index: usize, palette: &Palette) -> Self {
        debug_assert!(index < CODE_SPACE, "Code index must be < 1296");
        let mut colors = [Color::Red; CODE_LENGTH];
        let mut rest = index;
        for slot in colors.iter_mut().rev() {
            *slot = palette.color_at(rest % PALETTE_SIZE);
            rest /= PALETTE_SIZE;
        }
        Self(colors)
    }

    /// Iterate over every possible code in enumeration order
    pub fn all(palette: &Palette) -> impl Iterator<Item = Self> + '_ {
        (0..CODE_SPACE).map(move |i| Self::from_index(i, palette))
    }

    /// Slots of the code
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Letter codes, e.g. `RGYB`
    #[must_use]
    pub fn letters(&self) -> String {
        self.0.iter().map(|c| c.letter()).collect()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}
