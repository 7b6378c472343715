//! Peg colors and the palette they are drawn from
//!
//! The palette owns the letter-code lookup used to decode guesses. It is built
//! once at startup and handed to every operation that needs it.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of colors in the standard palette
pub const PALETTE_SIZE: usize = 6;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Orange,
    Purple,
}

impl Color {
    /// Every color, in legend order
    pub const ALL: [Self; PALETTE_SIZE] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Orange,
        Self::Purple,
    ];

    /// Single uppercase letter used to type this color
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Blue => 'B',
            Self::Orange => 'O',
            Self::Purple => 'P',
        }
    }

    /// Human-readable color name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Blue => "Blue",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed, ordered set of colors a code may use
///
/// Holds the colors in legend order together with the letter lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
    by_letter: FxHashMap<char, Color>,
}

impl Palette {
    /// The six-color palette: (R)ed (G)reen (Y)ellow (B)lue (O)range (P)urple
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, Palette};
    ///
    /// let palette = Palette::standard();
    /// assert_eq!(palette.lookup('O'), Some(Color::Orange));
    /// assert_eq!(palette.lookup('X'), None);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let colors = Color::ALL;
        let by_letter = colors.iter().map(|&c| (c.letter(), c)).collect();
        Self { colors, by_letter }
    }

    /// Colors in legend order
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    /// Number of colors in the palette
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// Always false: a palette holds exactly six colors
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Color at a legend index (0-5)
    ///
    /// # Panics
    /// Panics if `index >= 6`
    #[inline]
    #[must_use]
    pub const fn color_at(&self, index: usize) -> Color {
        self.colors[index]
    }

    /// Look up the color typed as `letter`
    #[inline]
    #[must_use]
    pub fn lookup(&self, letter: char) -> Option<Color> {
        self.by_letter.get(&letter).copied()
    }

    /// Legend line such as `(R)ed (G)reen (Y)ellow (B)lue (O)range (P)urple`
    #[must_use]
    pub fn legend(&self) -> String {
        self.colors
            .iter()
            .map(|c| {
                let name = c.name();
                // Names start with their letter code
                format!("({}){}", c.letter(), &name[1..])
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_six_distinct_colors() {
        let palette = Palette::standard();
        let mut colors = palette.colors().to_vec();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 6);
        assert_eq!(palette.len(), 6);
    }

    #[test]
    fn letters_are_unique() {
        let mut letters: Vec<char> = Color::ALL.iter().map(|c| c.letter()).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 6);
    }

    #[test]
    fn lookup_round_trips_every_color() {
        let palette = Palette::standard();
        for color in Color::ALL {
            assert_eq!(palette.lookup(color.letter()), Some(color));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let palette = Palette::standard();
        assert_eq!(palette.lookup('r'), None);
        assert_eq!(palette.lookup(' '), None);
        assert_eq!(palette.lookup('X'), None);
    }

    #[test]
    fn legend_matches_banner_format() {
        let palette = Palette::standard();
        assert_eq!(
            palette.legend(),
            "(R)ed (G)reen (Y)ellow (B)lue (O)range (P)urple"
        );
    }

    #[test]
    fn color_display_uses_name() {
        assert_eq!(Color::Purple.to_string(), "Purple");
        assert_eq!(format!("{}", Color::Yellow), "Yellow");
    }
}
