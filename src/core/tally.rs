//! Per-color occurrence counts of a code

use super::{Code, Color, Palette};
use rustc_hash::FxHashMap;

/// How many times each palette color appears in a code
///
/// Every palette color has an entry, colors absent from the code count 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: FxHashMap<Color, u8>,
}

impl Tally {
    /// Count the colors of `code`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, Palette, Tally};
    ///
    /// let palette = Palette::standard();
    /// let secret = Code::decode("RRGB", &palette).unwrap();
    /// let tally = Tally::build(&secret, &palette);
    /// assert_eq!(tally.count(Color::Red), 2);
    /// assert_eq!(tally.count(Color::Purple), 0);
    /// ```
    #[must_use]
    pub fn build(code: &Code, palette: &Palette) -> Self {
        let mut counts: FxHashMap<Color, u8> =
            palette.colors().iter().map(|&c| (c, 0)).collect();
        for color in code.colors() {
            *counts.entry(*color).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `color`
    #[inline]
    #[must_use]
    pub fn count(&self, color: Color) -> u8 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Multiset intersection size: sum over colors of the smaller count
    ///
    /// Symmetric in `self` and `other`.
    #[must_use]
    pub fn overlap(&self, other: &Self, palette: &Palette) -> u8 {
        palette
            .colors()
            .iter()
            .map(|&c| self.count(c).min(other.count(c)))
            .sum()
    }
}
