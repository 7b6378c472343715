//! Deterministic scoring of an explicit secret

use crate::core::{Code, CodeError, Palette, Score, Tally};

/// Score `guess` against `secret`, both given as letter codes
///
/// # Errors
///
/// Returns `CodeError` if either code fails to decode.
pub fn score_codes(secret: &str, guess: &str, palette: &Palette) -> Result<Score, CodeError> {
    let secret = Code::decode(secret, palette)?;
    let guess = Code::decode(guess, palette)?;
    let tally = Tally::build(&secret, palette);
    Ok(Score::calculate(&secret, &guess, &tally, palette))
}
