//! Single-turn play
//!
//! Draws (or takes) a secret, reads one guess and reports the score.

use crate::core::{Code, Palette, Score, Tally};
use crate::output::display::{write_banner, write_retry};
use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Configuration for one round
pub struct GameConfig {
    pub palette: Palette,
    /// Seed for the secret generator; `None` uses the thread RNG
    pub seed: Option<u64>,
    /// Fixed secret, bypassing the generator
    pub secret: Option<Code>,
    /// Print the secret after the score
    pub reveal: bool,
}

impl GameConfig {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            seed: None,
            secret: None,
            reveal: false,
        }
    }

    /// The secret for this round: the fixed one, or a fresh random draw
    #[must_use]
    pub fn resolve_secret(&self) -> Code {
        if let Some(secret) = self.secret {
            debug!(source = "fixed", "secret chosen");
            return secret;
        }

        let secret = match self.seed {
            Some(seed) => Code::random(&self.palette, &mut StdRng::seed_from_u64(seed)),
            None => Code::random(&self.palette, &mut rand::rng()),
        };
        debug!(source = "random", seed = ?self.seed, "secret chosen");
        trace!(%secret, "secret drawn");
        secret
    }
}

/// Result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub guess: Code,
    pub score: Score,
}

/// Run one round against `secret`, reading the guess from `input`
///
/// Undecodable guesses are reported on `output` and the user is prompted
/// again, so only I/O failures and end of input are errors.
///
/// # Errors
///
/// Returns an error if:
/// - Reading from `input` or writing to `output` fails
/// - `input` ends before a valid guess is entered
pub fn run_play<R: BufRead, W: Write>(
    config: &GameConfig,
    secret: &Code,
    mut input: R,
    mut output: W,
) -> Result<PlayOutcome> {
    write_banner(&mut output, &config.palette).context("failed to write banner")?;
    output.flush().context("failed to flush stdout")?;

    let guess = loop {
        let mut buf = Vec::new();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read guess")?;
        if read == 0 {
            bail!("no guess entered");
        }
        // Invalid UTF-8 becomes U+FFFD and is rejected by the decoder
        let line = String::from_utf8_lossy(&buf);

        match Code::decode(&line, &config.palette) {
            Ok(guess) => break guess,
            Err(e) => {
                debug!(input = line.trim(), error = %e, "guess rejected");
                write_retry(&mut output, &e).context("failed to write error")?;
                output.flush().context("failed to flush stdout")?;
            }
        }
    };

    let tally = Tally::build(secret, &config.palette);
    let score = Score::calculate(secret, &guess, &tally, &config.palette);
    debug!(%guess, exact = score.exact(), partial = score.partial(), "guess scored");

    writeln!(output, "{score}").context("failed to write score")?;
    if config.reveal {
        writeln!(output, "secret: {secret}").context("failed to write secret")?;
    }

    Ok(PlayOutcome { guess, score })
}
