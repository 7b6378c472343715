//! Mastermind - CLI
//!
//! Single-turn Mastermind: guess a hidden four-color code and get scored.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mastermind::{
    commands::{GameConfig, analyze_guess, run_play, score_codes},
    core::{Code, Palette},
    output::print_analysis_result,
};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Single-turn Mastermind guess evaluator",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Options for the default play mode
    #[command(flatten)]
    play: PlayArgs,
}

/// Options that only apply to a round of play
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
struct PlayArgs {
    /// Seed for the secret generator (reproducible secrets)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Use this secret instead of a random one, e.g. RGYB
    #[arg(long)]
    secret: Option<String>,

    /// Print the secret after scoring
    #[arg(short, long)]
    reveal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess the hidden code once (default)
    Play(PlayArgs),

    /// Score a guess against a given secret
    Score {
        /// The secret, as four letter codes
        secret: String,

        /// The guess, as four letter codes
        guess: String,
    },

    /// Show how a guess splits all possible secrets
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let palette = Palette::standard();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play(cli.play));

    match command {
        Commands::Play(args) => {
            let config = game_config(palette, &args)?;
            run_play_command(&config)
        }
        Commands::Score { secret, guess } => {
            let score = score_codes(&secret, &guess, &palette)
                .with_context(|| format!("cannot score {guess} against {secret}"))?;
            println!("{score}");
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess, &palette)
                .with_context(|| format!("cannot analyze {guess}"))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn game_config(palette: Palette, args: &PlayArgs) -> Result<GameConfig> {
    let mut config = GameConfig::new(palette);
    config.seed = args.seed;
    config.reveal = args.reveal;
    config.secret = args
        .secret
        .as_deref()
        .map(|s| Code::decode(s, &config.palette))
        .transpose()
        .context("invalid --secret")?;
    Ok(config)
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let secret = config.resolve_secret();
    let stdin = io::stdin();
    run_play(config, &secret, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mastermind").chain(args.iter().copied()))
    }

    #[test]
    fn play_options_before_default_command() {
        let cli = parse(&["--seed", "5", "--reveal"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.play.seed, Some(5));
        assert!(cli.play.reveal);
    }

    #[test]
    fn play_options_after_play() {
        let cli = parse(&["play", "--secret", "RGYB"]).unwrap();
        match cli.command {
            Some(Commands::Play(args)) => assert_eq!(args.secret.as_deref(), Some("RGYB")),
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn play_options_rejected_on_other_commands() {
        assert!(parse(&["analyze", "RRGG", "--reveal"]).is_err());
        assert!(parse(&["--seed", "5", "score", "RGYB", "BYGR"]).is_err());
        assert!(parse(&["score", "RGYB", "BYGR", "--secret", "OOPP"]).is_err());
    }

    #[test]
    fn bad_secret_option_is_an_error() {
        let args = PlayArgs {
            secret: Some("RGX".to_string()),
            ..PlayArgs::default()
        };
        let err = game_config(Palette::standard(), &args).err().unwrap();
        assert!(format!("{err:#}").contains("code must be exactly 4 letters, got 3"));
    }
}
