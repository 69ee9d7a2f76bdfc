//! dice-race - command line runner
//!
//! Usage:
//!   dice-race [demo] [--seed N]
//!   dice-race play --players N --dice KIND --target T [--seed N] [--lucky ID]
//!   dice-race procedural [--players N] [--target T] [--seed N]
//!
//! `--seed` is accepted before or after the subcommand.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dice_race::core::{GameRng, PlayerId, SessionConfig};
use dice_race::dice::DiceKind;
use dice_race::driver::Driver;
use dice_race::events::LineReporter;
use dice_race::procedural::{self, DEFAULT_PLAYERS, DEFAULT_TARGET};

#[derive(Parser)]
#[command(name = "dice-race")]
#[command(about = "Race players to a target score with interchangeable dice")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Random seed for a reproducible run
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the three reference sessions (the default)
    Demo,
    /// Play a single session
    Play(PlayArgs),
    /// Run the procedural two-player race
    Procedural(ProceduralArgs),
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Number of players
    #[arg(long, short = 'p', default_value_t = 2)]
    players: usize,

    /// Dice variant (standard6, russian-roulette, d20, rigged)
    #[arg(long, short = 'd', default_value = "standard6")]
    dice: DiceKind,

    /// Score needed to win
    #[arg(long, short = 't', default_value_t = 20)]
    target: i64,

    /// Give this player (1-based) the lucky capability
    #[arg(long)]
    lucky: Option<u8>,
}

#[derive(Args, Debug)]
struct ProceduralArgs {
    /// Number of players
    #[arg(long, short = 'p', default_value_t = DEFAULT_PLAYERS)]
    players: usize,

    /// Score needed to win
    #[arg(long, short = 't', default_value_t = DEFAULT_TARGET)]
    target: i64,
}

fn main() -> Result<()> {
    // Logs go to stderr so the game lines on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Demo) => run_demo(cli.seed),
        Some(Commands::Play(args)) => run_play(args, cli.seed),
        Some(Commands::Procedural(args)) => {
            let stdout = io::stdout();
            run_procedural(&args, cli.seed, &mut stdout.lock())
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> GameRng {
    let (rng, seed) = match seed {
        Some(seed) => (GameRng::new(seed), seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed, "rng seeded");
    rng
}

fn run_demo(seed: Option<u64>) -> Result<()> {
    let mut driver = Driver::demo(seeded_rng(seed)).context("failed to build demo line-up")?;
    let mut reporter = LineReporter::stdout();

    let reports = driver.run(&mut reporter)?;
    reporter.finish().context("failed to write game output")?;

    for report in &reports {
        tracing::debug!(
            session = %report.outcome.session,
            rng_seed = report.rng_start.seed,
            rng_word_pos = %report.rng_start.word_pos,
            "replay point"
        );
    }
    Ok(())
}

fn run_play(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let mut config = SessionConfig::new(args.players, args.dice, args.target);
    if let Some(lucky) = args.lucky {
        config = config.with_lucky_player(PlayerId::new(lucky));
    }

    let mut driver = Driver::new(seeded_rng(seed));
    driver.add_session(&config).context("invalid session")?;

    let mut reporter = LineReporter::stdout();
    driver.run(&mut reporter)?;
    reporter.finish().context("failed to write game output")?;
    Ok(())
}

fn run_procedural<W: Write>(args: &ProceduralArgs, seed: Option<u64>, out: &mut W) -> Result<()> {
    let mut rng = seeded_rng(seed);

    let outcome = procedural::race(&mut rng, args.players, args.target, out)?;
    tracing::info!(winner = outcome.winner, moves = outcome.moves, "race finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_seed_before_or_after_subcommand() {
        let cases: [&[&str]; 7] = [
            &["dice-race", "--seed", "5"],
            &["dice-race", "--seed", "5", "demo"],
            &["dice-race", "demo", "--seed", "5"],
            &["dice-race", "--seed", "5", "play", "--dice", "d20"],
            &["dice-race", "play", "--dice", "d20", "--seed", "5"],
            &["dice-race", "--seed", "5", "procedural", "--target", "15"],
            &["dice-race", "procedural", "--target", "15", "--seed", "5"],
        ];
        for args in cases {
            assert_eq!(parse(args).seed, Some(5), "{:?}", args);
        }
    }

    #[test]
    fn test_no_seed_means_entropy() {
        assert_eq!(parse(&["dice-race", "procedural"]).seed, None);
    }

    #[test]
    fn test_seeded_procedural_is_replayable() {
        let run = |args: &[&str]| {
            let cli = parse(args);
            let Some(Commands::Procedural(race_args)) = cli.command else {
                panic!("expected procedural subcommand");
            };
            let mut out: Vec<u8> = Vec::new();
            run_procedural(&race_args, cli.seed, &mut out).unwrap();
            out
        };

        let leading = run(&["dice-race", "--seed", "5", "procedural", "--target", "15"]);
        let trailing = run(&["dice-race", "procedural", "--target", "15", "--seed", "5"]);

        assert!(!leading.is_empty());
        assert_eq!(leading, run(&["dice-race", "--seed", "5", "procedural", "--target", "15"]));
        assert_eq!(leading, trailing);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
