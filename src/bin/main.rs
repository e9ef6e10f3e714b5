use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use itertools::Itertools;
use log::LevelFilter;

use zerosum::algorithm::game::solve_game;
use zerosum::algorithm::simplex::settings::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, Settings};
use zerosum::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;
use zerosum::data::games::Game;
use zerosum::io::read_payoff_matrix;

/// Solves two-player zero-sum matrix games with the Simplex method.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Opts {
    /// File containing the payoff matrix, one row per line
    #[arg(required_unless_present = "game", conflicts_with = "game")]
    payoff_file: Option<PathBuf>,
    /// Solve a built-in game instead: rock-paper-scissors, matching-pennies or morra
    #[arg(long)]
    game: Option<Game>,
    /// Maximum number of fingers in morra
    #[arg(long, default_value_t = 2)]
    fingers: usize,
    /// Give up after this many Simplex iterations
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Values within this distance of zero are treated as zero
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
    /// Rule for choosing the entering column: largest-coefficient or first-profitable
    #[arg(long, default_value_t = PivotRuleKind::LargestCoefficient)]
    pivot_rule: PivotRuleKind,
    /// Log the tableau in every iteration
    #[arg(long)]
    trace: bool,
    /// More logging, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Opts {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        if self.trace { level.max(LevelFilter::Info) } else { level }
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    env_logger::Builder::new()
        .filter_level(opts.level())
        .parse_default_env()
        .init();

    let payoff = match (&opts.payoff_file, opts.game) {
        (_, Some(game)) => {
            anyhow::ensure!(game != Game::Morra || opts.fingers > 0, "morra needs at least one finger");
            println!("Game: {}", game);
            game.payoff_matrix::<f64>(opts.fingers)
        },
        (Some(path), None) => {
            println!("Reading payoff matrix: \"{}\"...", path.to_string_lossy());
            read_payoff_matrix(path)
                .with_context(|| format!("couldn't read payoff matrix from {:?}", path))?
        },
        (None, None) => anyhow::bail!("either a payoff file or --game is required"),
    };

    anyhow::ensure!(opts.tolerance >= 0f64, "tolerance can't be negative");
    let settings = Settings::default()
        .with_max_iterations(opts.max_iterations)
        .with_tolerance(opts.tolerance)
        .with_pivot_rule(opts.pivot_rule)
        .with_trace(opts.trace);

    println!("Payoff matrix:\n{}", payoff);
    let (positive, shift) = payoff.make_positive();
    if shift > 0f64 {
        println!("Shifted by {} to be strictly positive:\n{}", shift, positive);
    }

    let result = solve_game(&payoff, &settings).context("couldn't solve the game")?;

    let format = |prefix: &str, strategy: &[f64]| {
        strategy.iter()
            .enumerate()
            .map(|(i, probability)| format!("{}{}={:.4}", prefix, i + 1, probability))
            .join(" ")
    };
    println!("Row player:    {}", format("x", result.strategy_x()));
    println!("Column player: {}", format("y", result.strategy_y()));
    println!("Game value:    {:.4}", result.value());

    Ok(())
}
