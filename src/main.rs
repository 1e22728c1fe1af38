use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{HumanStrategy, MinimaxStrategy, RandomStrategy, Strategy};
use connect_four::config::{AppConfig, StrategyKind};
use connect_four::driver::Match;
use connect_four::game::{GameOutcome, Player};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Strategy for Red (moves first): human, minimax or random
    #[arg(long)]
    red: Option<String>,

    /// Strategy for Yellow: human, minimax or random
    #[arg(long)]
    yellow: Option<String>,

    /// Override minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for random strategies
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(red) = &cli.red {
        config.players.red = red.parse().context("parsing --red")?;
    }
    if let Some(yellow) = &cli.yellow {
        config.players.yellow = yellow.parse().context("parsing --yellow")?;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.seed.is_some() {
        config.players.seed = cli.seed;
    }
    config.validate().context("validating configuration")?;

    let board = config.board.build()?;
    let red = build_strategy(config.players.red, Player::Red, &config);
    let yellow = build_strategy(config.players.yellow, Player::Yellow, &config);
    println!(
        "{} ({}) vs {} ({})\n\n{board}\n",
        Player::Red,
        red.authors(),
        Player::Yellow,
        yellow.authors()
    );

    let result = Match::new(board, red, yellow).run(|record, state| {
        println!(
            "{} plays column {}\n\n{}\n",
            record.player,
            record.column + 1,
            state.board()
        );
    })?;

    match result.outcome {
        GameOutcome::Winner(player) => {
            println!("{player} wins after {} moves!", result.moves.len())
        }
        GameOutcome::Draw => println!("It's a draw!"),
    }

    Ok(())
}

fn build_strategy(kind: StrategyKind, player: Player, config: &AppConfig) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Human => Box::new(HumanStrategy::new(
            player.name(),
            io::stdin(),
            io::stdout(),
        )),
        StrategyKind::Minimax => Box::new(MinimaxStrategy::new(config.search.depth)),
        StrategyKind::Random => match config.players.seed {
            // Different streams for the two sides under one seed
            Some(seed) => Box::new(RandomStrategy::seeded(seed ^ player as u64)),
            None => Box::new(RandomStrategy::new()),
        },
    }
}
