//! Headless auto-battler runner.
//!
//! Runs seeded battles without graphics: for CI, balance sweeps, and
//! eyeballing fights as ASCII frames.
//!
//! # Usage
//!
//! ```bash
//! # One round with the built-in catalog and default team
//! cargo run -p arena_headless
//!
//! # Ten rounds, custom team, verbose combat log on stderr
//! cargo run -p arena_headless -- --rounds 10 --team Garen,Vi,Shen --verbose
//!
//! # External catalog and an ASCII frame per round
//! cargo run -p arena_headless -- --catalog data/units.ron --frames
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arena_core::battle::BattleResult;
use arena_core::catalog::builtin_catalog;
use arena_headless::loader;
use arena_headless::runner::{run, RunConfig};

#[derive(Parser)]
#[command(name = "arena_headless")]
#[command(about = "Headless auto-battler runner for CI and balance testing")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Starting random seed
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Number of rounds to fight
    #[arg(short, long, default_value = "1")]
    rounds: u32,

    /// Player team as comma-separated template names
    #[arg(long, default_value = "Garen,Ahri,Ezreal", value_delimiter = ',')]
    team: Vec<String>,

    /// Enemies drawn per round
    #[arg(long, default_value = "3")]
    enemies: usize,

    /// Path to a RON catalog file (defaults to the built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print an ASCII frame after each round
    #[arg(long)]
    frames: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is for round output
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let catalog = match &cli.catalog {
        Some(path) => match loader::load_catalog(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "failed to load catalog");
                std::process::exit(1);
            }
        },
        None => builtin_catalog(),
    };

    let config = RunConfig {
        seed: cli.seed,
        rounds: cli.rounds,
        team: cli.team,
        enemies: cli.enemies,
        show_frames: cli.frames,
    };
    let summaries = run(&config, &catalog);

    let mut wins = 0u32;
    let mut gold = 0u32;
    let mut hp_lost = 0u32;
    for summary in &summaries {
        let outcome = match summary.result {
            Some(BattleResult::PlayerWin) => {
                wins += 1;
                "win"
            }
            Some(BattleResult::EnemyWin) => "loss",
            None => "stalemate",
        };
        if let Some(reward) = summary.reward {
            gold += reward.gold;
            hp_lost += reward.player_damage;
        }
        println!(
            "round {:>3}: {outcome:<9} ticks {:>6}  survivors {}v{}",
            summary.round, summary.ticks, summary.player_survivors, summary.enemy_survivors
        );
    }

    println!(
        "total: {wins}/{} wins, {gold} gold, {hp_lost} hp lost",
        summaries.len()
    );
}
