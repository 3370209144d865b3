//! Strictly Darts - command-line match runner.

#![warn(missing_docs)]

mod cli;
mod players;
mod runner;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use players::BotThrower;
use rand::SeedableRng;
use rand::rngs::StdRng;
use runner::{MatchRunner, MatchSummary};
use settings::Overrides;
use std::path::PathBuf;
use strictly_darts::{BotLevel, ScoreBand, ScoringEngine, suggested_checkout};
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            start,
            legs,
            best_of,
            home,
            away,
            seed,
            pace,
        } => run_match(
            config,
            Overrides {
                start,
                legs,
                best_of,
            },
            &home,
            &away,
            seed,
            pace,
        ),
        Command::Checkout { score } => {
            print_checkout(score);
            Ok(())
        }
        Command::Bots => {
            print_bots();
            Ok(())
        }
    }
}

/// Plays a bot-versus-bot match and prints the summary.
#[instrument(skip(config, overrides))]
fn run_match(
    config: Option<PathBuf>,
    overrides: Overrides,
    home: &str,
    away: &str,
    seed: Option<u64>,
    pace: bool,
) -> Result<()> {
    let config = settings::resolve_config(config.as_deref(), overrides)?;
    let home = BotLevel::lookup(home).with_context(|| format!("Unknown bot: {home}"))?;
    let away = BotLevel::lookup(away).with_context(|| format!("Unknown bot: {away}"))?;

    // Each bot gets its own stream so one seed reproduces the whole match.
    let (home_rng, away_rng) = match seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
    };
    info!(?seed, "Bots seeded");

    let summary = MatchRunner::new(
        ScoringEngine::new(config),
        Box::new(BotThrower::new(*home, home_rng)),
        Box::new(BotThrower::new(*away, away_rng)),
    )
    .with_pace(pace)
    .run()?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &MatchSummary) {
    println!("{} wins after {} legs", summary.winner, summary.legs_played);
    for player in &summary.players {
        let stats = player.stats();
        let best_leg = stats
            .best_leg()
            .map(|darts| format!("{darts} darts"))
            .unwrap_or_else(|| "-".to_string());
        println!();
        println!("{}", player.name());
        println!("  legs             {}", player.legs());
        println!("  average          {:.2}", stats.average());
        println!("  best leg         {best_leg}");
        println!("  highest checkout {}", stats.highest_checkout());
        for band in ScoreBand::iter() {
            println!("  {:<16} {}", band.to_string(), stats.band_count(band));
        }
    }
}

fn print_checkout(score: u32) {
    println!("{}", checkout_line(score));
}

fn checkout_line(score: u32) -> String {
    match suggested_checkout(score) {
        Some(finish) => format!("{score}: {finish}"),
        None => format!("{score}: no checkout"),
    }
}

fn print_bots() {
    println!("{:<3} {:<16} {:>6} {:>9} {:>6}", "id", "name", "avg", "checkout", "sd");
    for level in BotLevel::catalogue() {
        println!(
            "{:<3} {:<16} {:>6.1} {:>8.0}% {:>6.1}",
            level.id,
            level.name,
            level.avg,
            level.checkout_rate * 100.0,
            level.consistency
        );
    }
}
