//! cnmn - daily word-chain puzzle in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use chrono::{Local, TimeDelta};
use clap::Parser;
use cli::{Cli, Command};
use cnmn::{CnmnConfig, PlayOutcome, PlaySession, Recorded, ResultHistory, SnapshotStore};
use cnmn_chain::{ChainEngine, DailyPuzzle, format_elapsed, share_text};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CnmnConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { puzzle, fresh } => run_play(&config, puzzle, fresh),
        Command::Check { puzzles } => run_check(&puzzles),
        Command::Stats { recent } => run_stats(&config, recent),
    }
}

/// Plays a puzzle, resuming saved progress unless `fresh` is set.
#[instrument(skip(config))]
fn run_play(config: &CnmnConfig, puzzle: Option<PathBuf>, fresh: bool) -> Result<()> {
    let path = puzzle.unwrap_or_else(|| config.puzzle_path(Local::now().date_naive()));
    let puzzle = read_puzzle(&path)?;
    let store = SnapshotStore::new(config.save_dir());

    if fresh {
        store.remove(puzzle.date())?;
    }

    let mut engine = match store.load(puzzle.date())? {
        Some(snapshot) => {
            info!(date = %puzzle.date(), "Resuming saved session");
            ChainEngine::restore(puzzle.chain().clone(), snapshot).with_context(|| {
                format!(
                    "Saved progress for {} does not fit this puzzle; rerun with --fresh",
                    puzzle.date()
                )
            })?
        }
        None => ChainEngine::new(puzzle.chain().clone()),
    };

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let outcome = PlaySession::new(&puzzle, &store, stdin, stdout).run(&mut engine)?;

    let PlayOutcome::Completed(summary) = outcome else {
        return Ok(());
    };

    let glyphs = config.glyph_set();
    println!();
    println!("{}", share_text(puzzle.number(), &summary, &glyphs));

    let history = ResultHistory::open(config.db_path())?;
    match history.record(&puzzle, &summary, &glyphs)? {
        Recorded::New(result) => info!(id = result.id(), "Result saved"),
        Recorded::AlreadyPlayed(result) => {
            println!(
                "(first played {}, {} misses)",
                result.completed_at().format("%Y-%m-%d %H:%M"),
                result.total_misses()
            );
        }
    }
    Ok(())
}

/// Validates feed files, stopping at the first failure.
#[instrument(skip_all, fields(count = puzzles.len()))]
fn run_check(puzzles: &[PathBuf]) -> Result<()> {
    for path in puzzles {
        let puzzle = read_puzzle(path)?;
        println!("ok  {}  #{} {}", path.display(), puzzle.number(), puzzle.date());
    }
    Ok(())
}

/// Prints aggregated stats and the most recent results.
#[instrument(skip(config))]
fn run_stats(config: &CnmnConfig, recent: u32) -> Result<()> {
    let history = ResultHistory::open(config.db_path())?;
    let stats = history.stats()?;

    println!("Played:       {}", stats.played());
    println!(
        "Perfect:      {} ({:.0}%)",
        stats.perfect(),
        stats.perfect_rate()
    );
    println!("Avg misses:   {:.2}", stats.average_misses());
    match stats.best_seconds() {
        Some(seconds) => println!("Best time:    {}", format_elapsed(TimeDelta::seconds(*seconds))),
        None => println!("Best time:    -"),
    }

    let results = history.recent(recent)?;
    if !results.is_empty() {
        println!();
    }
    for result in results {
        println!(
            "#{:<5} {}  {}  {:>6}  {} misses",
            result.puzzle_number(),
            result.puzzle_date(),
            result.glyph_row(),
            format_elapsed(TimeDelta::seconds(*result.elapsed_seconds())),
            result.total_misses()
        );
    }
    Ok(())
}

#[instrument]
fn read_puzzle(path: &Path) -> Result<DailyPuzzle> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    DailyPuzzle::from_json(&json).map_err(|e| {
        warn!(error = %e, "Puzzle rejected");
        anyhow::anyhow!("{}: {}", path.display(), e)
    })
}
