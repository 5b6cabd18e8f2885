//! Self-play CLI
//!
//! Pits two classical engines against each other and prints the game.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use classical_engine::{ClassicalEngine, Difficulty, EngineConfig};
use selfplay::{GameConfig, play_game};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [--white LEVEL] [--black LEVEL] [--depth D] [--move-time MS]");
    println!("           [--max-plies N] [--config FILE] [--seed N] [--record FILE]");
    println!();
    println!("Levels: easy, medium, hard (default: hard)");
    println!("Logging is controlled with RUST_LOG, e.g. RUST_LOG=classical_engine=debug");
}

struct Args {
    white: Option<Difficulty>,
    black: Option<Difficulty>,
    config: Option<String>,
    record: Option<String>,
    seed: Option<u64>,
    game: GameConfig,
}

fn parse_difficulty(text: &str) -> Result<Difficulty> {
    match text.to_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => bail!("unknown level '{other}'"),
    }
}

fn parse_args(raw: &[String]) -> Result<Option<Args>> {
    let mut args = Args {
        white: None,
        black: None,
        config: None,
        record: None,
        seed: None,
        game: GameConfig::default(),
    };

    let mut i = 0;
    while i < raw.len() {
        let flag = raw[i].as_str();
        if matches!(flag, "--help" | "-h") {
            return Ok(None);
        }
        let value = raw
            .get(i + 1)
            .with_context(|| format!("{flag} needs a value"))?;
        match flag {
            "--white" | "-w" => args.white = Some(parse_difficulty(value)?),
            "--black" | "-b" => args.black = Some(parse_difficulty(value)?),
            "--depth" | "-d" => args.game.depth = Some(value.parse().context("bad --depth")?),
            "--move-time" => {
                let ms: u64 = value.parse().context("bad --move-time")?;
                args.game.move_time = Some(Duration::from_millis(ms));
            }
            "--max-plies" => args.game.max_plies = value.parse().context("bad --max-plies")?,
            "--config" | "-c" => args.config = Some(value.clone()),
            "--seed" => args.seed = Some(value.parse().context("bad --seed")?),
            "--record" | "-r" => args.record = Some(value.clone()),
            other => bail!("unknown option '{other}'"),
        }
        i += 2;
    }
    Ok(Some(args))
}

fn build_engine(base: &EngineConfig, level: Option<Difficulty>, seed: Option<u64>) -> ClassicalEngine {
    let mut config = base.clone();
    if let Some(level) = level {
        config.difficulty = level;
    }
    let engine = ClassicalEngine::with_config(config);
    match seed {
        Some(seed) => engine.with_seed(seed),
        None => engine,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let Some(args) = parse_args(&raw)? else {
        print_usage();
        return Ok(());
    };

    let base = match &args.config {
        Some(path) => EngineConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => EngineConfig::default(),
    };

    let mut white = build_engine(&base, args.white, args.seed);
    let mut black = build_engine(&base, args.black, args.seed.map(|s| s.wrapping_add(1)));

    println!(
        "=== {:?} (white) vs {:?} (black) ===",
        white.config().difficulty,
        black.config().difficulty
    );

    let record = play_game(&mut white, &mut black, &args.game);
    let (board, _) = record.replay()?;

    println!("{board}");
    println!("Moves: {}", record.moves.join(" "));
    println!("Result: {} ({:?})", record.result.score(), record.result);

    if let Some(path) = &args.record {
        record.save(path).with_context(|| format!("writing {path}"))?;
        println!("Record written to {path}");
    }
    Ok(())
}
