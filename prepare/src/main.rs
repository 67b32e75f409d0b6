use anyhow::Context;
use clap::Parser;
use halfkp_features::{GameRecord, Shape, pgn, tensor, walker};
use std::io::{self, Read, Write};

const SAMPLE: &str = include_str!("../../demos/fischer_spassky_1992.pgn");

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Encode the bundled sample game instead of reading PGN from stdin
    #[arg(long)]
    sample: bool,

    /// Number of games walked in parallel
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let result = if args.sample {
        run(SAMPLE.as_bytes(), args.threads, &mut io::stdout().lock())
    } else {
        run(io::stdin().lock(), args.threads, &mut io::stdout().lock())
    };
    if let Err(err) = result {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(input: impl Read, threads: usize, out: &mut impl Write) -> anyhow::Result<()> {
    let games = read_input(input)?;
    log::info!("encoding {} game(s) on {} thread(s)", games.len(), threads);

    let results = walker::walk_all(&games, threads)?;
    for (n, (game, positions)) in games.iter().zip(results).enumerate() {
        let positions = positions.with_context(|| format!("failed to walk game {}", n + 1))?;
        let tensor = tensor::to_tensor(&positions);
        writeln!(
            out,
            "game {}: {} - {}: {}",
            n + 1,
            game.tag("White").unwrap_or("?"),
            game.tag("Black").unwrap_or("?"),
            Shape::of(&tensor)
        )?;
    }
    Ok(())
}

fn read_input(input: impl Read) -> anyhow::Result<Vec<GameRecord>> {
    let games = pgn::read_games(input).context("invalid pgn")?;
    if games.is_empty() {
        return Err(anyhow::Error::msg("no games in input"));
    }
    Ok(games)
}
