extern crate hackatari_core as hacks;

mod config;
mod trace;

use anyhow::Context;
use clap::Parser;
use config::{load_config, GameName, Output};
use hacks::Game;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use trace::Replay;

/// Replays a RAM trace through Atari game modifications
#[derive(Debug, Parser)]
#[command(name = "hackatari-replay", version, about, long_about = None)]
struct Cli {
    /// TOML file with `game`, `modifications` and `[output]`
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Game to modify, overrides the config file
    #[arg(short, long)]
    game: Option<Game>,

    /// Modification name, may be repeated; added after the ones from the config
    #[arg(short, long = "modification", value_name = "NAME")]
    modifications: Vec<String>,

    /// Print only the cells the hooks changed
    #[arg(long)]
    only_changed: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Trace file, one hex RAM snapshot per line; `-` reads stdin
    #[arg(value_name = "TRACE")]
    trace: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();

    let (game, mut names, output) = match &cli.config {
        Some(path) => {
            let config = load_config(path)?;
            (Some(config.game), config.modifications, config.output)
        }
        None => (None, Vec::new(), Output::default()),
    };
    let game = cli
        .game
        .map(GameName::new)
        .or(game)
        .context("no game given, use --game or set `game` in the config")?;
    names.extend(cli.modifications.iter().cloned());
    log::debug!("{:?} with modifications {:?}", *game, names);

    let hooks = game.configure(&names)?;
    if hooks.is_empty() {
        log::warn!("no modification applies to {:?}, RAM passes through unchanged", *game);
    }
    let mut replay = Replay::new(hooks, cli.only_changed || output.only_changed);

    let stdout = io::stdout();
    if cli.trace.as_os_str() == "-" {
        replay.run(io::stdin().lock(), stdout.lock())?;
    } else {
        let file = File::open(&cli.trace)
            .with_context(|| format!("cannot open trace {}", cli.trace.display()))?;
        replay.run(BufReader::new(file), stdout.lock())?;
    }
    Ok(())
}
