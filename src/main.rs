use std::path::PathBuf;

use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_gomoku::prelude::*;

/// A thin driver around the engine: reads an optional board file, asks for
/// one move, prints it. It owns no UI, no turn loop, no win detection.
/// Those are the collaborator's job.
#[derive(Clone, Debug, Parser)]
#[command(about = "Computes the engine's next move for a Gomoku position.")]
struct Options {
    #[arg(short, long)]
    log_level: Option<String>,

    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u8,

    /// Which color the engine plays: "black" or "white".
    #[arg(short, long, default_value = "black")]
    color: String,

    /// Path to a 15x15 board file ('.' empty, 'B' black, 'W' white). An
    /// empty board is used if omitted.
    #[arg(short, long)]
    board: Option<PathBuf>,
}

fn parse_color(s: &str) -> Result<Stone> {
    match s.to_lowercase().as_str() {
        "black" => Ok(Stone::Black),
        "white" => Ok(Stone::White),
        other => Err(anyhow!("unrecognized color '{other}', expected 'black' or 'white'")),
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // optional; a missing .env is not an error.
    let options = Options::parse();

    let _logger = Logger::try_with_env_or_str(options.log_level.clone().unwrap_or("info".into()).as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(match cfg!(debug_assertions) {
            true => AdaptiveFormat::WithThread,
            _ => AdaptiveFormat::Default,
        })
        .start()?;

    let engine_color = parse_color(&options.color)?;

    let board = match &options.board {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading board file {path:?}"))?;
            Board::parse(&text)?
        }
        None => Board::new(),
    };

    let mut engine = new_engine(engine_color).with_max_depth(options.depth);
    let chosen = engine.get_next_move(&board);
    log::info!("engine ({engine_color:?}) selects {chosen}");
    println!("{chosen}");

    Ok(())
}
