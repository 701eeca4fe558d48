//! Gomoku engine command line
//!
//! `selfplay` lets the engine play both sides from an empty board;
//! `analyze` asks it for a move in a given position.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use gomoku::logging::setup_logging;
use gomoku::{
    AIEngine, Board, CutoffPolicy, EngineConfig, Game, GameOutcome, MoveOutcome, Result, Stone,
};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Gomoku move search")]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// JSON engine configuration; flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(short = 'd', long, global = true)]
    depth: Option<u8>,

    /// Board side length
    #[arg(short = 's', long, global = true)]
    size: Option<usize>,

    /// Stop scanning a node's moves on the first cutoff
    #[arg(long, global = true, default_value_t = false)]
    full_cutoff: bool,

    /// Split root moves across threads
    #[arg(long, global = true, default_value_t = false)]
    parallel: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Engine against itself from an empty board
    Selfplay {
        /// Stop after this many moves
        #[arg(long)]
        max_moves: Option<usize>,
    },
    /// Best move for a position
    Analyze {
        /// A stone as COLOR:ROW,COL, e.g. b:9,9 or w:9,10
        #[arg(long = "stone", value_parser = parse_stone)]
        stones: Vec<(Stone, u8, u8)>,

        /// Text board: one row per line, X black, O white, . empty
        #[arg(long, conflicts_with = "stones")]
        board: Option<PathBuf>,

        /// Side to move; defaults to the side with fewer stones
        #[arg(long, value_enum)]
        to_move: Option<Side>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

fn parse_stone(arg: &str) -> std::result::Result<(Stone, u8, u8), String> {
    let (color, coords) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected COLOR:ROW,COL, got '{arg}'"))?;
    let stone = match color.to_ascii_lowercase().as_str() {
        "b" | "black" | "x" => Stone::Black,
        "w" | "white" | "o" => Stone::White,
        other => return Err(format!("unknown color '{other}'")),
    };
    let (row, col) = coords
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{coords}'"))?;
    let row = row.trim().parse::<u8>().map_err(|e| format!("row: {e}"))?;
    let col = col.trim().parse::<u8>().map_err(|e| format!("col: {e}"))?;
    Ok((stone, row, col))
}

fn load_config(args: &EngineArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if args.full_cutoff {
        config.cutoff = CutoffPolicy::Full;
    }
    if args.parallel {
        config.parallel = true;
    }
    config.validate()?;
    Ok(config)
}

fn selfplay(config: EngineConfig, max_moves: Option<usize>) -> Result<()> {
    let limit = max_moves.unwrap_or(config.board_size * config.board_size);
    let mut game = Game::new(config, Stone::Black)?;

    while game.history().len() < limit {
        let stone = game.current_turn();
        let (pos, outcome) = game.play_engine()?;
        if let Some(result) = game.last_engine_result() {
            info!(
                "{} -> {} (score {:.1}, {} nodes, {}ms)",
                stone,
                pos,
                result.score,
                result.nodes,
                result.time_ms
            );
        }
        if outcome != MoveOutcome::Continue {
            break;
        }
    }

    println!("{}", game.board());
    match game.outcome() {
        Some(GameOutcome::Win { winner, line }) => {
            let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
            println!("{winner} wins: {}", cells.join(" "));
        }
        Some(GameOutcome::Draw) => println!("Draw"),
        None => println!("Stopped after {} moves", game.history().len()),
    }
    Ok(())
}

fn analyze(
    mut config: EngineConfig,
    stones: &[(Stone, u8, u8)],
    board_file: Option<&PathBuf>,
    to_move: Option<Side>,
) -> Result<()> {
    let board = match board_file {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
            Board::from_rows(&rows)?
        }
        None => {
            let mut board = Board::with_size(config.board_size);
            for &(stone, row, col) in stones {
                board.try_place(i64::from(row), i64::from(col), stone)?;
            }
            board
        }
    };
    config.board_size = board.size();

    let to_move = to_move.map_or_else(
        || {
            let black = board.occupied().filter(|&(_, s)| s == Stone::Black).count();
            let white = board.occupied().filter(|&(_, s)| s == Stone::White).count();
            if black > white {
                Stone::White
            } else {
                Stone::Black
            }
        },
        Stone::from,
    );

    let mut engine = AIEngine::with_config(config)?;
    let result = engine.get_move_with_stats(&board, to_move);

    println!("{board}");
    match result.best_move {
        Some(pos) => println!("{to_move} to move: {pos}"),
        None => println!("{to_move} to move: no empty cell"),
    }
    println!(
        "score {:.1} for {} at depth {}",
        result.score, result.perspective, result.depth
    );
    println!(
        "nodes {} leaves {} cutoffs {} in {}ms",
        result.stats.nodes, result.stats.leaves, result.stats.cutoffs, result.time_ms
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = setup_logging(&cli.engine.log_level)?;
    let config = load_config(&cli.engine)?;

    match cli.command {
        Command::Selfplay { max_moves } => selfplay(config, max_moves),
        Command::Analyze {
            stones,
            board,
            to_move,
        } => analyze(config, &stones, board.as_ref(), to_move),
    }
}
