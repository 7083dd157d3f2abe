//! Seeded random legal game, for eyeballing the engine end to end.
//!
//! Usage:
//! `cargo run --bin random_playout`
//! `cargo run --bin random_playout -- --seed 7 --max-plies 120`
//!
//! `OPENY_START_FEN` / `OPENY_CASTLING_RULES` pick the start position and
//! castling rules; `RUST_LOG=debug` shows every move event.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use openy_chess::session::game_session::{GameSession, SessionConfig};
use openy_chess::utils::render_game_state::render_game_state;
use openy_chess::ChessErrors;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = parse_arg_u64("--seed", 0x5eed);
    let max_plies = parse_arg_u64("--max-plies", 200);

    let config = SessionConfig::from_env();
    let mut session = GameSession::new(&config)?;
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, max_plies, fen = %config.start_fen, rules = ?config.rules, "starting random playout");

    for _ in 0..max_plies {
        if session.status().is_game_over() {
            break;
        }
        let moves = session.position().legal_moves();
        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };
        session.play_move(mv.from, mv.to)?;
    }

    let status = session.status();
    info!(
        plies = session.history().entries().len() - 1,
        checkmate = status.checkmate,
        stalemate = status.stalemate,
        material = session.material(),
        "playout finished"
    );

    println!("{}", render_game_state(session.position()));
    println!();
    println!("{}", session.line());
    println!();
    println!("FEN: {}", session.fen());
    println!();
    print!("{}", session.to_pgn());

    Ok(())
}
