//! Analyzing a position given as FEN.
//!
//! Run with: `cargo run --example custom_position`

use dammen::{Board, Engine, EngineConfig, STANDARD};

fn main() {
    env_logger::init();

    // A white king facing a black chain on the long diagonal.
    let board = Board::from_fen(&STANDARD, "W:WK46:B41,23,14").unwrap();
    println!("{board}\n");

    println!("Legal moves:");
    for mv in board.legal_moves() {
        println!("  {mv}");
    }

    let mut scratch = board.copy();
    let mut engine = Engine::new(EngineConfig {
        depth_limit: 8,
        ..EngineConfig::default()
    });
    let report = engine.search(&mut scratch);
    if let Some(best) = report.best_move {
        println!(
            "\nBest: {best} (score {:+}, depth {}, {} nodes in {:?})",
            report.score, report.depth, report.nodes, report.elapsed
        );
    }
}
