//! Engine self-play from the standard starting position.
//!
//! Run with: `cargo run --example basic_game`

use dammen::{Board, Engine, EngineConfig, STANDARD};

fn main() {
    env_logger::init();

    let mut board = Board::new(&STANDARD);
    let mut engine = Engine::new(EngineConfig {
        depth_limit: 5,
        ..EngineConfig::default()
    });

    println!("{board}\n");

    for ply in 1.. {
        if board.is_game_over() {
            break;
        }
        let Some((mv, score)) = engine.get_best_move_with_eval(&mut board) else {
            break;
        };
        println!("{ply:>3}. {} ({score:+})", mv);
        board.push(&mv).unwrap();
        if ply >= 40 {
            break;
        }
    }

    println!("\n{board}");
    println!("\nResult: {}", board.result());
    println!("\n{}", board.pdn());
}
