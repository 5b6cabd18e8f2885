//! Times move generation by walking the game tree to a fixed depth.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]

use std::env;
use std::time::{Duration, Instant};

use chess_core::{Board, Color, perft};

const POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    let positions: Vec<(String, String)> = match args.get(2) {
        Some(fen) => vec![("Custom".to_string(), fen.clone())],
        None => POSITIONS
            .iter()
            .map(|(n, f)| (n.to_string(), f.to_string()))
            .collect(),
    };

    println!("Perft depth {depth}");
    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in &positions {
        let (mut board, side): (Board, Color) = match Board::from_fen_with_side(fen) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        let start = Instant::now();
        let nodes = perft(&mut board, side, depth);
        let elapsed = start.elapsed();
        total_nodes += nodes;
        total_time += elapsed;

        println!("{name:.<24} {nodes:>10} nodes in {elapsed:>8.3?} ({:>9.0} nps)", nps(nodes, elapsed));
    }

    println!("{:=<64}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}
