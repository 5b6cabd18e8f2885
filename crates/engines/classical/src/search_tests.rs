use super::*;
use chess_core::{Square, is_legal_move};
use std::time::Duration;

/// Plain minimax with no pruning, ordering or caching.
fn full_minimax(
    board: &mut Board,
    weights: &EvalWeights,
    depth: u8,
    maximizing: bool,
    color: Color,
    root: Color,
) -> i32 {
    if depth == 0 {
        return evaluate(board, weights) * root.sign();
    }
    let moves = all_moves(board, color);
    if moves.is_empty() {
        if !is_in_check(board, color) {
            return STALEMATE_SCORE;
        }
        return if maximizing { -CHECKMATE_SCORE } else { CHECKMATE_SCORE };
    }
    let scores = moves.into_iter().map(|mv| {
        let undo = board.make_move(mv);
        let s = full_minimax(board, weights, depth - 1, !maximizing, color.other(), root);
        board.unmake_move(mv, undo);
        s
    });
    let scores: Vec<i32> = scores.collect();
    if maximizing {
        scores.into_iter().max().unwrap()
    } else {
        scores.into_iter().min().unwrap()
    }
}

fn pruned(board: &Board, color: Color, depth: u8, cache_capacity: usize) -> SearchOutcome {
    let weights = EvalWeights::default();
    let mut cache = PositionCache::new(cache_capacity);
    let mut scratch = board.scratch_copy();
    Searcher::new(&weights, &mut cache, color).search(&mut scratch, depth)
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

#[test]
fn test_alpha_beta_matches_full_minimax() {
    let cases = [
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -", 2),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -", 3),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - -", 3),
        ("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - -", 3),
        ("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq -", 2),
        // Rook moves transpose, so the cache sees repeated positions.
        ("4k3/8/8/8/8/8/8/R3K3 w - -", 4),
    ];
    let weights = EvalWeights::default();

    for (fen, depth) in cases {
        let (board, side) = Board::from_fen_with_side(fen).unwrap();
        let expected = full_minimax(&mut board.clone(), &weights, depth, true, side, side);

        for capacity in [0, 1 << 12] {
            let got = pruned(&board, side, depth, capacity);
            assert_eq!(got.score, expected, "{fen} depth {depth} cache {capacity}");
            assert!(!got.stopped);
        }
    }
}

#[test]
fn test_finds_mate_in_one() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - -").unwrap();
    let out = pruned(&board, Color::White, 2, 1 << 10);
    assert_eq!(out.best_move, Some(mv("e1e8")));
    assert_eq!(out.score, CHECKMATE_SCORE);
}

#[test]
fn test_black_finds_mate_in_one() {
    // Mirror of the position above with black to move.
    let board = Board::from_fen("4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - -").unwrap();
    let out = pruned(&board, Color::Black, 2, 1 << 10);
    assert_eq!(out.best_move, Some(mv("e8e1")));
    assert_eq!(out.score, CHECKMATE_SCORE);
}

#[test]
fn test_black_takes_hanging_queen() {
    let board = Board::from_fen("4k3/8/8/8/4p3/3Q4/8/4K3 b - -").unwrap();
    let out = pruned(&board, Color::Black, 1, 0);
    assert_eq!(out.best_move, Some(mv("e4d3")));
    assert!(out.score > 0, "black is ahead after the capture");
}

#[test]
fn test_mated_root_has_no_move() {
    let mut board = Board::new_game();
    for (m, c) in [
        ("f2f3", Color::White),
        ("e7e5", Color::Black),
        ("g2g4", Color::White),
        ("d8h4", Color::Black),
    ] {
        assert!(board.apply_move(mv(m), c));
    }
    let out = pruned(&board, Color::White, 3, 0);
    assert_eq!(out.best_move, None);
    assert_eq!(out.score, -CHECKMATE_SCORE);
}

#[test]
fn test_stalemated_root_scores_zero() {
    let board = Board::from_fen("k7/8/K7/8/8/8/8/1R6 b - -").unwrap();
    let out = pruned(&board, Color::Black, 2, 0);
    assert_eq!(out.best_move, None);
    assert_eq!(out.score, 0);
}

#[test]
fn test_search_restores_board() {
    let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
        .unwrap();
    let weights = EvalWeights::default();
    let mut cache = PositionCache::new(1 << 10);
    let mut scratch = board.scratch_copy();
    let out = Searcher::new(&weights, &mut cache, Color::White).search(&mut scratch, 2);

    assert_eq!(scratch.grid(), board.grid());
    assert_eq!(scratch.hash(), board.hash());
    let best = out.best_move.unwrap();
    assert!(is_legal_move(&board, best.from, Color::White, best.to));
}

#[test]
fn test_expired_deadline_still_returns_legal_move() {
    let board = Board::new_game();
    let weights = EvalWeights::default();
    let mut cache = PositionCache::new(0);
    let mut tc = TimeControl::new(Some(Duration::ZERO));
    tc.start();

    let mut scratch = board.scratch_copy();
    let out = Searcher::new(&weights, &mut cache, Color::White)
        .with_time_control(&tc)
        .search(&mut scratch, 5);

    assert!(out.stopped);
    let best = out.best_move.expect("a legal move exists");
    assert!(is_legal_move(&board, best.from, Color::White, best.to));
    assert_eq!(scratch.grid(), board.grid());
}

#[test]
fn test_forced_king_capture_is_chosen() {
    // Only legal move: the king must take the rook.
    let board = Board::from_fen("k7/8/8/8/8/8/1r6/K7 w - -").unwrap();
    let out = pruned(&board, Color::White, 2, 0);
    assert_eq!(
        out.best_move,
        Some(Move::new(Square::new(7, 0), Square::new(6, 1)))
    );
}

#[test]
fn test_depth_zero_root_falls_back_to_first_legal_move() {
    let board = Board::new_game();
    let out = pruned(&board, Color::White, 0, 0);
    assert!(!out.stopped);
    assert_eq!(out.best_move, all_moves(&board, Color::White).first().copied());
}
