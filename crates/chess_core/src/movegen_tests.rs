use super::*;
use crate::attacks::is_in_check;
use crate::validate::is_legal_move;

/// Reference generator: every occupied friendly square against every square.
fn brute_force_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::new();
    for from in Square::all() {
        if board.piece_at(from).is_none_or(|pc| pc.color != color) {
            continue;
        }
        for to in Square::all() {
            if is_legal_move(board, from, color, to) {
                out.push(Move::new(from, to));
            }
        }
    }
    out
}

fn sorted(mut moves: Vec<Move>) -> Vec<(usize, usize)> {
    let mut keys: Vec<_> = moves
        .drain(..)
        .map(|m| (m.from.index(), m.to.index()))
        .collect();
    keys.sort_unstable();
    keys
}

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
    "4k3/8/8/3pP3/8/8/8/4K3 w - d6",
];

#[test]
fn test_startpos_moves() {
    let moves = all_moves(&Board::new_game(), Color::White);
    assert_eq!(moves.len(), 20);
    let black = all_moves(&Board::new_game(), Color::Black);
    assert_eq!(black.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    let b = Board::from_fen(POSITIONS[1]).unwrap();
    assert_eq!(all_moves(&b, Color::White).len(), 48);
}

#[test]
fn test_generation_matches_full_scan() {
    for fen in POSITIONS {
        let b = Board::from_fen(fen).unwrap();
        for c in [Color::White, Color::Black] {
            assert_eq!(
                sorted(all_moves(&b, c)),
                sorted(brute_force_moves(&b, c)),
                "{fen} for {c}"
            );
        }
    }
}

#[test]
fn test_generated_moves_never_leave_king_in_check() {
    for fen in POSITIONS {
        let b = Board::from_fen(fen).unwrap();
        for c in [Color::White, Color::Black] {
            for mv in all_moves(&b, c) {
                let mut next = b.clone();
                next.make_move(mv);
                assert!(!is_in_check(&next, c), "{fen}: {mv} exposes the king");
            }
        }
    }
}

#[test]
fn test_pinned_piece_excluded() {
    // White knight on e2 is pinned by the black queen on e8.
    let b = Board::from_fen("4q1k1/8/8/8/8/8/4N3/4K3 w - -").unwrap();
    let moves = all_moves(&b, Color::White);
    let knight: Square = "e2".parse().unwrap();
    assert!(moves.iter().all(|m| m.from != knight));
    // The raw jump itself is fine geometrically.
    assert!(crate::validate::is_geometric_move(
        &b,
        knight,
        Color::White,
        "c3".parse().unwrap()
    ));
}

#[test]
fn test_en_passant_generated() {
    let b = Board::from_fen(POSITIONS[4]).unwrap();
    let ep = Move::new("e5".parse().unwrap(), "d6".parse().unwrap());
    assert!(all_moves(&b, Color::White).contains(&ep));
}

#[test]
fn test_has_legal_move_agrees_with_all_moves() {
    let stalemate = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - -").unwrap();
    assert!(!has_legal_move(&stalemate, Color::Black));
    assert!(all_moves(&stalemate, Color::Black).is_empty());

    for fen in POSITIONS {
        let b = Board::from_fen(fen).unwrap();
        for c in [Color::White, Color::Black] {
            assert_eq!(has_legal_move(&b, c), !all_moves(&b, c).is_empty());
        }
    }
}

#[test]
fn test_all_moves_into_restores_board() {
    let mut b = Board::from_fen(POSITIONS[1]).unwrap();
    let fen = b.to_fen(Color::White);
    let hash = b.hash();
    let mut out = Vec::new();
    all_moves_into(&mut b, Color::White, &mut out);
    assert_eq!(b.to_fen(Color::White), fen);
    assert_eq!(b.hash(), hash);
}
