use super::*;
use crate::movegen::all_moves;
use crate::types::Move;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

/// The literal definition: in check and every legal reply still in check.
fn checkmate_by_definition(b: &Board, c: Color) -> bool {
    is_in_check(b, c)
        && all_moves(b, c).into_iter().all(|mv| {
            let mut next = b.clone();
            next.make_move(mv);
            is_in_check(&next, c)
        })
}

#[test]
fn test_back_rank_mate() {
    let b = board("R5k1/5ppp/8/8/8/8/8/6K1 b - -");
    assert!(is_checkmate(&b, Color::Black));
    assert!(!is_stalemate(&b, Color::Black));
    assert_eq!(game_status(&b, Color::Black), GameStatus::Checkmate);
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let b = board("R5k1/5pp1/8/8/8/8/8/6K1 b - -");
    assert!(is_in_check(&b, Color::Black));
    assert!(!is_checkmate(&b, Color::Black));
    assert_eq!(game_status(&b, Color::Black), GameStatus::Check);
}

#[test]
fn test_stalemate_corner_king() {
    // Black king on a8, white queen b6, white king c7.
    let b = board("k7/2K5/1Q6/8/8/8/8/8 b - -");
    assert!(is_stalemate(&b, Color::Black));
    assert!(!is_checkmate(&b, Color::Black));
    assert_eq!(game_status(&b, Color::Black), GameStatus::Stalemate);
}

#[test]
fn test_king_and_rook_stalemate() {
    // Lone black king on a8; the white king on a6 covers a7 and b7, the rook
    // on b1 covers the b-file. Black is not in check and has no move.
    let b = board("k7/8/K7/8/8/8/8/1R6 b - -");
    assert!(!is_in_check(&b, Color::Black));
    assert!(all_moves(&b, Color::Black).is_empty());
    assert!(is_stalemate(&b, Color::Black));
}

#[test]
fn test_start_position_is_ongoing() {
    let b = Board::new_game();
    assert_eq!(game_status(&b, Color::White), GameStatus::Ongoing);
    assert!(!GameStatus::Ongoing.is_over());
    assert!(GameStatus::Stalemate.is_over());
}

#[test]
fn test_scholars_mate_sequence() {
    let mut b = Board::new_game();
    let line = ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"];
    let mut color = Color::White;
    for m in line {
        let mv: Move = m.parse().unwrap();
        assert!(b.apply_move(mv, color), "{m} should be legal");
        color = color.other();
    }
    assert!(is_checkmate(&b, Color::Black));
    assert!(all_moves(&b, Color::Black).is_empty());
}

#[test]
fn test_checkmate_matches_definition() {
    let fens = [
        "R5k1/5ppp/8/8/8/8/8/6K1 b - -",
        "R5k1/5pp1/8/8/8/8/8/6K1 b - -",
        "k7/2K5/1Q6/8/8/8/8/8 b - -",
        "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq -",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
    ];
    for fen in fens {
        let b = board(fen);
        for c in [Color::White, Color::Black] {
            assert_eq!(
                is_checkmate(&b, c),
                checkmate_by_definition(&b, c),
                "{fen} for {c}"
            );
            assert_eq!(
                is_stalemate(&b, c),
                !is_in_check(&b, c) && all_moves(&b, c).is_empty(),
                "{fen} for {c}"
            );
        }
    }
}
