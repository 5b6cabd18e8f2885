use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

#[test]
fn test_start_position_not_in_check() {
    let b = Board::new_game();
    assert!(!is_in_check(&b, Color::White));
    assert!(!is_in_check(&b, Color::Black));
}

#[test]
fn test_missing_king_is_not_in_check() {
    // Only a black rook on an otherwise empty board.
    let b = board("8/8/8/8/8/8/8/r7 w - -");
    assert!(!is_in_check(&b, Color::White));
}

#[test]
fn test_pawn_attacks_toward_opponent() {
    // White pawn on d4 attacks c5 and e5, not c3/e3.
    let b = board("8/8/8/8/3P4/8/8/8 w - -");
    assert!(is_square_attacked(&b, "c5".parse().unwrap(), Color::White));
    assert!(is_square_attacked(&b, "e5".parse().unwrap(), Color::White));
    assert!(!is_square_attacked(&b, "c3".parse().unwrap(), Color::White));
    assert!(!is_square_attacked(&b, "d5".parse().unwrap(), Color::White));

    // Black pawn on d5 attacks c4 and e4.
    let b = board("8/8/8/3p4/8/8/8/8 w - -");
    assert!(is_square_attacked(&b, "c4".parse().unwrap(), Color::Black));
    assert!(is_square_attacked(&b, "e4".parse().unwrap(), Color::Black));
    assert!(!is_square_attacked(&b, "e6".parse().unwrap(), Color::Black));
}

#[test]
fn test_knight_check() {
    let b = board("4k3/8/3N4/8/8/8/8/4K3 w - -");
    assert!(is_in_check(&b, Color::Black));
    assert!(!is_in_check(&b, Color::White));
}

#[test]
fn test_adjacent_kings_attack_each_other() {
    let b = board("8/8/8/3kK3/8/8/8/8 w - -");
    assert!(is_in_check(&b, Color::White));
    assert!(is_in_check(&b, Color::Black));
}

#[test]
fn test_rook_check_blocked_by_any_piece() {
    // Rook on a8 and king on h8: open file gives check.
    let open = board("R6k/8/8/8/8/8/8/K7 w - -");
    assert!(is_in_check(&open, Color::Black));

    // A friendly black knight in between blocks.
    let own_block = board("R3n2k/8/8/8/8/8/8/K7 w - -");
    assert!(!is_in_check(&own_block, Color::Black));

    // So does a white piece.
    let their_block = board("R3N2k/8/8/8/8/8/8/K7 w - -");
    assert!(!is_in_check(&their_block, Color::Black));
}

#[test]
fn test_bishop_and_queen_diagonals() {
    let bishop = board("7k/8/8/8/8/8/8/B6K w - -");
    assert!(is_in_check(&bishop, Color::Black));

    let queen = board("7k/8/8/8/3Q4/8/8/7K w - -");
    assert!(is_in_check(&queen, Color::Black));

    // A rook does not attack diagonally.
    let rook = board("7k/8/8/8/8/8/8/R6K w - -");
    assert!(!is_in_check(&rook, Color::Black));
}
