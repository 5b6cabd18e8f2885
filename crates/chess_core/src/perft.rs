use crate::{board::Board, movegen::all_moves_into, types::{Color, Move}};

/// Counts leaf positions `depth` plies below `board`, `color` to move.
///
/// Promotions always produce a queen, so counts match the published tables
/// only for positions where no promotion is reachable within `depth`.
pub fn perft(board: &mut Board, color: Color, depth: u8) -> u64 {
    fn inner(board: &mut Board, color: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        all_moves_into(board, color, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = board.make_move(mv);
            nodes += inner(board, color.other(), depth - 1, rest);
            board.unmake_move(mv, undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(48); depth as usize];
    inner(board, color, depth, &mut layers[..])
}
