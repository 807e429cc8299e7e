use crate::board::{Board, Move, Player};

/// A move is valid when it targets an in-bounds square that is empty or
/// already owned by the mover.
pub fn is_valid(board: &Board, mv: &Move) -> bool {
    if !board.in_bounds(mv.row, mv.col) { return false; }
    match board.cell(mv.pos()).owner() {
        None => true,
        Some(owner) => owner == mv.player,
    }
}

/// All valid moves for `player` in row-major order; empty when none exist.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::with_capacity(board.rows() * board.cols());
    for (pos, cell) in board.cells() {
        if cell.owner().map_or(true, |o| o == player) {
            moves.push(Move::new(pos.row, pos.col, player));
        }
    }
    moves
}
