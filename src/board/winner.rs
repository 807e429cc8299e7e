use crate::board::{Board, Player};

/// Classify a board. Scans every square on each call; no incremental state.
///
/// Fewer than two orbs on the board means the game has barely started and
/// nobody can have won yet.
pub fn check_winner(board: &Board) -> Option<Player> {
    let mut red = 0u32;
    let mut blue = 0u32;
    let mut total = 0u32;
    for (_, cell) in board.cells() {
        match cell.owner() {
            Some(Player::Red) => red = red.saturating_add(cell.orbs()),
            Some(Player::Blue) => blue = blue.saturating_add(cell.orbs()),
            None => {}
        }
        if cell.owner().is_some() { total = total.saturating_add(cell.orbs()); }
    }
    if total < 2 { return None; }
    match (red > 0, blue > 0) {
        (true, false) => Some(Player::Red),
        (false, true) => Some(Player::Blue),
        _ => None,
    }
}
