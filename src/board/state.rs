use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::{check_winner, Board, Player, Pos};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

impl Move {
    pub fn new(row: usize, col: usize, player: Player) -> Self { Self { row, col, player } }
    pub fn pos(&self) -> Pos { Pos::new(self.row, self.col) }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{},{}", self.player, self.row, self.col)
    }
}

/// Immutable snapshot of a game. Moves produce new states; a state handed out
/// is never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
}

impl Default for GameState {
    fn default() -> Self { Self::initial(Board::default()) }
}

impl GameState {
    /// Fresh game on `board`'s dimensions: empty grid, red to move.
    pub fn new(rows: usize, cols: usize) -> Result<Self> { Ok(Self::initial(Board::new(rows, cols)?)) }

    fn initial(board: Board) -> Self { Self { board, current_player: Player::Red, winner: None } }

    /// Adopt a position supplied by a collaborator; the winner is derived from the board.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        let winner = check_winner(&board);
        Self { board, current_player, winner }
    }

    /// Adopt a fully specified position as-is.
    pub fn from_parts(board: Board, current_player: Player, winner: Option<Player>) -> Self {
        Self { board, current_player, winner }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn current_player(&self) -> Player { self.current_player }
    pub fn winner(&self) -> Option<Player> { self.winner }
    pub fn is_over(&self) -> bool { self.winner.is_some() }

    pub fn apply(&self, mv: Move) -> Result<GameState> { crate::board::apply_move(self, mv) }

    pub fn legal_moves(&self) -> Vec<Move> { crate::board::legal_moves(&self.board, self.current_player) }
}
