// Chain-reaction board model: grid, cells, moves and game states.
pub mod grid;
pub mod state;
pub mod legal;
pub mod explode;
pub mod winner;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use grid::{Board, Cell, CellKind, Pos, DEFAULT_COLS, DEFAULT_ROWS, MAX_ORBS};
pub use state::{GameState, Move};
pub use legal::{is_valid, legal_moves};
pub use explode::{apply_move, apply_move_with_report, CascadeLimits, CascadeReport};
pub use winner::check_winner;

/// One of the two sides. An empty ("blank") owner or an undecided winner is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Colour letter used by the text codec.
    pub fn letter(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Blue => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Player> {
        match c {
            'R' => Some(Player::Red),
            'B' => Some(Player::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "red"),
            Player::Blue => write!(f, "blue"),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Player::Red),
            "b" | "blue" => Ok(Player::Blue),
            other => Err(format!("unknown player '{other}' (use red or blue)")),
        }
    }
}
