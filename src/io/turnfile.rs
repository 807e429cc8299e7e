use std::fs;
use std::path::Path;

use crate::board::{GameState, Player};
use crate::error::{Error, Result};
use crate::io::{decode_board_at, encode_board};

/// Who made the move recorded in a turn file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMover(pub Player);

impl LastMover {
    pub fn header(&self) -> String {
        match self.0 {
            Player::Red => "Red Move:".to_string(),
            Player::Blue => "Blue Move:".to_string(),
        }
    }

    /// Accepts `Red Move:` / `Blue Move:`, plus the GUI headers: the human
    /// and the first AI of an AI-vs-AI game play red, the other AI plays blue.
    pub fn parse(header: &str) -> Option<LastMover> {
        match header.trim() {
            "Red Move:" | "Human Move:" | "AI1 Move:" => Some(LastMover(Player::Red)),
            "Blue Move:" | "AI Move:" | "AI2 Move:" => Some(LastMover(Player::Blue)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFile {
    pub last_mover: LastMover,
    pub state: GameState,
}

impl StateFile {
    /// Wrap a state whose side to move is `state.current_player()`.
    pub fn from_state(state: GameState) -> Self {
        Self { last_mover: LastMover(state.current_player().opponent()), state }
    }

    pub fn to_text(&self) -> String {
        format!("{}\n{}\n", self.last_mover.header(), encode_board(self.state.board()))
    }

    /// The side to move is the opponent of the header's mover; the winner is
    /// recomputed from the board.
    pub fn parse(text: &str) -> Result<Self> {
        let mut split = text.splitn(2, '\n');
        let header = split.next().unwrap_or("").trim_end_matches('\r');
        let last_mover = LastMover::parse(header).ok_or_else(|| Error::Parse {
            line: 1,
            token: header.to_string(),
            reason: "expected a '<side> Move:' header".to_string(),
        })?;
        let board = decode_board_at(split.next().unwrap_or(""), 2)?;
        let state = GameState::from_board(board, last_mover.0.opponent());
        Ok(Self { last_mover, state })
    }
}

pub fn read_state_file<P: AsRef<Path>>(path: P) -> Result<StateFile> {
    let text = fs::read_to_string(path)?;
    StateFile::parse(&text)
}

pub fn write_state_file<P: AsRef<Path>>(path: P, file: &StateFile) -> Result<()> {
    fs::write(path, file.to_text())?;
    Ok(())
}
