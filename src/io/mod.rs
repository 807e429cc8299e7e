//! Plain-text board encoding and turn files.
//!
//! A board is one line per row; squares are space separated, each either `0`
//! (empty) or `<orbs><colour>` with colour `R` or `B`, e.g. `0 2R 1B`.
//! A turn file prefixes the board with a header line naming who moved last.

pub mod turnfile;

pub use turnfile::{read_state_file, write_state_file, LastMover, StateFile};

use crate::board::{Board, Cell, Player};
use crate::error::{Error, Result};

pub fn encode_cell(cell: &Cell) -> String {
    match cell.owner() {
        Some(p) if cell.orbs() > 0 => format!("{}{}", cell.orbs(), p.letter()),
        _ => "0".to_string(),
    }
}

pub fn encode_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(board.rows());
    let mut row: Vec<String> = Vec::with_capacity(board.cols());
    for (pos, cell) in board.cells() {
        row.push(encode_cell(&cell));
        if pos.col + 1 == board.cols() { lines.push(row.join(" ")); row.clear(); }
    }
    lines.join("\n")
}

/// Parse one square token; `line` is only used for error reporting.
pub fn decode_cell(token: &str, line: usize) -> Result<Cell> {
    let err = |reason: &str| Error::Parse { line, token: token.to_string(), reason: reason.to_string() };
    if token == "0" { return Ok(Cell::EMPTY); }
    let mut chars = token.chars();
    let letter = chars.next_back().ok_or_else(|| err("empty token"))?;
    let player = Player::from_letter(letter).ok_or_else(|| err("colour must be R or B"))?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) { return Err(err("orb count must be a positive integer")); }
    let orbs: u32 = digits.parse().map_err(|_| err("orb count out of range"))?;
    Cell::occupied(orbs, player).ok_or_else(|| err("coloured square with zero orbs"))
}

/// Parse a board from text. Line numbers in errors start at `first_line`.
pub fn decode_board_at(text: &str, first_line: usize) -> Result<Board> {
    let mut rows = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() { continue; }
        let row = line.split_whitespace().map(|t| decode_cell(t, first_line + i)).collect::<Result<Vec<Cell>>>()?;
        rows.push(row);
    }
    Board::from_rows(rows)
}

pub fn decode_board(text: &str) -> Result<Board> { decode_board_at(text, 1) }
