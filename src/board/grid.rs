use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Player;
use crate::error::{Error, Result};

pub const DEFAULT_ROWS: usize = 9;
pub const DEFAULT_COLS: usize = 6;

/// Largest orb count a square may be loaded with from outside the engine.
pub const MAX_ORBS: u32 = 1 << 16;

const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self { Self { row, col } }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "({}, {})", self.row, self.col) }
}

/// Boundary classification of a square; decides its critical mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Corner,
    Edge,
    Interior,
}

impl CellKind {
    pub fn critical_mass(self) -> u32 {
        match self {
            CellKind::Corner => 2,
            CellKind::Edge => 3,
            CellKind::Interior => 4,
        }
    }
}

/// A square's contents. `orbs == 0` exactly when `owner` is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    orbs: u32,
    owner: Option<Player>,
}

impl Cell {
    pub const EMPTY: Cell = Cell { orbs: 0, owner: None };

    /// Occupied cell; `None` if `orbs` is zero.
    pub fn occupied(orbs: u32, owner: Player) -> Option<Cell> {
        if orbs == 0 { None } else { Some(Cell { orbs, owner: Some(owner) }) }
    }

    pub fn orbs(&self) -> u32 { self.orbs }
    pub fn owner(&self) -> Option<Player> { self.owner }
    pub fn is_empty(&self) -> bool { self.owner.is_none() }
    pub fn is_owned_by(&self, player: Player) -> bool { self.owner == Some(player) }

    fn is_consistent(&self) -> bool { (self.orbs == 0) == self.owner.is_none() }
}

/// Rectangular grid, stored row-major. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = Error;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let board = Board::from_rows(repr.cells)?;
        if board.rows != repr.rows || board.cols != repr.cols {
            return Err(Error::InvalidDimensions { rows: repr.rows, cols: repr.cols });
        }
        Ok(board)
    }
}

impl From<Board> for BoardRepr {
    fn from(b: Board) -> Self {
        let cells = b.cells.chunks(b.cols).map(|r| r.to_vec()).collect();
        BoardRepr { rows: b.rows, cols: b.cols, cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board { rows: DEFAULT_ROWS, cols: DEFAULT_COLS, cells: vec![Cell::EMPTY; DEFAULT_ROWS * DEFAULT_COLS] }
    }
}

impl Board {
    /// Empty board. Both dimensions must be at least 2 so every square has as
    /// many neighbours as its critical mass.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 2 || cols < 2 { return Err(Error::InvalidDimensions { rows, cols }); }
        Ok(Board { rows, cols, cells: vec![Cell::EMPTY; rows * cols] })
    }

    /// Build from explicit rows, rejecting ragged grids and inconsistent cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut board = Board::new(n_rows, n_cols)?;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols { return Err(Error::InvalidDimensions { rows: n_rows, cols: row.len() }); }
            for (c, cell) in row.into_iter().enumerate() {
                if !cell.is_consistent() {
                    return Err(Error::InvalidCell { row: r, col: c, reason: format!("{} orbs with owner {:?}", cell.orbs, cell.owner) });
                }
                if cell.orbs > MAX_ORBS {
                    return Err(Error::InvalidCell { row: r, col: c, reason: format!("{} orbs exceeds the limit of {}", cell.orbs, MAX_ORBS) });
                }
                board.cells[r * n_cols + c] = cell;
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool { row < self.rows && col < self.cols }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if self.in_bounds(pos.row, pos.col) { Some(&self.cells[self.index(pos)]) } else { None }
    }

    pub fn kind(&self, pos: Pos) -> CellKind {
        let row_edge = pos.row == 0 || pos.row == self.rows - 1;
        let col_edge = pos.col == 0 || pos.col == self.cols - 1;
        match (row_edge, col_edge) {
            (true, true) => CellKind::Corner,
            (true, false) | (false, true) => CellKind::Edge,
            (false, false) => CellKind::Interior,
        }
    }

    pub fn critical_mass(&self, pos: Pos) -> u32 { self.kind(pos).critical_mass() }

    /// In-bounds orthogonal neighbours, in down/up/right/left order.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = pos.row.checked_add_signed(dr)?;
            let c = pos.col.checked_add_signed(dc)?;
            if self.in_bounds(r, c) { Some(Pos::new(r, c)) } else { None }
        })
    }

    /// Row-major iteration over every square.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &c)| (Pos::new(i / cols, i % cols), c))
    }

    pub fn orbs_of(&self, player: Player) -> u32 {
        self.cells.iter().filter(|c| c.is_owned_by(player)).fold(0u32, |acc, c| acc.saturating_add(c.orbs))
    }

    pub fn occupied_by(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }

    pub fn total_orbs(&self) -> u32 { self.cells.iter().fold(0u32, |acc, c| acc.saturating_add(c.orbs)) }

    /// One orb closer to critical mass counts as "loaded" for the heuristics.
    pub fn is_loaded(&self, pos: Pos) -> bool {
        self.cells[self.index(pos)].orbs.saturating_add(1) >= self.critical_mass(pos)
    }

    pub(crate) fn index(&self, pos: Pos) -> usize { pos.row * self.cols + pos.col }

    pub(crate) fn cell(&self, pos: Pos) -> &Cell { &self.cells[self.index(pos)] }

    /// Add one orb to `pos` and hand the square to `player`.
    pub(crate) fn add_orb(&mut self, pos: Pos, player: Player) -> u32 {
        let i = self.index(pos);
        let cell = &mut self.cells[i];
        cell.orbs = cell.orbs.saturating_add(1);
        cell.owner = Some(player);
        cell.orbs
    }

    pub(crate) fn clear(&mut self, pos: Pos) {
        let i = self.index(pos);
        self.cells[i] = Cell::EMPTY;
    }
}
