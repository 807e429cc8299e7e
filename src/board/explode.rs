use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::board::{check_winner, is_valid, Board, GameState, Move, Pos};
use crate::error::{Error, Result};

/// Bounds on one cascade resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeLimits {
    /// Abort once this many queued squares have been processed.
    pub max_processed: Option<usize>,
    /// Stop once this many explosions have resolved.
    pub max_explosions: Option<usize>,
    /// Stop as soon as the board has a winner.
    pub stop_on_win: bool,
}

impl CascadeLimits {
    /// Limits for real moves. Hitting the processed cap is an anomaly.
    pub const MOVE: CascadeLimits = CascadeLimits { max_processed: Some(500), max_explosions: None, stop_on_win: true };
    /// Limits for the evaluator's what-if chain probes.
    pub const PROBE: CascadeLimits = CascadeLimits { max_processed: None, max_explosions: Some(100), stop_on_win: false };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    pub explosions: usize,
    pub processed: usize,
    /// The processed cap fired with work still queued.
    pub overrun: bool,
    pub stopped_on_win: bool,
}

/// Resolve the chain reaction starting at `origin`, in place.
///
/// FIFO worklist: an exploding square empties and pushes one orb into each
/// orthogonal neighbour, which takes the exploder's colour outright. A
/// neighbour reaching its own critical mass is queued, possibly more than once.
pub fn resolve_cascade(board: &mut Board, origin: Pos, limits: CascadeLimits) -> CascadeReport {
    let mut queue = VecDeque::from([origin]);
    let mut report = CascadeReport::default();
    while let Some(pos) = queue.pop_front() {
        if limits.max_processed.is_some_and(|max| report.processed >= max) {
            report.overrun = true;
            break;
        }
        report.processed += 1;
        let cell = *board.cell(pos);
        if let (true, Some(owner)) = (cell.orbs() >= board.critical_mass(pos), cell.owner()) {
            board.clear(pos);
            report.explosions += 1;
            let neighbors: Vec<Pos> = board.neighbors(pos).collect();
            for n in neighbors {
                if board.add_orb(n, owner) >= board.critical_mass(n) { queue.push_back(n); }
            }
        }
        if limits.stop_on_win && check_winner(board).is_some() {
            report.stopped_on_win = true;
            break;
        }
        if limits.max_explosions.is_some_and(|max| report.explosions >= max) { break; }
    }
    report
}

/// Play `mv` on a copy of `state`. The input state is left untouched.
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState> {
    apply_move_with_report(state, mv).map(|(s, _)| s)
}

/// As [`apply_move`], also returning what the cascade did.
pub fn apply_move_with_report(state: &GameState, mv: Move) -> Result<(GameState, CascadeReport)> {
    if !is_valid(state.board(), &mv) {
        return Err(Error::InvalidMove { row: mv.row, col: mv.col, player: mv.player });
    }
    let mut board = state.board().clone();
    board.add_orb(mv.pos(), mv.player);
    let report = resolve_cascade(&mut board, mv.pos(), CascadeLimits::MOVE);
    if report.overrun {
        warn!("cascade from {} overran after {} squares ({} explosions); board left partially resolved", mv, report.processed, report.explosions);
    }
    let winner = check_winner(&board);
    Ok((GameState::from_parts(board, mv.player.opponent(), winner), report))
}
