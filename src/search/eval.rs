use serde::{Deserialize, Serialize};

use crate::board::explode::resolve_cascade;
use crate::board::{Board, CascadeLimits, CellKind, GameState, Player, Pos};

const W_ORBS: f64 = 0.5;
const W_CRITICAL: f64 = 2.0;
const W_CONTROL: f64 = 1.0;
const W_CHAIN: f64 = 3.0;
const W_SAFETY: f64 = 1.0;

const CRITICAL_CELL: i64 = 10;
const CORNER_BONUS: i64 = 5;
const EDGE_BONUS: i64 = 3;
const LOADED_NEIGHBOR_PENALTY: i64 = 10;
const NEIGHBOR_THREAT_SCALE: i64 = 5;
const VULNERABLE_PENALTY: i64 = 3;

// Decided positions
pub const WIN_SCORE: f64 = f64::INFINITY;
pub const LOSS_SCORE: f64 = f64::NEG_INFINITY;

/// The five raw heuristic terms, all from one side's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    pub orbs: i64,
    pub critical: i64,
    pub control: i64,
    pub chain: i64,
    pub safety: i64,
}

impl Signals {
    /// Game-phase scaling for the chain term. Keyed on twice the absolute orb
    /// differential, not on the board's total orb count.
    pub fn phase_multiplier(&self) -> f64 {
        let m = 2 * self.orbs.abs();
        if m < 10 { 0.6 } else if m < 30 { 1.0 } else { 1.5 }
    }

    pub fn blend(&self) -> f64 {
        W_ORBS * self.orbs as f64
            + W_CRITICAL * self.critical as f64
            + W_CONTROL * self.control as f64
            + (W_CHAIN * self.phase_multiplier()) * self.chain as f64
            + W_SAFETY * self.safety as f64
    }
}

/// Score `state` for `perspective`: ±infinity once decided, else the blended signals.
pub fn evaluate(state: &GameState, perspective: Player) -> f64 {
    match state.winner() {
        Some(w) if w == perspective => WIN_SCORE,
        Some(_) => LOSS_SCORE,
        None => signals(state.board(), perspective).blend(),
    }
}

pub fn signals(board: &Board, perspective: Player) -> Signals {
    Signals {
        orbs: orb_differential(board, perspective),
        critical: critical_control(board, perspective),
        control: board_control(board, perspective),
        chain: chain_potential(board, perspective),
        safety: positional_safety(board, perspective),
    }
}

pub fn orb_differential(board: &Board, me: Player) -> i64 {
    board.orbs_of(me) as i64 - board.orbs_of(me.opponent()) as i64
}

pub fn critical_control(board: &Board, me: Player) -> i64 {
    let mut score = 0;
    for (pos, cell) in board.cells() {
        if !board.is_loaded(pos) { continue; }
        match cell.owner() {
            Some(p) if p == me => score += CRITICAL_CELL,
            Some(_) => score -= CRITICAL_CELL,
            None => {}
        }
    }
    score
}

pub fn board_control(board: &Board, me: Player) -> i64 {
    board.occupied_by(me) as i64 - board.occupied_by(me.opponent()) as i64
}

/// Sum of explosions set off by dropping one more orb on each of our loaded squares.
pub fn chain_potential(board: &Board, me: Player) -> i64 {
    let mut total = 0;
    for (pos, cell) in board.cells() {
        if cell.is_owned_by(me) && board.is_loaded(pos) {
            total += simulate_chain(board, pos, me) as i64;
        }
    }
    total
}

/// Explosions triggered by one extra orb at `pos`, resolved on a scratch copy.
pub fn simulate_chain(board: &Board, pos: Pos, player: Player) -> usize {
    let mut scratch = board.clone();
    scratch.add_orb(pos, player);
    resolve_cascade(&mut scratch, pos, CascadeLimits::PROBE).explosions
}

pub fn positional_safety(board: &Board, me: Player) -> i64 {
    let opp = me.opponent();
    let mut score = 0;
    for (pos, cell) in board.cells() {
        if !cell.is_owned_by(me) { continue; }
        let bonus = match board.kind(pos) {
            CellKind::Corner => CORNER_BONUS,
            CellKind::Edge => EDGE_BONUS,
            CellKind::Interior => 0,
        };
        let mut threat = 0;
        for n in board.neighbors(pos) {
            let neighbor = board.cell(n);
            if !neighbor.is_owned_by(opp) { continue; }
            if board.is_loaded(n) {
                threat += LOADED_NEIGHBOR_PENALTY;
            } else {
                threat += NEIGHBOR_THREAT_SCALE * neighbor.orbs() as i64 / board.critical_mass(n) as i64;
            }
        }
        if cell.orbs().saturating_add(1) == board.critical_mass(pos) { threat += VULNERABLE_PENALTY; }
        score += bonus - threat;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_thresholds() {
        let s = |orbs| Signals { orbs, ..Signals::default() };
        assert_eq!(s(4).phase_multiplier(), 0.6);
        assert_eq!(s(-5).phase_multiplier(), 1.0);
        assert_eq!(s(14).phase_multiplier(), 1.0);
        assert_eq!(s(-15).phase_multiplier(), 1.5);
    }

    #[test]
    fn blend_weights() {
        let s = Signals { orbs: 2, critical: 10, control: 1, chain: 1, safety: -3 };
        // 0.5*2 + 2*10 + 1 + 3*0.6*1 - 3
        assert!((s.blend() - 20.8).abs() < 1e-9);
    }
}
