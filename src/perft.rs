// Leaf counting over the move tree; decided games are leaves.
use crate::board::{apply_move_with_report, GameState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftStats {
    pub leaves: u64,
    pub explosions: u64,
    pub wins: u64,
    pub overruns: u64,
}

pub fn perft(state: &GameState, depth: u32) -> u64 {
    perft_stats(state, depth).leaves
}

pub fn perft_stats(state: &GameState, depth: u32) -> PerftStats {
    let mut stats = PerftStats::default();
    walk(state, depth, &mut stats);
    stats
}

fn walk(state: &GameState, depth: u32, stats: &mut PerftStats) {
    if depth == 0 || state.is_over() {
        stats.leaves += 1;
        if state.is_over() { stats.wins += 1; }
        return;
    }
    for m in state.legal_moves() {
        // Moves come from the legal list, so application cannot fail.
        if let Ok((child, report)) = apply_move_with_report(state, m) {
            stats.explosions += report.explosions as u64;
            if report.overrun { stats.overruns += 1; }
            walk(&child, depth - 1, stats);
        }
    }
}
