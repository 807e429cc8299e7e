use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{apply_move, GameState, Move, Player};
use crate::search::eval::evaluate;

pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub depth: u32,
    /// Seed for the fallback move picker; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: DEFAULT_DEPTH, seed: None } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: f64,
    pub nodes: u64,
    /// The move was picked at random because no root move improved on the initial bound.
    pub fallback: bool,
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// Every child is produced by [`apply_move`], which works on its own copy of
/// the board, so sibling branches never observe each other.
pub struct Searcher {
    pub(crate) nodes: u64,
    depth: u32,
    rng: SmallRng,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        let rng = match params.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_entropy(),
        };
        Self { nodes: 0, depth: params.depth, rng }
    }

    pub fn with_seed(seed: u64) -> Self { Self::new(SearchParams { seed: Some(seed), ..SearchParams::default() }) }

    pub fn depth(&self) -> u32 { self.depth }
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Search at the configured depth.
    pub fn search(&mut self, state: &GameState, ai: Player) -> SearchResult {
        self.search_depth(state, self.depth, ai)
    }

    pub fn search_depth(&mut self, state: &GameState, depth: u32, ai: Player) -> SearchResult {
        self.nodes = 0;
        let (score, best) = self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, ai);
        if best.is_some() || depth == 0 || state.is_over() {
            debug!("search depth={} ai={} best={:?} score={} nodes={}", depth, ai, best, score, self.nodes);
            return SearchResult { best_move: best, score, nodes: self.nodes, fallback: false };
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            return SearchResult { best_move: None, score, nodes: self.nodes, fallback: false };
        }
        let mv = moves[self.rng.gen_range(0..moves.len())];
        debug!("search depth={} ai={} found no improving move (score {}); random fallback {}", depth, ai, score, mv);
        SearchResult { best_move: Some(mv), score, nodes: self.nodes, fallback: true }
    }

    fn alphabeta(&mut self, state: &GameState, depth: u32, mut alpha: f64, mut beta: f64, ai: Player) -> (f64, Option<Move>) {
        self.nodes += 1;
        if depth == 0 || state.is_over() { return (evaluate(state, ai), None); }
        let moves = state.legal_moves();
        if moves.is_empty() { return (evaluate(state, ai), None); }

        // Side is read off the node itself rather than assumed to alternate.
        let maximizing = state.current_player() == ai;
        let mut best_score = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        let mut best_move: Option<Move> = None;
        for mv in moves {
            let child = match apply_move(state, mv) {
                Ok(c) => c,
                Err(e) => { warn!("skipping {}: {}", mv, e); continue; }
            };
            let (score, _) = self.alphabeta(&child, depth - 1, alpha, beta, ai);
            if maximizing {
                if score > best_score { best_score = score; best_move = Some(mv); }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score { best_score = score; best_move = Some(mv); }
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                trace!("cutoff at depth {} after {} (alpha={} beta={})", depth, mv, alpha, beta);
                break;
            }
        }
        (best_score, best_move)
    }
}

/// One-shot search with an entropy-seeded fallback picker.
pub fn minimax_search(state: &GameState, depth_limit: u32, ai: Player) -> (f64, Option<Move>) {
    let r = Searcher::default().search_depth(state, depth_limit, ai);
    (r.score, r.best_move)
}
