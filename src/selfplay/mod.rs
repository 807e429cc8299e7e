use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::board::{apply_move_with_report, GameState, Move, Player, DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::Result;
use crate::search::alphabeta::{SearchParams, Searcher, DEFAULT_DEPTH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub threads: usize,
    pub depth: u32,
    pub seed: u64,
    pub rows: usize,
    pub cols: usize,
    pub opening_plies: usize, // uniformly random moves before the engines take over
    /// Red opens on its first legal square, as the GUI's AI-vs-AI mode does.
    pub first_legal_opening: bool,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self {
            games: 1,
            max_plies: 200,
            threads: 1,
            depth: DEFAULT_DEPTH,
            seed: 0,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            opening_plies: 0,
            first_legal_opening: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub rows: usize,
    pub cols: usize,
    pub moves: Vec<Move>,
    pub winner: Option<Player>,
    pub fallbacks: u32,
    pub overruns: u32,
}

impl GameRecord {
    /// Replay the recorded moves from an empty board.
    pub fn replay(&self) -> Result<GameState> {
        let mut state = GameState::new(self.rows, self.cols)?;
        for &m in &self.moves { state = state.apply(m)?; }
        Ok(state)
    }
}

/// Per-game seed; games are independent of scheduling order.
fn game_seed(base: u64, index: usize) -> u64 {
    base ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

pub fn play_game(params: &SelfPlayParams, index: usize) -> Result<GameRecord> {
    let seed = game_seed(params.seed, index);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut searchers = [
        Searcher::new(SearchParams { depth: params.depth, seed: Some(seed.rotate_left(17)) }),
        Searcher::new(SearchParams { depth: params.depth, seed: Some(seed.rotate_left(31)) }),
    ];
    let mut state = GameState::new(params.rows, params.cols)?;
    let mut record = GameRecord { rows: params.rows, cols: params.cols, moves: Vec::new(), winner: None, fallbacks: 0, overruns: 0 };
    while record.moves.len() < params.max_plies && !state.is_over() {
        let side = state.current_player();
        let ply = record.moves.len();
        let mv = if ply == 0 && params.first_legal_opening {
            state.legal_moves().first().copied()
        } else if ply < params.opening_plies {
            let moves = state.legal_moves();
            if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
        } else {
            let s = &mut searchers[side as usize];
            let r = s.search(&state, side);
            if r.fallback { record.fallbacks += 1; }
            r.best_move
        };
        let Some(mv) = mv else { break };
        let (next, report) = apply_move_with_report(&state, mv)?;
        if report.overrun { record.overruns += 1; }
        record.moves.push(mv);
        state = next;
    }
    record.winner = state.winner();
    debug!("game {} finished after {} plies, winner {:?}", index, record.moves.len(), record.winner);
    Ok(record)
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    generate_games_with(params, |_| {})
}

/// Play `params.games` games, calling `on_done` as each one finishes.
pub fn generate_games_with<F>(params: &SelfPlayParams, on_done: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    let run = |i: usize| -> Result<GameRecord> {
        let g = play_game(params, i)?;
        on_done(&g);
        Ok(g)
    };
    let games = if params.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.threads)
            .build()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        pool.install(|| (0..params.games).into_par_iter().map(run).collect::<Result<Vec<_>>>())?
    } else {
        (0..params.games).map(run).collect::<Result<Vec<_>>>()?
    };
    info!("generated {} games (depth {}, seed {})", games.len(), params.depth, params.seed);
    Ok(games)
}

/// One JSON object per line.
pub fn write_records<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let r = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
