use anyhow::Result;
use chainbot::io::read_state_file;
use chainbot::search::{SearchParams, Searcher};
use chainbot::selfplay::{play_game, SelfPlayParams};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "chainbot-bench", version, about = "Benchmark ChainBot search throughput")]
struct Args {
    /// Turn file to search from (default: a mid-game position from a seeded self-play game)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Fixed search depth
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Plies of self-play used to reach the benchmark position
    #[arg(long, default_value_t = 12)]
    plies: usize,

    /// Searches to run
    #[arg(long, default_value_t = 5)]
    iters: usize,

    #[arg(long, default_value_t = 7u64)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let state = match &args.file {
        Some(p) => read_state_file(p)?.state,
        None => {
            let params = SelfPlayParams { max_plies: args.plies, depth: 1, seed: args.seed, opening_plies: args.plies, ..SelfPlayParams::default() };
            play_game(&params, 0)?.replay()?
        }
    };
    if state.is_over() { anyhow::bail!("benchmark position is already decided"); }

    let mut total_nodes = 0u64;
    let t0 = Instant::now();
    let mut last = None;
    for i in 0..args.iters {
        let mut s = Searcher::new(SearchParams { depth: args.depth, seed: Some(args.seed + i as u64) });
        let r = s.search(&state, state.current_player());
        total_nodes += r.nodes;
        last = Some(r);
    }
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { total_nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    let best = last.as_ref().and_then(|r| r.best_move).map(|m| m.to_string()).unwrap_or_else(|| "(none)".to_string());
    let score = last.map(|r| r.score).unwrap_or(0.0);
    println!("bestmove={} score={} nodes={} elapsed={:.3}s nps={:.1}", best, score, total_nodes, dt.as_secs_f64(), nps);
    Ok(())
}
