use anyhow::{bail, Context, Result};
use chainbot::board::{GameState, Move, Player, DEFAULT_COLS, DEFAULT_ROWS};
use chainbot::io::{encode_board, read_state_file, write_state_file, StateFile};
use chainbot::perft::perft_stats;
use chainbot::search::{signals, SearchParams, Searcher, DEFAULT_DEPTH};
use chainbot::selfplay::{generate_games_with, write_records, SelfPlayParams};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "chainbot", author, version, about = "Chain-reaction engine with alpha-beta move selection", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an empty board to a turn file
    New {
        #[arg(long, default_value = "gamestate.txt")]
        file: PathBuf,
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
    },
    /// Place an orb for the side to move
    Place {
        #[arg(long, default_value = "gamestate.txt")]
        file: PathBuf,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
    },
    /// Let the engine move for the side to move
    Move {
        #[arg(long, default_value = "gamestate.txt")]
        file: PathBuf,
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
        /// Seed for the fallback move picker
        #[arg(long)]
        seed: Option<u64>,
        /// Only move if this side is to play
        #[arg(long)]
        ai: Option<Player>,
    },
    /// Print a turn file with per-side heuristic terms
    Show {
        #[arg(long, default_value = "gamestate.txt")]
        file: PathBuf,
    },
    /// Play engine-vs-engine games
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        #[arg(long, default_value_t = 2)]
        opening_plies: usize,
        /// Open on red's first legal square instead of a random one
        #[arg(long)]
        first_legal_opening: bool,
        #[arg(long, default_value_t = 1)]
        threads: usize,
        #[arg(long, default_value_t = 1u64)]
        seed: u64,
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
        /// Write game records as JSON lines
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Count move-tree leaves from the empty board
    Perft {
        #[arg(long, default_value_t = 2)]
        depth: u32,
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
    },
}

fn load(file: &PathBuf) -> Result<StateFile> {
    read_state_file(file).with_context(|| format!("reading {}", file.display()))
}

fn save(file: &PathBuf, state: GameState) -> Result<()> {
    write_state_file(file, &StateFile::from_state(state)).with_context(|| format!("writing {}", file.display()))
}

fn print_state(state: &GameState) {
    println!("{}", encode_board(state.board()));
    match state.winner() {
        Some(w) => println!("winner: {}", w),
        None => println!("to move: {}", state.current_player()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::New { file, rows, cols } => {
            let state = GameState::new(rows, cols)?;
            save(&file, state)?;
            println!("new {}x{} game written to {}", rows, cols, file.display());
        }
        Command::Place { file, row, col } => {
            let state = load(&file)?.state;
            if state.is_over() { bail!("game already ended"); }
            let mv = Move::new(row, col, state.current_player());
            let next = state.apply(mv)?;
            print_state(&next);
            save(&file, next)?;
        }
        Command::Move { file, depth, seed, ai } => {
            let state = load(&file)?.state;
            if state.is_over() { bail!("game already ended"); }
            let side = state.current_player();
            if let Some(ai) = ai {
                if ai != side { bail!("not {}'s turn ({} to move)", ai, side); }
            }
            let t0 = Instant::now();
            let mut searcher = Searcher::new(SearchParams { depth, seed });
            let res = searcher.search(&state, side);
            let dt = t0.elapsed();
            let Some(mv) = res.best_move else { bail!("no legal moves for {}", side) };
            println!("{} plays ({}, {}) score={} nodes={} fallback={} elapsed={:.3}s", side, mv.row, mv.col, res.score, res.nodes, res.fallback, dt.as_secs_f64());
            let next = state.apply(mv)?;
            print_state(&next);
            save(&file, next)?;
        }
        Command::Show { file } => {
            let state = load(&file)?.state;
            print_state(&state);
            for p in [Player::Red, Player::Blue] {
                let s = signals(state.board(), p);
                println!("{:>4}: orbs={} critical={} control={} chain={} safety={} score={:.1}", p, s.orbs, s.critical, s.control, s.chain, s.safety, chainbot::search::evaluate(&state, p));
            }
        }
        Command::Selfplay { games, depth, max_plies, opening_plies, first_legal_opening, threads, seed, rows, cols, out } => {
            let params = SelfPlayParams { games, max_plies, threads: threads.max(1), depth, seed, rows, cols, opening_plies, first_legal_opening };
            let pb = ProgressBar::new(games as u64);
            pb.set_style(ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} games")?);
            let t0 = Instant::now();
            let records = generate_games_with(&params, |_| pb.inc(1))?;
            pb.finish();
            let red = records.iter().filter(|g| g.winner == Some(Player::Red)).count();
            let blue = records.iter().filter(|g| g.winner == Some(Player::Blue)).count();
            let plies: usize = records.iter().map(|g| g.moves.len()).sum();
            println!("games={} red={} blue={} unfinished={} avg_plies={:.1} elapsed={:.2}s",
                records.len(), red, blue, records.len() - red - blue,
                plies as f64 / records.len().max(1) as f64, t0.elapsed().as_secs_f64());
            if let Some(path) = out {
                write_records(&records, &path).with_context(|| format!("writing {}", path.display()))?;
                println!("records written to {}", path.display());
            }
        }
        Command::Perft { depth, rows, cols } => {
            let state = GameState::new(rows, cols)?;
            let t0 = Instant::now();
            let s = perft_stats(&state, depth);
            println!("perft({}) = {} explosions={} wins={} overruns={} elapsed={:.3}s", depth, s.leaves, s.explosions, s.wins, s.overruns, t0.elapsed().as_secs_f64());
        }
    }

    Ok(())
}
