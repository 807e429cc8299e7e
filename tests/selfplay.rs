use chainbot::board::{Move, Player};
use chainbot::selfplay::{generate_games, play_game, read_records, write_records, SelfPlayParams};

fn params(seed: u64, threads: usize) -> SelfPlayParams {
    SelfPlayParams { games: 3, max_plies: 40, threads, depth: 1, seed, rows: 4, cols: 4, opening_plies: 2, first_legal_opening: false }
}

#[test]
fn selfplay_is_deterministic_by_seed() {
    let g1 = generate_games(&params(42, 1)).unwrap();
    let g2 = generate_games(&params(42, 1)).unwrap();
    assert_eq!(g1.len(), 3);
    assert_eq!(g1, g2);
}

#[test]
fn parallel_games_match_sequential_ones() {
    let seq = generate_games(&params(7, 1)).unwrap();
    let par = generate_games(&params(7, 3)).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn records_replay_and_survive_jsonl() {
    let games = generate_games(&params(9, 1)).unwrap();
    for g in &games {
        let end = g.replay().unwrap();
        assert_eq!(end.winner(), g.winner);
        assert!(g.winner.is_some() || g.moves.len() == 40);
    }
    let path = std::env::temp_dir().join(format!("chainbot_selfplay_{}.jsonl", std::process::id()));
    write_records(&games, &path).unwrap();
    let back = read_records(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(back, games);
}

#[test]
fn first_legal_opening_starts_in_the_corner() {
    let p = SelfPlayParams { first_legal_opening: true, ..params(3, 1) };
    for i in 0..3 {
        let g = play_game(&p, i).unwrap();
        assert_eq!(g.moves[0], Move::new(0, 0, Player::Red));
    }
}
