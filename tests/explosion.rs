use chainbot::board::{apply_move, apply_move_with_report, Cell, GameState, Move, Player, Pos};
use chainbot::io::decode_board;
use chainbot::Error;
use pretty_assertions::assert_eq;

fn cell(state: &GameState, row: usize, col: usize) -> Cell {
    *state.board().get(Pos::new(row, col)).unwrap()
}

fn position(text: &str, to_move: Player) -> GameState {
    GameState::from_board(decode_board(text).expect("valid board"), to_move)
}

#[test]
fn first_corner_move_places_one_orb() {
    let s0 = GameState::default();
    let s1 = apply_move(&s0, Move::new(0, 0, Player::Red)).unwrap();
    assert_eq!(cell(&s1, 0, 0), Cell::occupied(1, Player::Red).unwrap());
    assert_eq!(s1.board().total_orbs(), 1);
    assert_eq!(s1.winner(), None);
    assert_eq!(s1.current_player(), Player::Blue);
}

#[test]
fn corner_explodes_into_both_neighbors() {
    let s = position("1R 0 0\n0 0 0\n0 0 1B", Player::Red);
    let (next, report) = apply_move_with_report(&s, Move::new(0, 0, Player::Red)).unwrap();
    assert_eq!(report.explosions, 1);
    assert_eq!(cell(&next, 0, 0), Cell::EMPTY);
    assert_eq!(cell(&next, 0, 1), Cell::occupied(1, Player::Red).unwrap());
    assert_eq!(cell(&next, 1, 0), Cell::occupied(1, Player::Red).unwrap());
    assert_eq!(next.winner(), None);
    assert_eq!(next.current_player(), Player::Blue);
}

#[test]
fn neighbor_reaching_critical_mass_explodes_in_same_move() {
    let s = position("1R 2B 0\n0 0 0\n0 0 1B", Player::Red);
    let (next, report) = apply_move_with_report(&s, Move::new(0, 0, Player::Red)).unwrap();
    assert_eq!(report.explosions, 2);
    let expected = decode_board("1R 0 1R\n1R 1R 0\n0 0 1B").unwrap();
    assert_eq!(next.board(), &expected);
    assert_eq!(next.board().total_orbs(), s.board().total_orbs() + 1);
}

#[test]
fn capture_of_last_enemy_orbs_stops_the_cascade() {
    let s = position("1R 2B 0\n0 0 0\n0 0 0", Player::Red);
    let (next, report) = apply_move_with_report(&s, Move::new(0, 0, Player::Red)).unwrap();
    assert!(report.stopped_on_win);
    assert_eq!(report.explosions, 1);
    assert_eq!(next.winner(), Some(Player::Red));
    // (0, 1) is at critical mass but resolution stopped once red had won.
    assert_eq!(cell(&next, 0, 1), Cell::occupied(3, Player::Red).unwrap());
}

#[test]
fn exploding_owner_replaces_neighbor_owner() {
    let s = position("0 0 0\n1B 3R 1B\n0 0 1B", Player::Red);
    let next = apply_move(&s, Move::new(1, 1, Player::Red)).unwrap();
    assert_eq!(cell(&next, 1, 0), Cell::occupied(2, Player::Red).unwrap());
    assert_eq!(cell(&next, 1, 2), Cell::occupied(2, Player::Red).unwrap());
    assert_eq!(cell(&next, 2, 2), Cell::occupied(1, Player::Blue).unwrap());
}

#[test]
fn invalid_moves_are_rejected() {
    let s = position("1R 0\n0 1B", Player::Red);
    assert!(matches!(apply_move(&s, Move::new(1, 1, Player::Red)), Err(Error::InvalidMove { row: 1, col: 1, player: Player::Red })));
    assert!(matches!(apply_move(&s, Move::new(2, 0, Player::Red)), Err(Error::InvalidMove { .. })));
    assert!(matches!(apply_move(&s, Move::new(0, 7, Player::Blue)), Err(Error::InvalidMove { .. })));
}

#[test]
fn apply_is_pure_and_deterministic() {
    let s = position("1R 2B 0\n0 0 0\n0 0 1B", Player::Red);
    let before = s.clone();
    let a = apply_move(&s, Move::new(0, 0, Player::Red)).unwrap();
    let b = apply_move(&s, Move::new(0, 0, Player::Red)).unwrap();
    assert_eq!(s, before);
    assert_eq!(a, b);
}

#[test]
fn turn_passes_to_movers_opponent() {
    // Turn authority belongs to the caller; the handoff follows the mover.
    let s = position("0 0\n0 0", Player::Blue);
    let next = apply_move(&s, Move::new(0, 0, Player::Red)).unwrap();
    assert_eq!(next.current_player(), Player::Blue);
}
