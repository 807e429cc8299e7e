use chainbot::board::{GameState, Player, Pos};
use chainbot::io::decode_board;
use chainbot::search::eval::{chain_potential, evaluate, positional_safety, signals, simulate_chain, Signals};
use pretty_assertions::assert_eq;

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn empty_board_scores_zero() {
    let s = GameState::default();
    assert_eq!(signals(s.board(), Player::Red), Signals::default());
    assert_eq!(evaluate(&s, Player::Blue), 0.0);
}

#[test]
fn decided_states_are_infinite() {
    let b = decode_board("1R 0\n0 1R").unwrap();
    let s = GameState::from_board(b, Player::Blue);
    assert_eq!(s.winner(), Some(Player::Red));
    assert_eq!(evaluate(&s, Player::Red), f64::INFINITY);
    assert_eq!(evaluate(&s, Player::Blue), f64::NEG_INFINITY);
}

#[test]
fn signals_from_both_sides() {
    let b = decode_board("1R 0 0\n0 3B 0\n0 0 1R").unwrap();
    let red = signals(&b, Player::Red);
    assert_eq!(red, Signals { orbs: -1, critical: 10, control: 1, chain: 2, safety: 4 });
    let blue = signals(&b, Player::Blue);
    assert_eq!(blue, Signals { orbs: 1, critical: -10, control: -1, chain: 1, safety: -3 });

    let s = GameState::from_board(b, Player::Red);
    assert!(approx(evaluate(&s, Player::Red), 28.1), "{}", evaluate(&s, Player::Red));
    assert!(approx(evaluate(&s, Player::Blue), -21.7), "{}", evaluate(&s, Player::Blue));
}

#[test]
fn loaded_enemy_neighbor_costs_ten() {
    let b = decode_board("1R 2B 0\n0 0 0\n0 0 0").unwrap();
    // corner bonus 5, loaded blue neighbour -10, own square one short -3
    assert_eq!(positional_safety(&b, Player::Red), -8);
    // edge bonus 3, loaded red neighbour -10, own square one short -3
    assert_eq!(positional_safety(&b, Player::Blue), -10);
}

#[test]
fn gradual_threat_is_floored() {
    let b = decode_board("0 1R 0\n0 2B 0\n0 0 0").unwrap();
    // edge bonus 3, floor(5 * 2 / 4) = 2
    assert_eq!(positional_safety(&b, Player::Red), 1);
    // interior, floor(5 * 1 / 3) = 1
    assert_eq!(positional_safety(&b, Player::Blue), -1);
}

#[test]
fn chain_probe_counts_transitive_explosions() {
    let b = decode_board("1R 2R 0\n0 0 0\n0 0 1B").unwrap();
    // (0,0) explodes and pushes (0,1) to 3, which explodes in turn.
    assert_eq!(simulate_chain(&b, Pos::new(0, 0), Player::Red), 2);
    // (0,1) alone: 3 orbs on an edge, neighbours (0,0)=2 explodes, (0,2)=1, (1,1)=1.
    assert_eq!(simulate_chain(&b, Pos::new(0, 1), Player::Red), 2);
    assert_eq!(chain_potential(&b, Player::Red), 4);
    // The probe works on a copy.
    assert_eq!(b, decode_board("1R 2R 0\n0 0 0\n0 0 1B").unwrap());
}

#[test]
fn phase_uses_orb_differential_magnitude() {
    let behind = Signals { orbs: -20, chain: 1, ..Signals::default() };
    let ahead = Signals { orbs: 20, chain: 1, ..Signals::default() };
    assert_eq!(behind.phase_multiplier(), 1.5);
    assert_eq!(ahead.phase_multiplier(), 1.5);
    assert!(approx(behind.blend(), -10.0 + 4.5));
}
