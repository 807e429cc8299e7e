use chainbot::board::{GameState, Player};
use chainbot::selfplay::{play_game, SelfPlayParams};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn midgame() -> GameState {
    let params = SelfPlayParams { max_plies: 16, opening_plies: 16, seed: 3, ..SelfPlayParams::default() };
    play_game(&params, 0).unwrap().replay().unwrap()
}

fn bench_eval(c: &mut Criterion) {
    let s = midgame();
    c.bench_function("evaluate_midgame", |ben| {
        ben.iter(|| {
            let v = chainbot::search::evaluate(black_box(&s), Player::Blue);
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
