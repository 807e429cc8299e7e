use chainbot::board::{GameState, Move, Player};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_search(c: &mut Criterion) {
    let s = GameState::default()
        .apply(Move::new(0, 0, Player::Red)).unwrap()
        .apply(Move::new(4, 3, Player::Blue)).unwrap();
    c.bench_function("search_depth_3_opening", |ben| {
        ben.iter(|| {
            let mut searcher = chainbot::search::Searcher::with_seed(1);
            let r = searcher.search_depth(black_box(&s), 3, Player::Red);
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
