use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sim_core::GameTime;
use sim_runtime::GameSession;

fn bench_session(c: &mut Criterion) {
    let Ok(start) = GameSession::new(GameTime::new(1983, 1)) else {
        return;
    };
    c.bench_function("session 40y of quarters", |b| {
        b.iter(|| {
            let mut s = start.clone();
            black_box(s.advance_quarters(160))
        })
    });
}

criterion_group!(benches, bench_session);
criterion_main!(benches);
