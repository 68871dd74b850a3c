use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sim_core::{ComputerModel, Segment};
use sim_scoring::{calculate_category_score, evaluate_configuration, Build};

fn office() -> ComputerModel {
    ComputerModel {
        name: "Office 486".into(),
        cpu: "Intel 80486".into(),
        gpu: "VGA Graphics".into(),
        ram: "2MB RAM".into(),
        sound: "Yamaha YM2149".into(),
        accessories: vec!["40MB Hard Drive".into(), "VGA Monitor".into()],
        case: Some("Standard Case".into()),
        case_quality: None,
    }
}

fn bench_scoring(c: &mut Criterion) {
    let model = office();
    c.bench_function("category score x3", |b| {
        let build = Build::from(&model);
        b.iter(|| {
            for seg in Segment::ALL {
                black_box(calculate_category_score(black_box(&build), seg));
            }
        })
    });
    c.bench_function("evaluate configuration", |b| {
        b.iter(|| black_box(evaluate_configuration(black_box(&model))))
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
