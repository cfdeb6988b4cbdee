use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radial_gesture_menu::radial_menu::engine::{
    center_angle, selection_from_drag, Point, ScreenSize, SectorBounds,
};

fn bench_center_angle(c: &mut Criterion) {
    let screen = ScreenSize::new(1080.0, 2400.0);
    let touches: Vec<Point> = (0..1_000)
        .map(|i| Point::new((i % 40) as f32 * 27.0, (i / 40) as f32 * 96.0))
        .collect();
    c.bench_function("center_angle_1k", |b| {
        b.iter(|| {
            for touch in &touches {
                black_box(center_angle(black_box(*touch), screen));
            }
        })
    });
}

fn bench_selection(c: &mut Criterion) {
    let sectors = SectorBounds::default();
    let drags: Vec<Point> = (0..1_000)
        .map(|i| {
            let rad = (i as f32 * 0.36).to_radians();
            Point::new(rad.cos() * 80.0, rad.sin() * 80.0)
        })
        .collect();
    c.bench_function("selection_from_drag_1k", |b| {
        b.iter(|| {
            for drag in &drags {
                black_box(selection_from_drag(black_box(*drag), 270.0, 50.0, &sectors));
            }
        })
    });
}

criterion_group!(benches, bench_center_angle, bench_selection);
criterion_main!(benches);
