use std::collections::VecDeque;

use criterion::{criterion_group, criterion_main, Criterion};
use common::games::SessionRng;
use common::games::snake::{
    disabled_wall_cells, sample_points, FieldSize, GameRenderer, ManualScheduler, Point,
    SnakeController, SnakeSettings,
};

struct NullRenderer;

impl GameRenderer for NullRenderer {
    fn render(&mut self, _snake_body: &VecDeque<Point>, _walls: &[Point], _food: Point) {}
}

fn bench_ticks_until_finished(c: &mut Criterion) {
    let settings = SnakeSettings {
        rows_count: 30,
        cols_count: 30,
        speed: 10,
        win_length: 50,
        walls_count: 10,
    };

    c.bench_function("snake_30x30_1000_ticks", |b| {
        b.iter(|| {
            let mut controller = SnakeController::new(
                settings,
                ManualScheduler::new(),
                NullRenderer,
                SessionRng::new(42),
            )
            .expect("benchmark settings are valid");
            controller.play();
            for _ in 0..1000 {
                controller.on_tick();
                controller.on_wall_timer();
            }
            controller.state().score()
        });
    });
}

fn bench_wall_placement_crowded_field(c: &mut Criterion) {
    let field = FieldSize::new(10, 10);
    let mut exclude: Vec<Point> = (0..10).map(|x| Point::new(x, 0)).collect();
    exclude.extend(disabled_wall_cells(Point::new(5, 5), &field));

    c.bench_function("sample_60_of_65_free_cells", |b| {
        let mut rng = SessionRng::from_random();
        b.iter(|| sample_points(&mut rng, &field, 60, &exclude).expect("enough free cells"));
    });
}

criterion_group!(benches, bench_ticks_until_finished, bench_wall_placement_crowded_field);
criterion_main!(benches);
