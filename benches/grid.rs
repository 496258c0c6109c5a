use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridwalk::core::{Grid, Player, SimpleRng, World};
use gridwalk::term::{Drawable, FrameBuffer};
use gridwalk::types::{Command, Direction, InputEvent, Point};

fn bench_fill_random(c: &mut Criterion) {
    let mut grid = Grid::new(240, 80);
    let mut rng = SimpleRng::new(12345);

    c.bench_function("fill_random_240x80", |b| {
        b.iter(|| {
            grid.fill_random(black_box(&mut rng));
        })
    });
}

fn bench_can_move(c: &mut Criterion) {
    let mut grid = Grid::new(240, 80);
    grid.fill_random(&mut SimpleRng::new(12345));

    c.bench_function("can_move", |b| {
        b.iter(|| grid.can_move(black_box(Point::new(10, 10)), black_box(Point::new(9, 10))))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut grid = Grid::new(240, 80);
    grid.fill_uniform();
    let mut world = World::new(grid, Player::default());
    let mut flip = false;

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            flip = !flip;
            let direction = if flip { Direction::Right } else { Direction::Left };
            world.apply(black_box(InputEvent::Command(Command::Move(direction))))
        })
    });
}

fn bench_draw_grid(c: &mut Criterion) {
    let mut grid = Grid::new(240, 80);
    grid.fill_random(&mut SimpleRng::new(12345));
    let mut fb = FrameBuffer::new(240, 80);

    c.bench_function("draw_grid_240x80", |b| {
        b.iter(|| {
            grid.draw(black_box(&mut fb));
        })
    });
}

criterion_group!(
    benches,
    bench_fill_random,
    bench_can_move,
    bench_apply_move,
    bench_draw_grid
);
criterion_main!(benches);
