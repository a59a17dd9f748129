use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_flappy::core::{GameState, PipeField, Scene};
use tui_flappy::term::{FrameBuffer, SceneView, Viewport};

fn bench_update(c: &mut Criterion) {
    let mut game = GameState::new(12345);

    c.bench_function("game_update_frame", |b| {
        b.iter(|| {
            if game.game_over() {
                game.update(true);
            } else {
                game.update(black_box(false));
            }
        })
    });
}

fn bench_pipe_field_step(c: &mut Criterion) {
    let mut field = PipeField::new(12345);

    c.bench_function("pipe_field_step", |b| {
        b.iter(|| {
            black_box(field.step());
        })
    });
}

fn bench_scene_rebuild(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    for _ in 0..200 {
        if game.game_over() {
            game.update(true);
        } else {
            game.update(false);
        }
    }
    let mut scene = Scene::new();

    c.bench_function("scene_rebuild", |b| {
        b.iter(|| {
            scene.rebuild(black_box(&game));
        })
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let game = GameState::new(12345);
    let mut scene = Scene::new();
    scene.rebuild(&game);
    let view = SceneView::new();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("rasterize_80x30", |b| {
        b.iter(|| {
            view.render_into(black_box(scene.commands()), Viewport::new(80, 30), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_pipe_field_step,
    bench_scene_rebuild,
    bench_rasterize
);
criterion_main!(benches);
