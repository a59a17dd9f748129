//! End-to-end determinism and adapter-boundary integration.

use tui_flappy::core::{GameSnapshot, GameState, Scene};
use tui_flappy::term::{FrameBuffer, SceneView, Viewport};
use tui_flappy::types::{DrawCmd, Mode, PIPE_WIDTH};

fn autopilot(game: &GameState) -> bool {
    let bird = game.bird();
    let target = game
        .pipes()
        .iter()
        .find(|pipe| pipe.x + PIPE_WIDTH > bird.x)
        .map(|pipe| pipe.gap_top + 85.0)
        .unwrap_or(240.0);
    bird.y > target
}

#[test]
fn test_same_seed_and_inputs_give_identical_trajectories() {
    let mut a = GameState::new(4242);
    let mut b = GameState::new(4242);

    for _ in 0..1000 {
        let jump = autopilot(&a);
        a.update(jump);
        b.update(jump);
        assert_eq!(GameSnapshot::capture(&a), GameSnapshot::capture(&b));
    }
}

#[test]
fn test_recorded_input_script_replays_exactly() {
    // Record a scripted run...
    let mut original = GameState::new(99);
    let mut script = Vec::new();
    let mut snapshots = Vec::new();
    for _ in 0..600 {
        let jump = autopilot(&original);
        script.push(jump);
        original.update(jump);
        snapshots.push(GameSnapshot::capture(&original));
    }

    // ...and replay it blind on a fresh state with the same seed.
    let mut replay = GameState::new(99);
    for (jump, expected) in script.into_iter().zip(snapshots) {
        replay.update(jump);
        assert_eq!(GameSnapshot::capture(&replay), expected);
    }
}

#[test]
fn test_different_seeds_diverge_in_gap_placement() {
    let mut a = GameState::new(1);
    let mut b = GameState::new(2);

    for _ in 0..91 {
        a.update(autopilot(&a));
        b.update(autopilot(&b));
    }
    assert_eq!(a.pipes().len(), 1);
    assert_eq!(b.pipes().len(), 1);
    assert_ne!(a.pipes()[0].gap_top, b.pipes()[0].gap_top);
}

#[test]
fn test_full_frame_pipeline_update_emit_rasterize() {
    let mut game = GameState::new(31);
    let mut scene = Scene::new();
    let view = SceneView::new();
    let mut fb = FrameBuffer::new(0, 0);

    for _ in 0..200 {
        game.update(autopilot(&game));
        scene.rebuild(&game);
        view.render_into(scene.commands(), Viewport::new(80, 30), &mut fb);
    }

    assert_eq!(game.mode(), Mode::Playing);
    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 30);

    // The frame must carry the background, the bird, two stubs per pipe,
    // and the trailing status line.
    let cmds = scene.commands();
    assert_eq!(cmds.len(), 2 + 2 * game.pipes().len() + 1);
    assert!(matches!(cmds.first(), Some(DrawCmd::FillBackground(_))));
    assert!(matches!(cmds.last(), Some(DrawCmd::Text(_))));
}
