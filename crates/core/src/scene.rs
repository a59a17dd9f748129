//! Scene module - per-frame draw-command emission
//!
//! Maps the game state to an ordered list of [`DrawCmd`]s on the logical
//! 640x480 grid. This is the whole outbound half of the adapter boundary:
//! the rendering side consumes the list without seeing any game rules, and
//! this module performs no I/O, so it can be unit-tested.

use std::fmt::Write as _;

use crate::game_state::GameState;
use crate::types::{DrawCmd, Rgb, BIRD_SIZE, PIPE_GAP, PIPE_WIDTH, SCREEN_HEIGHT};

/// Sky background color
pub const SKY_COLOR: Rgb = Rgb::new(135, 206, 235);

/// Bird fill color
pub const BIRD_COLOR: Rgb = Rgb::new(255, 255, 0);

/// Pipe stub fill color
pub const PIPE_COLOR: Rgb = Rgb::new(34, 139, 34);

/// Reusable draw-command buffer.
///
/// Callers keep one `Scene` and rebuild it every frame; the command list is
/// cleared and refilled in place.
#[derive(Debug, Default)]
pub struct Scene {
    cmds: Vec<DrawCmd>,
    status: String,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            cmds: Vec::with_capacity(2 + 2 * crate::types::MAX_PIPES + 1),
            status: String::with_capacity(64),
        }
    }

    /// Rebuild the command list for the current frame.
    ///
    /// Order matters: background first, then the bird, then each pipe's two
    /// stubs in field order, then the status line on top.
    pub fn rebuild(&mut self, game: &GameState) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::FillBackground(SKY_COLOR));

        let bird = game.bird();
        self.cmds.push(DrawCmd::Rect {
            x: bird.x,
            y: bird.y,
            w: BIRD_SIZE,
            h: BIRD_SIZE,
            color: BIRD_COLOR,
        });

        for pipe in game.pipes() {
            self.cmds.push(DrawCmd::Rect {
                x: pipe.x,
                y: 0.0,
                w: PIPE_WIDTH,
                h: pipe.gap_top,
                color: PIPE_COLOR,
            });
            let bottom_top = pipe.gap_top + PIPE_GAP;
            self.cmds.push(DrawCmd::Rect {
                x: pipe.x,
                y: bottom_top,
                w: PIPE_WIDTH,
                h: SCREEN_HEIGHT - bottom_top,
                color: PIPE_COLOR,
            });
        }

        self.status.clear();
        let _ = write!(self.status, "Score: {}", game.score());
        if game.game_over() {
            self.status.push_str(" | Game Over! Press Space to Restart");
        }
        self.cmds.push(DrawCmd::Text(self.status.clone()));
    }

    /// The commands for the last rebuilt frame, in draw order
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }
}
