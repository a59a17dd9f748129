//! Game state module - the Playing/GameOver machine and the frame pipeline
//!
//! Ties the bird, the pipe field, and the collision predicates together.
//! All mutation happens inside the single [`GameState::update`] call per
//! frame; the host loop owns the state value and threads it through
//! update/render explicitly.

use crate::bird::Bird;
use crate::collision::{bird_hits_any, bird_out_of_bounds};
use crate::pipes::{Pipe, PipeField};
use crate::types::Mode;

/// Complete game state
///
/// One instance per process run, reset in place on restart. The high score
/// persists across restarts (and only across restarts; it is in-memory
/// state, gone on process exit).
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    bird: Bird,
    field: PipeField,
    score: u32,
    high_score: u32,
    mode: Mode,
}

impl GameState {
    /// Create a new game with the given RNG seed, ready to play
    pub fn new(seed: u32) -> Self {
        Self {
            bird: Bird::spawn(),
            field: PipeField::new(seed),
            score: 0,
            high_score: 0,
            mode: Mode::Playing,
        }
    }

    /// Advance one frame.
    ///
    /// `jump_held` is the level-sampled input for this frame: true while the
    /// jump key is currently held, sampled once per tick at the adapter
    /// boundary.
    ///
    /// In GameOver mode nothing moves; a held jump restarts the game.
    /// In Playing mode the frame runs the reference-literal order:
    ///
    /// 1. integrate gravity and position
    /// 2. bounds check
    /// 3. jump-velocity overwrite (takes effect next frame)
    /// 4. pipe spawn/move/recycle, scoring each recycled pipe
    /// 5. pipe collision check against post-movement positions
    pub fn update(&mut self, jump_held: bool) {
        if self.mode == Mode::GameOver {
            if jump_held {
                self.reset();
            }
            return;
        }

        self.bird.integrate();
        if bird_out_of_bounds(&self.bird) {
            self.mode = Mode::GameOver;
        }

        if jump_held {
            self.bird.flap();
        }

        let recycled = self.field.step();
        self.score += recycled;
        self.high_score = self.high_score.max(self.score);

        if bird_hits_any(&self.bird, self.field.pipes()) {
            self.mode = Mode::GameOver;
        }
    }

    /// Restart from GameOver: bird back to spawn, pipes cleared, score and
    /// spawn timer zeroed. The high score and the RNG sequence carry over.
    fn reset(&mut self) {
        self.bird = Bird::spawn();
        self.field.reset();
        self.score = 0;
        self.mode = Mode::Playing;
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        self.field.pipes()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn game_over(&self) -> bool {
        self.mode.is_game_over()
    }

    /// Spawn timer of the pipe field (frames since the last spawn or reset)
    pub fn spawn_timer(&self) -> u32 {
        self.field.spawn_timer()
    }
}
