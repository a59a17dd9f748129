//! Snapshot module - plain copies of the observable state
//!
//! Snapshots decouple observers (tests, external tooling) from the live
//! [`GameState`]: capturing is cheap, comparisons are exact, and holding a
//! snapshot never aliases the simulation's own data.

use arrayvec::ArrayVec;

use crate::game_state::GameState;
use crate::types::{Mode, MAX_PIPES};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSnapshot {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSnapshot {
    pub x: f32,
    pub gap_top: f32,
}

/// Everything an observer can see about a frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub mode: Mode,
    pub score: u32,
    pub high_score: u32,
    pub bird: BirdSnapshot,
    pub pipes: ArrayVec<PipeSnapshot, MAX_PIPES>,
}

impl GameSnapshot {
    /// Capture the current frame's observable state
    pub fn capture(game: &GameState) -> Self {
        let bird = game.bird();
        Self {
            mode: game.mode(),
            score: game.score(),
            high_score: game.high_score(),
            bird: BirdSnapshot {
                x: bird.x,
                y: bird.y,
                vy: bird.vy,
            },
            pipes: game
                .pipes()
                .iter()
                .map(|pipe| PipeSnapshot {
                    x: pipe.x,
                    gap_top: pipe.gap_top,
                })
                .collect(),
        }
    }
}
