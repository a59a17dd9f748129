//! Pipes module - obstacle spawning, motion, and recycling
//!
//! Pipes spawn at the right edge on a frame-counter cadence, scroll left at
//! a uniform speed, and are recycled once fully past the left edge. The
//! spawn order is the left-to-right screen order, so the list never needs
//! sorting. Gap placement comes from an injected [`SimpleRng`] so the whole
//! sequence is reproducible from a seed.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{
    MAX_PIPES, PIPE_GAP_TOP_MIN, PIPE_GAP_TOP_SPAN, PIPE_SPAWN_INTERVAL, PIPE_SPEED, PIPE_WIDTH,
    SCREEN_WIDTH,
};

/// A single obstacle: a vertical pair of stubs with an open gap between
/// `gap_top` and `gap_top + PIPE_GAP`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,
    /// Height of the top stub, i.e. the y coordinate where the gap begins
    pub gap_top: f32,
}

impl Pipe {
    /// Create a pipe at the right screen edge with the given gap placement
    pub fn spawn(gap_top: f32) -> Self {
        Self {
            x: SCREEN_WIDTH,
            gap_top,
        }
    }

    /// Move one frame's distance to the left
    pub fn advance(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// Whether the pipe's right edge has fully passed the left screen edge.
    ///
    /// Strict comparison: a pipe sitting exactly at `x = -PIPE_WIDTH`
    /// survives the frame and is recycled on the next one.
    pub fn off_screen(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }
}

/// The live pipe collection plus the spawn cadence and gap randomness.
///
/// Owns every pipe exclusively; callers observe pipes through [`Self::pipes`]
/// and drive the whole field one frame at a time through [`Self::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct PipeField {
    pipes: ArrayVec<Pipe, MAX_PIPES>,
    spawn_timer: u32,
    rng: SimpleRng,
}

impl PipeField {
    /// Create an empty field with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            pipes: ArrayVec::new(),
            spawn_timer: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// Advance the field one playing frame.
    ///
    /// Increments the spawn timer (spawning when it exceeds
    /// `PIPE_SPAWN_INTERVAL`), moves every pipe left - including one spawned
    /// this frame - and removes pipes that have fully left the screen.
    /// Returns how many pipes were recycled; the caller scores each one.
    ///
    /// Removal filters the list in one pass rather than deleting by index
    /// mid-iteration, so several pipes leaving on the same frame are each
    /// counted.
    pub fn step(&mut self) -> u32 {
        self.spawn_timer += 1;
        if self.spawn_timer > PIPE_SPAWN_INTERVAL {
            self.spawn_timer = 0;
            let gap_top = (PIPE_GAP_TOP_MIN + self.rng.next_range(PIPE_GAP_TOP_SPAN)) as f32;
            let _ = self.pipes.try_push(Pipe::spawn(gap_top));
        }

        for pipe in &mut self.pipes {
            pipe.advance();
        }

        let before = self.pipes.len();
        self.pipes.retain(|pipe| !pipe.off_screen());
        (before - self.pipes.len()) as u32
    }

    /// The live pipes in left-to-right screen order
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    /// Clear all pipes and restart the spawn cadence.
    ///
    /// The RNG is deliberately left running so the gap sequence continues
    /// across restarts instead of repeating the first episode.
    pub fn reset(&mut self) {
        self.pipes.clear();
        self.spawn_timer = 0;
    }

    /// Current spawn timer value (frames since the last spawn or reset)
    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    /// Current RNG state (for observing sequence continuity)
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}
