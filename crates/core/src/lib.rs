//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, terminal I/O, or the host
//! clock, making it:
//!
//! - **Deterministic**: Same seed and input script produce identical games
//! - **Testable**: Every rule is exercised by unit and scenario tests
//! - **Portable**: Can run headless or behind any renderer
//! - **Fast**: The per-frame update path performs no heap allocation
//!
//! # Module Structure
//!
//! - [`bird`]: the player entity and its physics integration
//! - [`pipes`]: pipe spawning, motion, and off-screen recycling
//! - [`collision`]: bounds and pipe-overlap predicates
//! - [`game_state`]: the Playing/GameOver state machine and frame pipeline
//! - [`scene`]: per-frame draw-command emission
//! - [`snapshot`]: plain copies of the observable state
//! - [`rng`]: seeded LCG injected into the pipe spawner
//!
//! # Game Rules
//!
//! One update call per fixed frame. In Playing mode the frame runs, in order:
//! gravity integration, bounds check, jump-velocity overwrite, pipe
//! spawn/move/recycle (each recycled pipe scores a point), pipe collision
//! check. Any collision or out-of-bounds position is terminal. In GameOver
//! mode the state is frozen until a jump sample restarts the game; the high
//! score survives restarts.
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::GameState;
//!
//! let mut game = GameState::new(12345);
//!
//! // One frame of free fall.
//! game.update(false);
//! assert_eq!(game.bird().vy, 0.25);
//!
//! // A jump pins the velocity for the next frame's integration step.
//! game.update(true);
//! assert_eq!(game.bird().vy, -5.0);
//! ```

pub mod bird;
pub mod collision;
pub mod game_state;
pub mod pipes;
pub mod rng;
pub mod scene;
pub mod snapshot;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use collision::{bird_hits_pipe, bird_out_of_bounds};
pub use game_state::GameState;
pub use pipes::{Pipe, PipeField};
pub use rng::SimpleRng;
pub use scene::Scene;
pub use snapshot::{BirdSnapshot, GameSnapshot, PipeSnapshot};
