//! Shared types module - constants and pure data structures
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, making them usable
//! in any context (simulation core, terminal rendering, tests).
//!
//! # Logical Resolution
//!
//! The simulation runs on a fixed 640x480 logical pixel grid regardless of
//! the host terminal size; the renderer scales it to character cells.
//!
//! # Simulation Constants
//!
//! All motion is per fixed frame (no delta-time scaling):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `GRAVITY` | 0.25 | Downward acceleration per frame |
//! | `JUMP_STRENGTH` | -5.0 | Vertical velocity overwrite on jump |
//! | `PIPE_SPEED` | 3.0 | Leftward pipe motion per frame |
//! | `PIPE_SPAWN_INTERVAL` | 90 | Frames the spawn timer must exceed |
//!
//! The spawn timer increments before the threshold check, so pipes appear on
//! the 91st playing frame and every 91 frames after that.
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{DrawCmd, Mode, Rgb, BIRD_SIZE, SCREEN_WIDTH};
//!
//! assert_eq!(SCREEN_WIDTH, 640.0);
//! assert_eq!(BIRD_SIZE, 20.0);
//!
//! let mode = Mode::Playing;
//! assert!(!mode.is_game_over());
//!
//! let cmd = DrawCmd::FillBackground(Rgb::new(135, 206, 235));
//! assert!(matches!(cmd, DrawCmd::FillBackground(_)));
//! ```

/// Logical screen width in pixels
pub const SCREEN_WIDTH: f32 = 640.0;

/// Logical screen height in pixels
pub const SCREEN_HEIGHT: f32 = 480.0;

/// Bird bounding-box side length (the bird is a square)
pub const BIRD_SIZE: f32 = 20.0;

/// Pipe width in logical pixels
pub const PIPE_WIDTH: f32 = 50.0;

/// Vertical gap height shared by all pipes
pub const PIPE_GAP: f32 = 120.0;

/// Downward acceleration added to the bird's vertical velocity every frame
pub const GRAVITY: f32 = 0.25;

/// Vertical velocity the bird is set to on a jump (negative = upward)
pub const JUMP_STRENGTH: f32 = -5.0;

/// Horizontal distance every pipe moves left per frame
pub const PIPE_SPEED: f32 = 3.0;

/// Spawn timer threshold in frames; a pipe spawns when the timer exceeds it
pub const PIPE_SPAWN_INTERVAL: u32 = 90;

/// Lowest possible gap top (SCREEN_HEIGHT / 8)
pub const PIPE_GAP_TOP_MIN: u32 = 60;

/// Size of the gap-top range; draws are uniform over `[60, 60 + 240)`
pub const PIPE_GAP_TOP_SPAN: u32 = 240;

/// Bird spawn x position (SCREEN_WIDTH / 4)
pub const BIRD_START_X: f32 = 160.0;

/// Bird spawn y position (SCREEN_HEIGHT / 2)
pub const BIRD_START_Y: f32 = 240.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Capacity of the live pipe list.
///
/// A pipe needs 230 frames to cross the screen and spawns are 91 frames
/// apart, so at most 3 pipes are ever live; 8 leaves generous headroom.
pub const MAX_PIPES: usize = 8;


/// The two modes of the game state machine
///
/// - **Playing**: physics, spawning, and collision run every frame
/// - **GameOver**: state is frozen; only the restart check runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Playing,
    GameOver,
}

impl Mode {
    /// Whether the game has reached its terminal state
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flappy_types::Mode;
    ///
    /// assert!(Mode::GameOver.is_game_over());
    /// assert!(!Mode::Playing.is_game_over());
    /// ```
    pub fn is_game_over(&self) -> bool {
        matches!(self, Mode::GameOver)
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single drawing instruction emitted by the simulation core.
///
/// The core produces an ordered list of these once per frame; the rendering
/// side consumes the list without knowing anything about game rules.
/// Coordinates are logical pixels on the fixed 640x480 grid.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole logical screen with one color
    FillBackground(Rgb),
    /// Fill an axis-aligned rectangle
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
    /// Draw a status line at the top-left corner
    Text(String),
}
