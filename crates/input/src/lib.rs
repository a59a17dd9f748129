//! Terminal input module (core-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto the game's single input channel - "is the
//! jump key currently held" - and provides [`JumpState`], a level-sample
//! tracker that works in terminals without key-release events.

pub mod jump;
pub mod map;

pub use tui_flappy_types as types;

pub use jump::JumpState;
pub use map::{is_jump_key, should_quit};
