//! Terminal rendering module.
//!
//! This is the inbound half of the adapter boundary: it consumes the draw
//! commands the core emits on its fixed 640x480 logical grid and puts them
//! on a real terminal. The pipeline is split so only the last stage touches
//! I/O:
//!
//! - [`fb`]: a styled-cell framebuffer
//! - [`scene_view`]: rasterizes draw commands into the framebuffer (pure)
//! - [`renderer`]: flushes framebuffers to the terminal with diff encoding

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::TerminalRenderer;
pub use scene_view::{SceneView, Viewport};
