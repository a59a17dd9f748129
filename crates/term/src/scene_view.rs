//! SceneView: rasterizes core draw commands into a terminal framebuffer.
//!
//! This module is pure (no I/O). It maps the fixed 640x480 logical grid onto
//! character cells - 8x16 logical pixels per cell, so the full scene is an
//! 80x30 cell canvas - and centers that canvas in the viewport. Terminals
//! smaller than the canvas clip at the framebuffer edges.

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{DrawCmd, Rgb, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Logical pixels covered by one terminal column.
const PX_PER_COL: f32 = 8.0;

/// Logical pixels covered by one terminal row.
///
/// Twice the column size compensates for the typical terminal glyph aspect
/// ratio, same trick as rendering board cells two columns wide.
const PX_PER_ROW: f32 = 16.0;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rasterizer from logical draw commands to framebuffer cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneView;

impl SceneView {
    pub fn new() -> Self {
        Self
    }

    /// Cell dimensions of the full logical canvas (80x30).
    pub fn canvas_size(&self) -> (u16, u16) {
        (
            (SCREEN_WIDTH / PX_PER_COL) as u16,
            (SCREEN_HEIGHT / PX_PER_ROW) as u16,
        )
    }

    /// Rasterize one frame's commands into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is resized to the
    /// viewport and cleared before drawing.
    pub fn render_into(&self, cmds: &[DrawCmd], viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (canvas_w, canvas_h) = self.canvas_size();
        let origin_x = viewport.width.saturating_sub(canvas_w) / 2;
        let origin_y = viewport.height.saturating_sub(canvas_h) / 2;

        for cmd in cmds {
            match cmd {
                DrawCmd::FillBackground(color) => {
                    let cell = CellStyle::filled(*color).into_cell(' ');
                    fb.fill_rect(origin_x, origin_y, canvas_w, canvas_h, cell);
                }
                DrawCmd::Rect { x, y, w, h, color } => {
                    self.fill_logical_rect(fb, origin_x, origin_y, *x, *y, *w, *h, *color);
                }
                DrawCmd::Text(text) => {
                    let style = CellStyle {
                        fg: Rgb::new(240, 240, 240),
                        bg: Rgb::new(40, 40, 40),
                        bold: true,
                    };
                    fb.put_str(origin_x, origin_y, text, style);
                }
            }
        }
    }

    /// Convert a logical-pixel rectangle to a cell span and fill it.
    ///
    /// Cell spans are half-open: a rectangle covers every cell whose origin
    /// lies inside it. Spans clamp to the canvas, so partially off-screen
    /// pipes draw their on-screen part only.
    #[allow(clippy::too_many_arguments)]
    fn fill_logical_rect(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    ) {
        let (canvas_w, canvas_h) = self.canvas_size();

        let col0 = (x / PX_PER_COL).floor().max(0.0) as u16;
        let col1 = (((x + w) / PX_PER_COL).floor().max(0.0) as u16).min(canvas_w);
        let row0 = (y / PX_PER_ROW).floor().max(0.0) as u16;
        let row1 = (((y + h) / PX_PER_ROW).floor().max(0.0) as u16).min(canvas_h);

        if col1 <= col0 || row1 <= row0 {
            return;
        }

        let cell = CellStyle::filled(color).into_cell(' ');
        fb.fill_rect(
            origin_x + col0,
            origin_y + row0,
            col1 - col0,
            row1 - row0,
            cell,
        );
    }
}
