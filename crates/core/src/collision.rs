//! Collision module - bounds and pipe-overlap predicates
//!
//! Pure functions over the post-movement positions of a frame. Any hit is a
//! binary terminal transition; there is no damage model and no velocity
//! response.

use crate::bird::Bird;
use crate::pipes::Pipe;
use crate::types::{BIRD_SIZE, PIPE_GAP, PIPE_WIDTH, SCREEN_HEIGHT};

/// Whether the bird has left the playable vertical band.
///
/// The bottom check compares the bird's top edge against
/// `SCREEN_HEIGHT - BIRD_SIZE`, strictly: resting exactly on the floor line
/// is still in bounds.
pub fn bird_out_of_bounds(bird: &Bird) -> bool {
    bird.y > SCREEN_HEIGHT - BIRD_SIZE || bird.y < 0.0
}

/// Whether the bird overlaps either solid stub of a pipe.
///
/// Horizontal overlap first; if the spans cross, the bird collides unless it
/// sits entirely inside the gap band `[gap_top, gap_top + PIPE_GAP]`.
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps_x = bird.x + BIRD_SIZE > pipe.x && bird.x < pipe.x + PIPE_WIDTH;
    overlaps_x && (bird.y < pipe.gap_top || bird.y + BIRD_SIZE > pipe.gap_top + PIPE_GAP)
}

/// Whether the bird hits any pipe in the field
pub fn bird_hits_any(bird: &Bird, pipes: &[Pipe]) -> bool {
    pipes.iter().any(|pipe| bird_hits_pipe(bird, pipe))
}
