//! Bird module - the player entity and its vertical physics
//!
//! The bird only ever moves vertically; its x position is fixed at spawn and
//! the world scrolls past it. All motion is per fixed frame.

use crate::types::{BIRD_START_X, BIRD_START_Y, GRAVITY, JUMP_STRENGTH};

/// The player-controlled entity: a fixed-size square with a position and a
/// vertical velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity in logical pixels per frame (positive = downward)
    pub vy: f32,
}

impl Bird {
    /// Create a bird at the spawn position with zero velocity
    pub fn spawn() -> Self {
        Self {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            vy: 0.0,
        }
    }

    /// Advance one frame of free fall: accelerate, then move.
    ///
    /// This runs unconditionally every playing frame. A jump from the same
    /// frame is applied *after* integration (see [`Bird::flap`]), so the
    /// impulse affects the next frame's displacement.
    pub fn integrate(&mut self) {
        self.vy += GRAVITY;
        self.y += self.vy;
    }

    /// Overwrite the vertical velocity with the jump impulse.
    ///
    /// A direct overwrite, not additive: holding the jump input re-pins the
    /// velocity every frame instead of accelerating upward without bound.
    pub fn flap(&mut self) {
        self.vy = JUMP_STRENGTH;
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::spawn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let bird = Bird::spawn();
        assert_eq!(bird.x, 160.0);
        assert_eq!(bird.y, 240.0);
        assert_eq!(bird.vy, 0.0);
    }

    #[test]
    fn test_integrate_accelerates_then_moves() {
        let mut bird = Bird::spawn();
        bird.integrate();
        // Velocity is updated before the position, so the first frame
        // already displaces by one gravity step.
        assert_eq!(bird.vy, 0.25);
        assert_eq!(bird.y, 240.25);
    }

    #[test]
    fn test_scripted_fall_displacement() {
        // Four frames of free fall; every intermediate value is exact in f32.
        let mut bird = Bird::spawn();
        let expected = [(0.25, 240.25), (0.5, 240.75), (0.75, 241.5), (1.0, 242.5)];
        for (vy, y) in expected {
            bird.integrate();
            assert_eq!(bird.vy, vy);
            assert_eq!(bird.y, y);
        }
    }

    #[test]
    fn test_flap_overwrites_velocity() {
        let mut bird = Bird::spawn();
        for _ in 0..40 {
            bird.integrate();
        }
        assert!(bird.vy > 5.0);

        bird.flap();
        assert_eq!(bird.vy, -5.0);

        // Repeated flaps pin rather than stack.
        bird.flap();
        assert_eq!(bird.vy, -5.0);
    }
}
