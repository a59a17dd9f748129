//! Level-sampled jump tracker for terminal environments.
//!
//! The simulation wants "is the jump key held right now", sampled once per
//! frame. Terminals deliver discrete press/repeat/release events instead -
//! and many never deliver release at all - so this tracker derives the held
//! level from events and auto-releases after a timeout without fresh
//! presses.

/// Tracks whether the jump key is currently held.
#[derive(Debug, Clone)]
pub struct JumpState {
    held: bool,
    last_press: std::time::Instant,
    hold_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a permanently "held" jump that pins the bird to the
// ceiling. Keyboard auto-repeat refreshes the timestamp while genuinely held.
const DEFAULT_HOLD_TIMEOUT_MS: u32 = 150;

impl JumpState {
    pub fn new() -> Self {
        Self {
            held: false,
            last_press: std::time::Instant::now(),
            hold_timeout_ms: DEFAULT_HOLD_TIMEOUT_MS,
        }
    }

    pub fn with_hold_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.hold_timeout_ms = timeout_ms;
        self
    }

    pub fn hold_timeout_ms(&self) -> u32 {
        self.hold_timeout_ms
    }

    /// Record a press or terminal auto-repeat of the jump key.
    pub fn key_down(&mut self) {
        self.held = true;
        self.last_press = std::time::Instant::now();
    }

    /// Record a release of the jump key.
    pub fn key_up(&mut self) {
        self.held = false;
    }

    /// Sample the current level, expiring stale holds first.
    ///
    /// Called exactly once per simulation frame.
    pub fn sample(&mut self) -> bool {
        if self.held {
            let since_press = self.last_press.elapsed().as_millis() as u32;
            if since_press > self.hold_timeout_ms {
                self.held = false;
            }
        }
        self.held
    }
}

impl Default for JumpState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_the_level_until_release() {
        let mut jump = JumpState::new().with_hold_timeout_ms(10_000);
        assert!(!jump.sample());

        jump.key_down();
        assert!(jump.sample());
        assert!(jump.sample(), "level stays up across frames while held");

        jump.key_up();
        assert!(!jump.sample());
    }

    #[test]
    fn test_stale_hold_auto_releases_without_release_events() {
        let mut jump = JumpState::new().with_hold_timeout_ms(50);
        jump.key_down();

        // Simulate no key-release events by moving the press into the past.
        jump.last_press = std::time::Instant::now() - std::time::Duration::from_millis(51);
        assert!(!jump.sample());
        assert!(!jump.sample());
    }

    #[test]
    fn test_repeat_refreshes_the_hold() {
        let mut jump = JumpState::new().with_hold_timeout_ms(50);
        jump.key_down();
        jump.last_press = std::time::Instant::now() - std::time::Duration::from_millis(40);

        // A terminal auto-repeat arrives before the timeout.
        jump.key_down();
        assert!(jump.sample());
    }

    #[test]
    fn test_default_hold_timeout_is_non_zero() {
        let jump = JumpState::new();
        assert!(jump.hold_timeout_ms() > 0);
    }
}
