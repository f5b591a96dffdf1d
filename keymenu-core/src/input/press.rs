//! Press/release tracking
//!
//! Reports a key once per physical press, on the poll where it is let go.
//! After an action the application may still be holding the key that
//! triggered it; [`PressTracker::suppress_until_release`] ignores
//! everything until all keys are up.

use super::key::Key;
use crate::log::trace;

/// Edge detector over successive key samples
#[derive(Debug, Clone, Default)]
pub struct PressTracker {
    held: Option<Key>,
    suppressed: bool,
}

impl PressTracker {
    /// Create a tracker with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Key held on the last update
    pub fn held(&self) -> Option<Key> {
        self.held
    }

    /// Whether input is ignored until all keys are released
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Ignore keys until the next poll that sees none held
    pub fn suppress_until_release(&mut self) {
        self.suppressed = true;
    }

    /// Feed the current sample; returns a key whose press just completed
    pub fn update(&mut self, sample: Option<Key>) -> Option<Key> {
        if self.suppressed {
            if sample.is_none() {
                trace!("keys released");
                self.suppressed = false;
            }
            self.held = None;
            return None;
        }

        let released = match self.held {
            Some(held) if sample != Some(held) => Some(held),
            _ => None,
        };
        self.held = sample;
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_on_release_only() {
        let mut presses = PressTracker::new();
        assert_eq!(presses.update(Some(Key::Up)), None);
        assert_eq!(presses.update(Some(Key::Up)), None);
        assert_eq!(presses.update(None), Some(Key::Up));
        assert_eq!(presses.update(None), None);
    }

    #[test]
    fn test_rolling_from_one_key_to_another() {
        let mut presses = PressTracker::new();
        presses.update(Some(Key::Up));
        assert_eq!(presses.update(Some(Key::Down)), Some(Key::Up));
        assert_eq!(presses.held(), Some(Key::Down));
        assert_eq!(presses.update(None), Some(Key::Down));
    }

    #[test]
    fn test_suppression_swallows_held_key() {
        let mut presses = PressTracker::new();
        presses.update(Some(Key::Right));
        presses.suppress_until_release();
        assert_eq!(presses.update(Some(Key::Right)), None);
        assert_eq!(presses.update(None), None);
        assert!(!presses.is_suppressed());

        presses.update(Some(Key::Left));
        assert_eq!(presses.update(None), Some(Key::Left));
    }
}
