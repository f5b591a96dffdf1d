//! Auto-repeat for held keys
//!
//! A key is reported once when first seen. Held past `delay_ms` it starts
//! repeating and is reported again every `interval_ms`. Releasing it, or
//! switching to another key, starts over.
//!
//! Timestamps are milliseconds from any monotonic clock; differences use
//! wrapping arithmetic so a 32-bit counter may roll over.

use super::key::Key;
use crate::config::RepeatConfig;
use crate::log::debug;

/// Tracking for the key currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RepeatState {
    /// Key seen on the previous poll
    pub key: Option<Key>,
    /// When that key was first seen (ms)
    pub since_ms: u32,
    /// When it was last reported (ms)
    pub last_emit_ms: u32,
    /// Past the initial delay
    pub repeating: bool,
}

/// Auto-repeat engine
#[derive(Debug, Clone)]
pub struct AutoRepeat {
    config: RepeatConfig,
    state: RepeatState,
}

impl AutoRepeat {
    /// Create an engine with nothing held
    pub fn new(config: RepeatConfig) -> Self {
        Self {
            config,
            state: RepeatState::default(),
        }
    }

    /// Current tracking state
    pub fn state(&self) -> &RepeatState {
        &self.state
    }

    /// Repeat timing in use
    pub fn config(&self) -> &RepeatConfig {
        &self.config
    }

    /// Change the timing; takes effect on the next poll
    pub fn set_config(&mut self, config: RepeatConfig) {
        self.config = config;
    }

    /// Forget the held key
    pub fn reset(&mut self) {
        self.state = RepeatState::default();
    }

    /// Feed the key held at `now_ms`; returns a key when one is due
    pub fn poll(&mut self, sample: Option<Key>, now_ms: u32) -> Option<Key> {
        let Some(key) = sample else {
            self.reset();
            return None;
        };

        if self.state.key != Some(key) {
            self.state = RepeatState {
                key: Some(key),
                since_ms: now_ms,
                last_emit_ms: now_ms,
                repeating: false,
            };
            return Some(key);
        }

        if !self.state.repeating {
            if now_ms.wrapping_sub(self.state.since_ms) >= self.config.delay_ms {
                debug!("key {} repeating", key);
                self.state.repeating = true;
                self.state.last_emit_ms = now_ms;
                return Some(key);
            }
            return None;
        }

        if now_ms.wrapping_sub(self.state.last_emit_ms) >= self.config.interval_ms {
            self.state.last_emit_ms = now_ms;
            return Some(key);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AutoRepeat {
        AutoRepeat::new(RepeatConfig::new(500, 100))
    }

    #[test]
    fn test_press_reports_once_before_delay() {
        let mut repeat = engine();
        assert_eq!(repeat.poll(Some(Key::Down), 0), Some(Key::Down));
        assert_eq!(repeat.poll(Some(Key::Down), 100), None);
        assert_eq!(repeat.poll(Some(Key::Down), 499), None);
    }

    #[test]
    fn test_hold_repeats_at_interval() {
        let mut repeat = engine();
        repeat.poll(Some(Key::Down), 0);
        assert_eq!(repeat.poll(Some(Key::Down), 500), Some(Key::Down));
        assert!(repeat.state().repeating);
        assert_eq!(repeat.poll(Some(Key::Down), 550), None);
        assert_eq!(repeat.poll(Some(Key::Down), 600), Some(Key::Down));
        assert_eq!(repeat.poll(Some(Key::Down), 650), None);
        assert_eq!(repeat.poll(Some(Key::Down), 720), Some(Key::Down));
    }

    #[test]
    fn test_release_resets() {
        let mut repeat = engine();
        repeat.poll(Some(Key::Up), 0);
        repeat.poll(Some(Key::Up), 600);
        assert_eq!(repeat.poll(None, 650), None);
        assert_eq!(*repeat.state(), RepeatState::default());
        assert_eq!(repeat.poll(Some(Key::Up), 700), Some(Key::Up));
        assert_eq!(repeat.poll(Some(Key::Up), 800), None);
    }

    #[test]
    fn test_key_change_restarts_delay() {
        let mut repeat = engine();
        repeat.poll(Some(Key::Up), 0);
        repeat.poll(Some(Key::Up), 500);
        assert_eq!(repeat.poll(Some(Key::Left), 520), Some(Key::Left));
        assert_eq!(repeat.poll(Some(Key::Left), 700), None);
        assert_eq!(repeat.poll(Some(Key::Left), 1020), Some(Key::Left));
    }

    #[test]
    fn test_clock_rollover() {
        let mut repeat = engine();
        let start = u32::MAX - 100;
        repeat.poll(Some(Key::Right), start);
        assert_eq!(repeat.poll(Some(Key::Right), start.wrapping_add(499)), None);
        assert_eq!(
            repeat.poll(Some(Key::Right), start.wrapping_add(500)),
            Some(Key::Right)
        );
    }
}
