//! Majority-consensus debounce
//!
//! The first sample after a key is seen becomes the reference level. Each
//! following sample that agrees adds one to a net counter, each one that
//! disagrees subtracts one. The reference is confirmed when the counter
//! reaches `+threshold`; the opposite level is confirmed at `-threshold`.
//! A line that keeps oscillating never confirms and is given up on after
//! `budget` samples.

use keymenu_hal::Level;

use crate::config::DebounceConfig;

/// Progress of a debounce run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// More samples needed
    Pending,
    /// Line settled at this level
    Stable(Level),
    /// Budget exhausted without settling
    TimedOut,
}

/// One debounce run over a single line
#[derive(Debug, Clone)]
pub struct Debouncer {
    config: DebounceConfig,
    reference: Option<Level>,
    net: i32,
    taken: u16,
}

impl Debouncer {
    /// Start a run
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            reference: None,
            net: 0,
            taken: 0,
        }
    }

    /// Feed one sample
    pub fn feed(&mut self, level: Level) -> DebounceState {
        let reference = match self.reference {
            Some(reference) => reference,
            None => {
                self.reference = Some(level);
                return DebounceState::Pending;
            }
        };

        self.taken = self.taken.saturating_add(1);
        if level == reference {
            self.net += 1;
        } else {
            self.net -= 1;
        }

        let threshold = i32::from(self.config.threshold);
        if self.net >= threshold {
            DebounceState::Stable(reference)
        } else if self.net <= -threshold {
            DebounceState::Stable(reference.inverted())
        } else if self.taken >= self.config.budget {
            DebounceState::TimedOut
        } else {
            DebounceState::Pending
        }
    }

    /// Sample until the line settles or the budget runs out
    ///
    /// Returns `None` on timeout.
    pub fn settle(config: DebounceConfig, mut sample: impl FnMut() -> Level) -> Option<Level> {
        let mut run = Self::new(config);
        loop {
            match run.feed(sample()) {
                DebounceState::Pending => {}
                DebounceState::Stable(level) => return Some(level),
                DebounceState::TimedOut => return None,
            }
        }
    }
}
