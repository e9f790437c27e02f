//! System configuration parameters
//!
//! All tunable parameters for the station. Compiled-in defaults match the
//! station as deployed; nothing is loaded from storage.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum title length the status screen will accept.
pub const TITLE_CAPACITY: usize = 20;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Climate ---
    /// Minimum time between two temperature/humidity poll attempts (milliseconds)
    pub poll_interval_ms: u32,
    /// Static title drawn on the first line of the status screen
    pub title: String<TITLE_CAPACITY>,

    // --- Motion alarm ---
    /// Number of beeps emitted per detection
    pub beep_count: u8,
    /// Buzzer ON phase duration (milliseconds)
    pub beep_on_ms: u32,
    /// Buzzer OFF phase duration (milliseconds)
    pub beep_off_ms: u32,
    /// Sampling period while waiting for the motion level to clear (milliseconds)
    pub clear_poll_ms: u32,
    /// Give up waiting for the level to clear after this long.
    /// `None` waits forever.
    pub clear_timeout_ms: Option<u32>,
}

impl SystemConfig {
    /// Reject values that would stall or busy-loop the alarm.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be > 0"));
        }
        if self.beep_count == 0 {
            return Err(Error::Config("beep_count must be > 0"));
        }
        if self.beep_on_ms == 0 || self.beep_off_ms == 0 {
            return Err(Error::Config("beep phase durations must be > 0"));
        }
        if self.clear_poll_ms == 0 {
            return Err(Error::Config("clear_poll_ms must be > 0"));
        }
        if let Some(timeout) = self.clear_timeout_ms {
            if timeout < self.clear_poll_ms {
                return Err(Error::Config("clear_timeout_ms shorter than clear_poll_ms"));
            }
        }
        Ok(())
    }

    /// Duration of one full beep pattern (milliseconds), saturating at `u32::MAX`.
    pub fn beep_pattern_ms(&self) -> u32 {
        self.beep_on_ms
            .saturating_add(self.beep_off_ms)
            .saturating_mul(u32::from(self.beep_count))
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        let mut title = String::new();
        // Fits: 12 bytes into TITLE_CAPACITY.
        let _ = title.push_str("Fablab Winam");

        Self {
            // Climate
            poll_interval_ms: 2000,
            title,

            // Motion alarm
            beep_count: 3,
            beep_on_ms: 200,
            beep_off_ms: 200,
            clear_poll_ms: 50,
            clear_timeout_ms: None,
        }
    }
}
