//! Climate monitor: gated temperature/humidity polling plus the status screen.
//!
//! Polling and rendering run at different cadences: a poll is attempted at
//! most once per `poll_interval_ms`, while the screen is redrawn on every
//! tick. A failed poll (either value invalid) keeps the previous pair on
//! screen; there is no retry before the next natural poll.

use log::{debug, warn};

use crate::config::SystemConfig;
use crate::error::Error;

use super::events::AppEvent;
use super::ports::{ClimateSensorPort, DisplayPort, EventSink};
use super::screen;

/// Last good reading and the poll timer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClimateReading {
    /// °C, `0.0` until the first successful poll.
    pub temperature: f32,
    /// %RH, `0.0` until the first successful poll.
    pub humidity: f32,
    /// Time of the last poll *attempt* (milliseconds, wrapping).
    pub last_poll_ms: u32,
}

/// What a tick did with the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The poll interval had not elapsed.
    Skipped,
    /// Both values were valid and stored.
    Updated,
    /// At least one value was invalid; nothing was stored.
    Failed,
}

pub struct ClimateMonitor<S, D> {
    sensor: S,
    display: D,
    reading: ClimateReading,
    config: SystemConfig,
}

impl<S: ClimateSensorPort, D: DisplayPort> ClimateMonitor<S, D> {
    pub fn new(sensor: S, display: D, config: SystemConfig) -> Self {
        Self {
            sensor,
            display,
            reading: ClimateReading::default(),
            config,
        }
    }

    /// Poll if the interval has elapsed, then redraw the screen.
    ///
    /// Never blocks beyond the sensor read and the panel flush.
    pub fn tick(&mut self, now_ms: u32, sink: &mut impl EventSink) -> PollOutcome {
        let outcome = if self.poll_due(now_ms) {
            self.poll(now_ms, sink)
        } else {
            PollOutcome::Skipped
        };

        if let Err(e) = screen::render(
            &mut self.display,
            &self.config.title,
            self.reading.temperature,
            self.reading.humidity,
        ) {
            warn!("Status screen update failed: {}", Error::from(e));
        }

        outcome
    }

    fn poll_due(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.reading.last_poll_ms) >= self.config.poll_interval_ms
    }

    fn poll(&mut self, now_ms: u32, sink: &mut impl EventSink) -> PollOutcome {
        self.reading.last_poll_ms = now_ms;

        let temperature = self.sensor.read_temperature().filter(|t| t.is_finite());
        let humidity = self.sensor.read_humidity().filter(|h| h.is_finite());

        match (temperature, humidity) {
            (Some(temperature), Some(humidity)) => {
                self.reading.temperature = temperature;
                self.reading.humidity = humidity;
                sink.emit(&AppEvent::ClimateUpdated {
                    temperature,
                    humidity,
                });
                PollOutcome::Updated
            }
            (t, h) => {
                debug!(
                    "Climate poll rejected (temperature valid={}, humidity valid={})",
                    t.is_some(),
                    h.is_some()
                );
                sink.emit(&AppEvent::ClimateReadFailed);
                PollOutcome::Failed
            }
        }
    }

    /// Last good reading and the poll timestamp.
    pub fn reading(&self) -> ClimateReading {
        self.reading
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}
