//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing the diagnostic lines to the `log`
//! facade (the ESP-IDF logger routes them to UART / USB-CDC on the board).

use log::{Level, log};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// Log level and diagnostic line for `event`.
pub fn describe(event: &AppEvent) -> (Level, String) {
    match event {
        AppEvent::MotionArmed => (Level::Info, "PIR system ready...".into()),
        AppEvent::ClimateUpdated {
            temperature,
            humidity,
        } => (
            Level::Info,
            format!("Temp: {:.2} C  |  Hum: {:.2}", temperature, humidity),
        ),
        AppEvent::ClimateReadFailed => (Level::Warn, "DHT read failed".into()),
        AppEvent::MotionDetected => (Level::Info, "Motion detected!".into()),
        AppEvent::MotionCleared => (Level::Debug, "Motion cleared".into()),
        AppEvent::ClearWaitTimedOut { waited_ms } => (
            Level::Warn,
            format!("Motion still present after {} ms, alarm re-armed", waited_ms),
        ),
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        let (level, line) = describe(event);
        log!(level, "{}", line);
    }
}
