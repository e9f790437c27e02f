//! Outbound application events.
//!
//! The components emit these through the
//! [`EventSink`](super::ports::EventSink) port. They carry no contract
//! beyond arriving in order; the log adapter turns them into diagnostic
//! lines.

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The motion alarm is armed and the buzzer is silenced.
    MotionArmed,

    /// A poll produced a valid temperature/humidity pair.
    ClimateUpdated { temperature: f32, humidity: f32 },

    /// A poll failed; the previous pair stays on screen.
    ClimateReadFailed,

    /// The motion level went active while the alarm was idle.
    MotionDetected,

    /// The motion level read inactive after an alarm.
    MotionCleared,

    /// The clear-wait gave up with the level still active.
    ClearWaitTimedOut { waited_ms: u32 },
}
