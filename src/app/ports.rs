//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ClimateMonitor / MotionAlarm (domain)
//! ```
//!
//! Driven adapters (sensors, display, buzzer, diagnostic sink) implement
//! these traits. The components consume them via generics, so the domain
//! core never touches hardware directly and runs unchanged on the host.

use crate::error::DisplayError;

// ───────────────────────────────────────────────────────────────
// Climate sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Temperature/humidity source.
///
/// `None` is the single "invalid reading" signal: a timeout, a checksum
/// error and an absent sensor all look the same from here.
pub trait ClimateSensorPort {
    /// Temperature in °C.
    fn read_temperature(&mut self) -> Option<f32>;

    /// Relative humidity in %.
    fn read_humidity(&mut self) -> Option<f32>;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → panel)
// ───────────────────────────────────────────────────────────────

/// Monochrome text surface with an off-screen frame.
pub trait DisplayPort {
    /// Blank the frame buffer.
    fn clear(&mut self);

    /// Draw `text` with its baseline at `y`, left edge at `x` (pixels,
    /// top-left origin).
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Flush the frame to the physical panel.
    fn present(&mut self) -> Result<(), DisplayError>;
}

// ───────────────────────────────────────────────────────────────
// Motion sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Two-valued motion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Active,
    Inactive,
}

impl Level {
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

pub trait MotionSensorPort {
    /// Current level. Adapters report `Inactive` when the pin cannot be read.
    fn read_level(&mut self) -> Level;
}

// ───────────────────────────────────────────────────────────────
// Buzzer port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

pub trait BuzzerPort {
    fn set_buzzer(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → diagnostics)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`AppEvent`](super::events::AppEvent)s through this
/// port. Adapters decide where they go (serial log, test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
