//! Mock hardware adapters for integration tests.
//!
//! Every mock records what the domain did to it so tests can assert on the
//! full call history without touching real GPIO or I²C.

use std::collections::VecDeque;

use winam_station::app::events::AppEvent;
use winam_station::app::ports::{
    BuzzerPort, ClimateSensorPort, DisplayPort, EventSink, Level, MotionSensorPort,
};
use winam_station::error::DisplayError;

// ── Climate sensor ────────────────────────────────────────────

/// One scripted poll: (temperature, humidity).
pub type Sample = (Option<f32>, Option<f32>);

/// Plays back scripted samples; repeats the last one when exhausted.
pub struct MockClimateSensor {
    samples: VecDeque<Sample>,
    current: Sample,
    pub polls: usize,
}

#[allow(dead_code)]
impl MockClimateSensor {
    pub fn new(samples: &[Sample]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            current: (None, None),
            polls: 0,
        }
    }

    pub fn constant(temperature: f32, humidity: f32) -> Self {
        Self::new(&[(Some(temperature), Some(humidity))])
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push_back(sample);
    }
}

impl ClimateSensorPort for MockClimateSensor {
    fn read_temperature(&mut self) -> Option<f32> {
        self.polls += 1;
        if let Some(s) = self.samples.pop_front() {
            self.current = s;
        }
        self.current.0
    }

    fn read_humidity(&mut self) -> Option<f32> {
        self.current.1
    }
}

// ── Display ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Clear,
    DrawText { x: i32, y: i32, text: String },
    Present,
}

#[derive(Default)]
pub struct MockDisplay {
    pub calls: Vec<DisplayCall>,
    pub fail_present: bool,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presents(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DisplayCall::Present))
            .count()
    }

    /// Text drawn since the last `clear()`, in draw order.
    pub fn last_frame(&self) -> Vec<(i32, i32, String)> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DisplayCall::Clear))
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                DisplayCall::DrawText { x, y, text } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }

    /// The text drawn at `(x, y)` in the last frame.
    pub fn text_at(&self, x: i32, y: i32) -> Option<String> {
        self.last_frame()
            .into_iter()
            .find(|(fx, fy, _)| (*fx, *fy) == (x, y))
            .map(|(_, _, t)| t)
    }
}

impl DisplayPort for MockDisplay {
    fn clear(&mut self) {
        self.calls.push(DisplayCall::Clear);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.calls.push(DisplayCall::DrawText {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.calls.push(DisplayCall::Present);
        if self.fail_present {
            Err(DisplayError::Bus)
        } else {
            Ok(())
        }
    }
}

// ── Motion sensor ─────────────────────────────────────────────

/// Plays back scripted levels; repeats the last one when exhausted.
pub struct MockMotionSensor {
    levels: VecDeque<Level>,
    current: Level,
    pub reads: usize,
}

#[allow(dead_code)]
impl MockMotionSensor {
    pub fn new(levels: &[Level]) -> Self {
        Self {
            levels: levels.iter().copied().collect(),
            current: Level::Inactive,
            reads: 0,
        }
    }

    /// Replace the remaining script with a constant level.
    pub fn hold(&mut self, level: Level) {
        self.levels.clear();
        self.current = level;
    }
}

impl MotionSensorPort for MockMotionSensor {
    fn read_level(&mut self) -> Level {
        self.reads += 1;
        if let Some(l) = self.levels.pop_front() {
            self.current = l;
        }
        self.current
    }
}

// ── Buzzer ────────────────────────────────────────────────────

/// Records every buzzer write in order.
#[derive(Default)]
pub struct MockBuzzer {
    pub writes: Vec<bool>,
}

#[allow(dead_code)]
impl MockBuzzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pulses(&self) -> usize {
        self.writes.iter().filter(|w| **w).count()
    }
}

impl BuzzerPort for MockBuzzer {
    fn set_buzzer(&mut self, on: bool) {
        self.writes.push(on);
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, event: &AppEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
