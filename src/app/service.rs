//! Application service: the super-loop body.
//!
//! [`AppService`] owns both components and runs them back to back on every
//! tick. Neither component shares state or hardware with the other; the
//! only guarantee the service adds is ordering: the climate monitor always
//! finishes before the motion alarm starts.
//!
//! ```text
//!  ClimateSensorPort ──▶ ┌──────────────────┐ ──▶ DisplayPort
//!                        │  ClimateMonitor   │
//!                        ├──────────────────┤ ──▶ EventSink
//!  MotionSensorPort  ──▶ │  MotionAlarm      │
//!                        └──────────────────┘ ──▶ BuzzerPort
//! ```

use log::info;

use crate::config::SystemConfig;

use super::climate::{ClimateMonitor, ClimateReading, PollOutcome};
use super::motion::{AlarmState, MotionAlarm};
use super::ports::{BuzzerPort, ClimateSensorPort, DisplayPort, EventSink, MotionSensorPort};

/// Result of one super-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub poll: PollOutcome,
    pub alarm: AlarmState,
}

pub struct AppService<S, D, M, B> {
    climate: ClimateMonitor<S, D>,
    motion: MotionAlarm<M, B>,
    tick_count: u64,
}

impl<S, D, M, B> AppService<S, D, M, B>
where
    S: ClimateSensorPort,
    D: DisplayPort,
    M: MotionSensorPort,
    B: BuzzerPort,
{
    pub fn new(climate: ClimateMonitor<S, D>, motion: MotionAlarm<M, B>) -> Self {
        Self {
            climate,
            motion,
            tick_count: 0,
        }
    }

    /// Build both components from their ports and one shared config.
    pub fn from_ports(sensor: S, display: D, motion: M, buzzer: B, config: &SystemConfig) -> Self {
        Self::new(
            ClimateMonitor::new(sensor, display, config.clone()),
            MotionAlarm::new(motion, buzzer, config.clone()),
        )
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.motion.start(sink);
        info!("AppService started");
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one super-loop iteration: climate first, then motion.
    pub fn tick(&mut self, now_ms: u32, sink: &mut impl EventSink) -> TickReport {
        self.tick_count += 1;
        let poll = self.climate.tick(now_ms, sink);
        let alarm = self.motion.tick(now_ms, sink);
        TickReport { poll, alarm }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn reading(&self) -> ClimateReading {
        self.climate.reading()
    }

    pub fn alarm_state(&self) -> AlarmState {
        self.motion.state()
    }

    /// Total ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn climate(&self) -> &ClimateMonitor<S, D> {
        &self.climate
    }

    pub fn climate_mut(&mut self) -> &mut ClimateMonitor<S, D> {
        &mut self.climate
    }

    pub fn motion(&self) -> &MotionAlarm<M, B> {
        &self.motion
    }
}
