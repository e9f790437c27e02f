//! Motion alarm: beep on detection, then hold off until the area clears.
//!
//! ## State machine
//!
//! ```text
//!            level = Active
//!   Idle ───────────────────▶ Beeping { phase 0..2n }
//!    ▲                              │ last OFF phase done
//!    │  level = Inactive            ▼
//!    └──────────────────────── AwaitingClear ◀─┐
//!       (or clear timeout)          │ Active   │
//!                                   └──────────┘
//! ```
//!
//! [`MotionAlarm::tick`] drives this machine without blocking: each call
//! does at most one buzzer write and one level read, so the super-loop
//! keeps servicing the climate monitor while an alarm is in progress.
//! Even phases are buzzer ON, odd phases OFF; at most one phase advances
//! per tick, so a detection always produces exactly `beep_count` ON and
//! `beep_count` OFF writes even when ticks arrive late.
//!
//! [`MotionAlarm::check_blocking`] is the fully blocking variant
//! (beep with delays, then spin on the level) for callers that can afford
//! to stall. Without a `clear_timeout_ms` it never returns while the level
//! stays active.

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::SystemConfig;

use super::events::AppEvent;
use super::ports::{BuzzerPort, EventSink, Level, MotionSensorPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    /// Waiting for the level to go active.
    Idle,
    /// Running the beep pattern; `phase` counts ON/OFF half-periods.
    Beeping { phase: u16, since_ms: u32 },
    /// Pattern done; sampling until the level reads inactive.
    AwaitingClear {
        since_ms: u32,
        last_sample_ms: Option<u32>,
    },
}

impl AlarmState {
    /// `true` for every state except [`AlarmState::Idle`].
    pub fn is_alarming(self) -> bool {
        self != Self::Idle
    }
}

pub struct MotionAlarm<M, B> {
    sensor: M,
    buzzer: B,
    state: AlarmState,
    config: SystemConfig,
}

impl<M: MotionSensorPort, B: BuzzerPort> MotionAlarm<M, B> {
    pub fn new(sensor: M, buzzer: B, config: SystemConfig) -> Self {
        Self {
            sensor,
            buzzer,
            state: AlarmState::Idle,
            config,
        }
    }

    /// Silence the buzzer and report readiness. Call once before the first tick.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        debug!(
            "Motion alarm: {} beeps, {} ms pattern",
            self.config.beep_count,
            self.config.beep_pattern_ms()
        );
        self.buzzer.set_buzzer(false);
        self.state = AlarmState::Idle;
        sink.emit(&AppEvent::MotionArmed);
    }

    // ── Non-blocking path ─────────────────────────────────────

    /// Advance the alarm by one tick. Never blocks.
    pub fn tick(&mut self, now_ms: u32, sink: &mut impl EventSink) -> AlarmState {
        match self.state {
            AlarmState::Idle => {
                if self.sensor.read_level().is_active() {
                    sink.emit(&AppEvent::MotionDetected);
                    self.buzzer.set_buzzer(true);
                    self.state = AlarmState::Beeping {
                        phase: 0,
                        since_ms: now_ms,
                    };
                }
            }

            AlarmState::Beeping { phase, since_ms } => {
                if now_ms.wrapping_sub(since_ms) >= self.phase_duration(phase) {
                    let next = phase + 1;
                    if next >= self.phase_count() {
                        debug!("Beep pattern finished, waiting for motion to clear");
                        self.state = AlarmState::AwaitingClear {
                            since_ms: now_ms,
                            last_sample_ms: None,
                        };
                        self.sample_clear(now_ms, sink);
                    } else {
                        self.buzzer.set_buzzer(next % 2 == 0);
                        self.state = AlarmState::Beeping {
                            phase: next,
                            since_ms: now_ms,
                        };
                    }
                }
            }

            AlarmState::AwaitingClear { .. } => self.sample_clear(now_ms, sink),
        }

        self.state
    }

    fn sample_clear(&mut self, now_ms: u32, sink: &mut impl EventSink) {
        let AlarmState::AwaitingClear {
            since_ms,
            last_sample_ms,
        } = self.state
        else {
            return;
        };

        if let Some(last) = last_sample_ms {
            if now_ms.wrapping_sub(last) < self.config.clear_poll_ms {
                return;
            }
        }

        if self.sensor.read_level() == Level::Inactive {
            sink.emit(&AppEvent::MotionCleared);
            self.state = AlarmState::Idle;
            return;
        }

        let waited_ms = now_ms.wrapping_sub(since_ms);
        if self.clear_timed_out(waited_ms) {
            sink.emit(&AppEvent::ClearWaitTimedOut { waited_ms });
            self.state = AlarmState::Idle;
            return;
        }

        self.state = AlarmState::AwaitingClear {
            since_ms,
            last_sample_ms: Some(now_ms),
        };
    }

    // ── Blocking path ─────────────────────────────────────────

    /// Read the level once; on detection beep and block until it clears.
    ///
    /// Returns `true` if motion was detected. Total blocking time is the
    /// beep pattern plus the clear-wait, which is unbounded unless
    /// `clear_timeout_ms` is set.
    pub fn check_blocking(&mut self, delay: &mut impl DelayNs, sink: &mut impl EventSink) -> bool {
        if !self.sensor.read_level().is_active() {
            return false;
        }

        sink.emit(&AppEvent::MotionDetected);

        for _ in 0..self.config.beep_count {
            self.buzzer.set_buzzer(true);
            delay.delay_ms(self.config.beep_on_ms);
            self.buzzer.set_buzzer(false);
            delay.delay_ms(self.config.beep_off_ms);
        }

        let mut waited_ms: u32 = 0;
        loop {
            if self.sensor.read_level() == Level::Inactive {
                sink.emit(&AppEvent::MotionCleared);
                break;
            }
            if self.clear_timed_out(waited_ms) {
                sink.emit(&AppEvent::ClearWaitTimedOut { waited_ms });
                break;
            }
            delay.delay_ms(self.config.clear_poll_ms);
            waited_ms = waited_ms.saturating_add(self.config.clear_poll_ms);
        }

        self.state = AlarmState::Idle;
        true
    }

    // ── Helpers ───────────────────────────────────────────────

    /// ON and OFF half-periods of one pattern; always even, so the last
    /// phase is an OFF.
    fn phase_count(&self) -> u16 {
        u16::from(self.config.beep_count) * 2
    }

    fn phase_duration(&self, phase: u16) -> u32 {
        if phase % 2 == 0 {
            self.config.beep_on_ms
        } else {
            self.config.beep_off_ms
        }
    }

    fn clear_timed_out(&self, waited_ms: u32) -> bool {
        match self.config.clear_timeout_ms {
            Some(timeout) if waited_ms >= timeout => {
                info!("Motion still active after {} ms, re-arming", waited_ms);
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> AlarmState {
        self.state
    }

    pub fn sensor_mut(&mut self) -> &mut M {
        &mut self.sensor
    }

    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }
}
