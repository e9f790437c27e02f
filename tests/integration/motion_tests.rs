//! Motion alarm against mock PIR/buzzer: beep sequencing, timing, and
//! suppression of re-triggers while motion persists.

use crate::mock_hw::{MockBuzzer, MockMotionSensor, RecordingSink};

use embedded_hal::delay::DelayNs;
use winam_station::app::events::AppEvent;
use winam_station::app::motion::{AlarmState, MotionAlarm};
use winam_station::app::ports::Level::{Active, Inactive};
use winam_station::config::SystemConfig;

fn make_alarm(sensor: MockMotionSensor) -> MotionAlarm<MockMotionSensor, MockBuzzer> {
    MotionAlarm::new(sensor, MockBuzzer::new(), SystemConfig::default())
}

/// Tick every `step` ms from `from` until the alarm is idle again and
/// return the buzzer transition times.
fn run_until_idle(
    alarm: &mut MotionAlarm<MockMotionSensor, MockBuzzer>,
    sink: &mut RecordingSink,
    from: u32,
    step: u32,
) -> (u32, Vec<(u32, bool)>) {
    let mut now = from;
    let mut seen = alarm.buzzer().writes.len();
    let mut transitions = Vec::new();
    loop {
        let state = alarm.tick(now, sink);
        for w in &alarm.buzzer().writes[seen..] {
            transitions.push((now, *w));
        }
        seen = alarm.buzzer().writes.len();
        if state == AlarmState::Idle {
            return (now, transitions);
        }
        now += step;
        assert!(now - from < 60_000, "alarm never returned to idle");
    }
}

// ── Beep count and timing ────────────────────────────────────

#[test]
fn detection_produces_three_timed_beeps() {
    let mut alarm = make_alarm(MockMotionSensor::new(&[Active, Inactive]));
    let mut sink = RecordingSink::new();

    let (_, transitions) = run_until_idle(&mut alarm, &mut sink, 1_000, 10);

    assert_eq!(
        transitions,
        vec![
            (1_000, true),
            (1_200, false),
            (1_400, true),
            (1_600, false),
            (1_800, true),
            (2_000, false),
        ]
    );
    assert_eq!(alarm.buzzer().on_pulses(), 3);
}

#[test]
fn clear_wait_starts_after_1200ms_pattern() {
    let mut alarm = make_alarm(MockMotionSensor::new(&[Active, Inactive]));
    let mut sink = RecordingSink::new();

    let (idle_at, _) = run_until_idle(&mut alarm, &mut sink, 0, 10);
    assert_eq!(idle_at, 1_200);
    assert_eq!(sink.events, vec![AppEvent::MotionDetected, AppEvent::MotionCleared]);
}

// ── Debounce via hold-off ────────────────────────────────────

#[test]
fn persistent_motion_does_not_retrigger() {
    let mut alarm = make_alarm(MockMotionSensor::new(&[Active]));
    let mut sink = RecordingSink::new();

    // Motion stays active for five seconds of 10 ms ticks.
    let mut now = 0;
    while now < 5_000 {
        alarm.tick(now, &mut sink);
        now += 10;
    }
    assert!(alarm.state().is_alarming());
    assert_eq!(sink.count(&AppEvent::MotionDetected), 1);
    assert_eq!(alarm.buzzer().on_pulses(), 3);

    // Clears once, then a new detection runs a second full pattern.
    alarm.sensor_mut().hold(Inactive);
    assert_eq!(alarm.tick(now, &mut sink), AlarmState::Idle);
    alarm.sensor_mut().hold(Active);
    assert!(alarm.tick(now + 10, &mut sink).is_alarming());
    alarm.sensor_mut().hold(Inactive);
    run_until_idle(&mut alarm, &mut sink, now + 20, 10);

    assert_eq!(sink.count(&AppEvent::MotionDetected), 2);
    assert_eq!(alarm.buzzer().on_pulses(), 6);
    assert_eq!(sink.count(&AppEvent::MotionCleared), 2);
}

#[test]
fn clear_wait_samples_every_50ms() {
    let mut alarm = make_alarm(MockMotionSensor::new(&[Active]));
    let mut sink = RecordingSink::new();

    let mut now = 0;
    while now <= 1_200 {
        alarm.tick(now, &mut sink);
        now += 10;
    }
    let reads_at_clear_start = alarm.sensor_mut().reads;
    // 500 ms of 10 ms ticks while still active: one sample per 50 ms.
    while now <= 1_700 {
        alarm.tick(now, &mut sink);
        now += 10;
    }
    assert_eq!(alarm.sensor_mut().reads - reads_at_clear_start, 10);
}

// ── Clear-wait timeout ───────────────────────────────────────

#[test]
fn configured_timeout_rearms_while_still_active() {
    let config = SystemConfig {
        clear_timeout_ms: Some(1_000),
        ..SystemConfig::default()
    };
    let mut alarm = MotionAlarm::new(MockMotionSensor::new(&[Active]), MockBuzzer::new(), config);
    let mut sink = RecordingSink::new();

    let (idle_at, _) = run_until_idle(&mut alarm, &mut sink, 0, 50);
    assert_eq!(idle_at, 2_200);
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::ClearWaitTimedOut { waited_ms: 1_000 })
    );

    // Still active: the next tick starts a fresh alarm.
    alarm.tick(idle_at + 50, &mut sink);
    assert_eq!(sink.count(&AppEvent::MotionDetected), 2);
}

// ── Blocking parity path ─────────────────────────────────────

/// Delay provider that only advances a virtual clock.
#[derive(Default)]
struct VirtualDelay {
    elapsed_ns: u64,
}

impl DelayNs for VirtualDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

#[test]
fn blocking_check_matches_non_blocking_pattern() {
    let mut alarm = make_alarm(MockMotionSensor::new(&[Active, Active, Inactive]));
    let mut delay = VirtualDelay::default();
    let mut sink = RecordingSink::new();

    assert!(alarm.check_blocking(&mut delay, &mut sink));
    assert_eq!(
        alarm.buzzer().writes,
        vec![true, false, true, false, true, false]
    );
    // 6 x 200 ms phases + one 50 ms clear-wait sleep.
    assert_eq!(delay.elapsed_ns, 1_250_000_000);
    assert_eq!(sink.events, vec![AppEvent::MotionDetected, AppEvent::MotionCleared]);
}

#[test]
fn blocking_check_honours_timeout() {
    let config = SystemConfig {
        clear_timeout_ms: Some(200),
        ..SystemConfig::default()
    };
    let mut alarm = MotionAlarm::new(MockMotionSensor::new(&[Active]), MockBuzzer::new(), config);
    let mut delay = VirtualDelay::default();
    let mut sink = RecordingSink::new();

    assert!(alarm.check_blocking(&mut delay, &mut sink));
    assert_eq!(delay.elapsed_ns, 1_400_000_000);
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::ClearWaitTimedOut { waited_ms: 200 })
    );
}
