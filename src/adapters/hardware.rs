//! Hardware adapters: bridge the drivers to the domain port traits.
//!
//! | Adapter             | Implements          | Driver        |
//! |---------------------|---------------------|---------------|
//! | `DhtClimateSensor`  | `ClimateSensorPort` | `Dht11`       |
//! | `Sh1106`            | `DisplayPort`       | `Sh1106`      |
//! | `PirSensor`         | `MotionSensorPort`  | `PirSensor`   |
//! | `Buzzer`            | `BuzzerPort`        | `Buzzer`      |
//!
//! Driver errors stop here: they are logged and turned into the "no data
//! this cycle" value of the port (`None`, `Level::Inactive`, a dropped
//! buzzer write) so the super-loop never sees a hardware failure.

use display_interface::WriteOnlyDataCommand;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::{debug, warn};

use crate::app::ports::{BuzzerPort, ClimateSensorPort, DisplayPort, Level, MotionSensorPort};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::sh1106::Sh1106;
use crate::error::{DisplayError, Error};
use crate::sensors::dht::{Dht11, DhtReading};
use crate::sensors::pir::PirSensor;

// ── Climate sensor ────────────────────────────────────────────

/// One DHT11 transaction per poll.
///
/// `read_temperature` samples the bus; `read_humidity` returns the humidity
/// of that same frame, so a poll never mixes values from two frames.
pub struct DhtClimateSensor<P, D> {
    dht: Dht11<P, D>,
    last: Option<DhtReading>,
}

impl<P, D> DhtClimateSensor<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(dht: Dht11<P, D>) -> Self {
        Self { dht, last: None }
    }
}

impl<P, D> ClimateSensorPort for DhtClimateSensor<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn read_temperature(&mut self) -> Option<f32> {
        self.last = match self.dht.read() {
            Ok(reading) => Some(reading),
            Err(e) => {
                debug!("DHT11 transaction failed: {}", Error::from(e));
                None
            }
        };
        self.last.map(|r| r.temperature)
    }

    fn read_humidity(&mut self) -> Option<f32> {
        self.last.map(|r| r.humidity)
    }
}

// ── Display ───────────────────────────────────────────────────

impl<DI: WriteOnlyDataCommand> DisplayPort for Sh1106<DI> {
    fn clear(&mut self) {
        self.clear_frame();
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.draw_str(x, y, text);
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.flush()
    }
}

// ── Motion sensor ─────────────────────────────────────────────

impl<P: InputPin> MotionSensorPort for PirSensor<P> {
    fn read_level(&mut self) -> Level {
        match self.motion() {
            Ok(true) => Level::Active,
            Ok(false) => Level::Inactive,
            Err(e) => {
                warn!("PIR {}, treating as no motion", Error::from(e));
                Level::Inactive
            }
        }
    }
}

// ── Buzzer ────────────────────────────────────────────────────

impl<P: OutputPin> BuzzerPort for Buzzer<P> {
    fn set_buzzer(&mut self, on: bool) {
        if let Err(e) = self.set(on) {
            warn!("Buzzer {} (wanted on={})", Error::from(e), on);
        }
    }
}
