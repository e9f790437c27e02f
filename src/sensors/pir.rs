//! HC-SR501 style PIR motion sensor.
//!
//! The module drives its output high while it sees motion (plus its own
//! retrigger hold time) and low otherwise. No pull resistor is needed; the
//! output is push-pull.

use embedded_hal::digital::InputPin;

use crate::error::SensorError;

pub struct PirSensor<P> {
    pin: P,
}

impl<P: InputPin> PirSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// `true` while the sensor output is high.
    pub fn motion(&mut self) -> Result<bool, SensorError> {
        self.pin.is_high().map_err(|_| SensorError::Gpio)
    }
}
