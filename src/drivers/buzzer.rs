//! Active buzzer on a push-pull GPIO (HIGH = sounding).
//!
//! A dumb actuator: the beep pattern lives in the motion alarm.

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;

pub struct Buzzer<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Buzzer<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        let res = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.on = on;
        Ok(())
    }

    /// Last level successfully written.
    pub fn is_on(&self) -> bool {
        self.on
    }
}
