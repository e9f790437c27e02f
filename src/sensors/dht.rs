//! DHT11 temperature/humidity sensor on a single open-drain data line.
//!
//! ## Protocol
//!
//! ```text
//!  host   ▔▔▔╲____20ms____╱▔40µs▔
//!  sensor                        ╲_80µs_╱▔80µs▔╲_50µs_╱▔26µs▔ (0) ...
//!                                                    ╱▔70µs▔ (1)
//! ```
//!
//! The host holds the line low for 20 ms, releases it, and the sensor
//! answers with an 80 µs low / 80 µs high handshake followed by 40 bits.
//! Every bit is a ~50 µs low followed by a high whose length encodes the
//! value; a high longer than the preceding low is a `1`. Pulse lengths are
//! measured by counting 1 µs delay steps, so only their ratio matters.
//!
//! Frame: `[hum_int, hum_dec, temp_int, temp_dec, checksum]`, where the
//! checksum is the low byte of the sum of the first four bytes and bit 7
//! of `temp_dec` flags a negative temperature.
//!
//! The sensor needs about 1 s between transactions; the climate poll
//! interval keeps reads well apart.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::SensorError;

const START_LOW_MS: u32 = 20;
const RELEASE_US: u32 = 40;
/// Upper bound on a single pulse, in 1 µs polling steps.
const PULSE_TIMEOUT_STEPS: u32 = 1000;
const FRAME_BITS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DhtReading {
    /// °C
    pub temperature: f32,
    /// %RH
    pub humidity: f32,
}

pub struct Dht11<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Take the data pin (open-drain, pulled up) and release the line.
    pub fn new(mut pin: P, delay: D) -> Self {
        // Idle level is high; a failed write shows up on the first read.
        let _ = pin.set_high();
        Self { pin, delay }
    }

    /// Run one full bus transaction and decode the frame.
    pub fn read(&mut self) -> Result<DhtReading, SensorError> {
        let frame = self.read_frame()?;
        decode(frame)
    }

    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Gpio)?;
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high().map_err(|_| SensorError::Gpio)?;
        self.delay.delay_us(RELEASE_US);

        // Response handshake.
        self.expect_pulse(false)?;
        self.expect_pulse(true)?;

        let mut frame = [0u8; 5];
        for bit in 0..FRAME_BITS {
            let low = self.expect_pulse(false)?;
            let high = self.expect_pulse(true)?;
            let byte = &mut frame[bit / 8];
            *byte <<= 1;
            if high > low {
                *byte |= 1;
            }
        }
        Ok(frame)
    }

    /// Count 1 µs steps while the line stays at `high`.
    fn expect_pulse(&mut self, high: bool) -> Result<u32, SensorError> {
        let mut steps = 0;
        while self.pin.is_high().map_err(|_| SensorError::Gpio)? == high {
            steps += 1;
            if steps >= PULSE_TIMEOUT_STEPS {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
        }
        Ok(steps)
    }
}

/// Validate the checksum and convert a raw frame.
pub fn decode(frame: [u8; 5]) -> Result<DhtReading, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorError::Checksum);
    }

    let humidity = f32::from(frame[0]) + f32::from(frame[1]) * 0.1;
    let mut temperature = f32::from(frame[2]) + f32::from(frame[3] & 0x7f) * 0.1;
    if frame[3] & 0x80 != 0 {
        temperature = -temperature;
    }

    Ok(DhtReading {
        temperature,
        humidity,
    })
}
