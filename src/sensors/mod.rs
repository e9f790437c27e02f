//! Sensor drivers.
//!
//! Each driver is generic over the embedded-hal 1.0 traits it needs, so the
//! same code runs against ESP-IDF pins on the board and scripted mock pins
//! on the host. The adapters in [`crate::adapters::hardware`] bridge these
//! drivers to the domain port traits.

pub mod dht;
pub mod pir;
