//! Actuator and display drivers.

pub mod buzzer;
pub mod sh1106;
