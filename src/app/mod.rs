//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the decision logic of the station: the climate
//! poll gate and stale-on-failure policy, the status screen layout, and
//! the motion alarm state machine. All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod climate;
pub mod events;
pub mod motion;
pub mod ports;
pub mod screen;
pub mod service;
