//! Integration test driver for the `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises a component against
//! mock adapters. All tests run on the host with no real hardware.

mod mock_hw;
mod motion_tests;
