//! Fablab Winam station firmware library.
//!
//! Exposes the pure-logic modules for integration testing. All ESP-IDF
//! specific code lives in `main.rs` and behind the `espidf` feature
//! inside the adapters; everything here builds and tests on the host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod format;
pub mod pins;
pub mod sensors;
