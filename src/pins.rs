//! GPIO / peripheral pin assignments for the station board.
//!
//! Single source of truth: `main` builds every driver from these numbers
//! rather than hard-coding pins.

// ---------------------------------------------------------------------------
// Climate sensor (DHT11, single-wire, open-drain with 10 kΩ pull-up)
// ---------------------------------------------------------------------------

pub const DHT_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// OLED (SH1106 128x64, I²C)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 8;
pub const I2C_SCL_GPIO: i32 = 9;
/// Bus clock (kHz). The SH1106 is rated for fast-mode.
pub const I2C_FREQ_KHZ: u32 = 400;

// ---------------------------------------------------------------------------
// Motion alarm
// ---------------------------------------------------------------------------

/// Digital input: PIR output, HIGH = motion.
pub const PIR_GPIO: i32 = 5;
/// Digital output: active buzzer, HIGH = sounding.
pub const BUZZER_GPIO: i32 = 6;
