//! Fablab Winam station: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  DhtClimateSensor   Sh1106        PirSensor    Buzzer        │
//! │  (ClimateSensor)    (Display)     (Motion)     (Buzzer)      │
//! │  LogEventSink       Esp32TimeAdapter                         │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │        AppService (pure logic, super-loop body)    │      │
//! │  │     ClimateMonitor  →  MotionAlarm                 │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use esp_idf_hal::gpio::{AnyIOPin, PinDriver, Pull};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;
use log::{info, warn};

use winam_station::adapters::hardware::DhtClimateSensor;
use winam_station::adapters::log_sink::LogEventSink;
use winam_station::adapters::time::Esp32TimeAdapter;
use winam_station::app::service::AppService;
use winam_station::config::SystemConfig;
use winam_station::drivers::buzzer::Buzzer;
use winam_station::drivers::sh1106::{self, Sh1106};
use winam_station::error::Error;
use winam_station::pins;
use winam_station::sensors::dht::Dht11;
use winam_station::sensors::pir::PirSensor;

/// Super-loop period. Rendering happens every pass; polling is gated
/// separately by `poll_interval_ms`.
const LOOP_PERIOD_MS: u32 = 10;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Fablab Winam station v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();
    config.validate()?;

    // ── 2. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;

    // SAFETY: each GPIO number in `pins` is claimed exactly once below and
    // never through `peripherals.pins`.
    let (dht_io, sda, scl, pir_io, buzzer_io) = unsafe {
        (
            AnyIOPin::new(pins::DHT_GPIO),
            AnyIOPin::new(pins::I2C_SDA_GPIO),
            AnyIOPin::new(pins::I2C_SCL_GPIO),
            AnyIOPin::new(pins::PIR_GPIO),
            AnyIOPin::new(pins::BUZZER_GPIO),
        )
    };

    let mut dht_pin = PinDriver::input_output_od(dht_io)?;
    dht_pin.set_pull(Pull::Up)?;
    let climate_sensor = DhtClimateSensor::new(Dht11::new(dht_pin, Ets));

    let i2c_config = I2cConfig::new().baudrate(pins::I2C_FREQ_KHZ.kHz().into());
    let i2c = I2cDriver::new(peripherals.i2c0, sda, scl, &i2c_config)?;
    let mut display = Sh1106::with_i2c(i2c, sh1106::DEFAULT_ADDRESS);
    if let Err(e) = display.init() {
        // Keep going: the alarm works without a screen and every tick
        // retries the flush.
        warn!("OLED init failed ({}), continuing", Error::from(e));
    }

    let pir = PirSensor::new(PinDriver::input(pir_io)?);
    let buzzer = Buzzer::new(PinDriver::output(buzzer_io)?);

    // ── 3. Application ────────────────────────────────────────
    let time = Esp32TimeAdapter::new();
    let mut sink = LogEventSink::new();
    let mut app = AppService::from_ports(climate_sensor, display, pir, buzzer, &config);
    app.start(&mut sink);

    info!("System ready. Entering super-loop.");

    // ── 4. Super-loop ─────────────────────────────────────────
    loop {
        app.tick(time.uptime_ms(), &mut sink);
        FreeRtos::delay_ms(LOOP_PERIOD_MS);
    }
}
