//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements          | Connects to               |
//! |----------------|---------------------|---------------------------|
//! | `hardware`     | ClimateSensorPort   | DHT11 data line           |
//! |                | DisplayPort         | SH1106 OLED over I²C      |
//! |                | MotionSensorPort    | PIR output GPIO           |
//! |                | BuzzerPort          | Buzzer GPIO               |
//! | `log_sink`     | EventSink           | Serial log output         |
//! | `time`         |:                   | ESP32 system timer        |

pub mod hardware;
pub mod log_sink;
pub mod time;
