//! Fixed-layout status screen.
//!
//! ```text
//!  y=15  Fablab Winam
//!  y=35  Temp:        23.5    C
//!  y=55  Hum:         60.0    %
//!        x=0          x=60    x=100
//! ```
//!
//! Coordinates are baseline-relative, matching the font renderer behind
//! [`DisplayPort::draw_text`].

use log::warn;

use crate::error::DisplayError;
use crate::format::format_fixed;

use super::ports::DisplayPort;

pub const TITLE_POS: (i32, i32) = (0, 15);
pub const TEMP_ROW_Y: i32 = 35;
pub const HUM_ROW_Y: i32 = 55;
pub const LABEL_X: i32 = 0;
pub const VALUE_X: i32 = 60;
pub const UNIT_X: i32 = 100;

/// Minimum field width of a rendered value.
pub const VALUE_WIDTH: usize = 4;
/// Fractional digits of a rendered value.
pub const VALUE_PRECISION: u8 = 1;

/// Drawn in place of a value the formatter rejects.
const VALUE_PLACEHOLDER: &str = "----";

/// Render the full screen and flush it.
pub fn render(
    display: &mut impl DisplayPort,
    title: &str,
    temperature: f32,
    humidity: f32,
) -> Result<(), DisplayError> {
    display.clear();
    display.draw_text(TITLE_POS.0, TITLE_POS.1, title);
    draw_row(display, TEMP_ROW_Y, "Temp:", temperature, "C");
    draw_row(display, HUM_ROW_Y, "Hum:", humidity, "%");
    display.present()
}

fn draw_row(display: &mut impl DisplayPort, y: i32, label: &str, value: f32, unit: &str) {
    display.draw_text(LABEL_X, y, label);
    match format_fixed::<20>(value, VALUE_WIDTH, VALUE_PRECISION) {
        Ok(text) => display.draw_text(VALUE_X, y, &text),
        Err(e) => {
            warn!("{} value {} not renderable: {}", label, value, e);
            display.draw_text(VALUE_X, y, VALUE_PLACEHOLDER);
        }
    }
    display.draw_text(UNIT_X, y, unit);
}
