//! SH1106 128x64 monochrome OLED.
//!
//! The driver keeps a full frame in RAM and only talks to the panel in
//! [`Sh1106::init`] and [`Sh1106::flush`]. The bus side goes through
//! `display-interface`, so the control-byte framing (`0x00` for commands,
//! `0x40` for data) and I²C chunking come from `display-interface-i2c`.
//! Drawing goes through `embedded-graphics`; the station only draws text.
//!
//! ## Frame layout
//!
//! Page-organised like the controller RAM: 8 pages of 128 columns, one
//! byte per column per page, bit 0 at the top of the page.
//!
//! ```text
//!   byte index = (y / 8) * 128 + x      bit = y % 8
//! ```
//!
//! The SH1106 has 132 columns of RAM for a 128 pixel glass; the visible
//! window starts at column 2. It only supports page addressing, so every
//! page gets its own set-page / set-column commands before the data.

use display_interface::{DataFormat, WriteOnlyDataCommand};
use display_interface_i2c::I2CInterface;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_hal::i2c::I2c;

use crate::error::DisplayError;

pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;
const PAGES: usize = (HEIGHT / 8) as usize;
const FRAME_BYTES: usize = WIDTH as usize * PAGES;

/// 7-bit I²C address with SA0 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// I²C control byte announcing display RAM data.
const CONTROL_DATA: u8 = 0x40;

const COLUMN_OFFSET: u8 = 2;

/// Power-up sequence, one command (with its arguments) per entry.
const INIT_SEQUENCE: &[&[u8]] = &[
    &[0xAE],       // display off
    &[0xD5, 0x80], // clock divide / oscillator
    &[0xA8, 0x3F], // multiplex ratio: 64
    &[0xD3, 0x00], // display offset
    &[0x40],       // start line 0
    &[0xAD, 0x8B], // DC-DC on
    &[0xA1],       // segment remap
    &[0xC8],       // COM scan descending
    &[0xDA, 0x12], // COM pins
    &[0x81, 0xCF], // contrast
    &[0xD9, 0xF1], // pre-charge
    &[0xDB, 0x40], // VCOMH
    &[0xA4],       // follow RAM
    &[0xA6],       // normal (not inverted)
    &[0xAF],       // display on
];

pub struct Sh1106<DI> {
    interface: DI,
    frame: [u8; FRAME_BYTES],
}

impl<I: I2c> Sh1106<I2CInterface<I>> {
    /// Panel on an I²C bus at `address`.
    pub fn with_i2c(i2c: I, address: u8) -> Self {
        Self::new(I2CInterface::new(i2c, address, CONTROL_DATA))
    }
}

impl<DI: WriteOnlyDataCommand> Sh1106<DI> {
    pub fn new(interface: DI) -> Self {
        Self {
            interface,
            frame: [0; FRAME_BYTES],
        }
    }

    /// Send the power-up command sequence and blank the panel.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        for cmd in INIT_SEQUENCE {
            self.command(cmd)?;
        }
        self.clear_frame();
        self.flush()
    }

    /// Push the whole frame to the panel, one page at a time.
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        for page in 0..PAGES {
            self.command(&[
                0xB0 | page as u8,
                COLUMN_OFFSET & 0x0F,
                0x10 | (COLUMN_OFFSET >> 4),
            ])?;

            let start = page * WIDTH as usize;
            self.interface
                .send_data(DataFormat::U8(&self.frame[start..start + WIDTH as usize]))
                .map_err(|_| DisplayError::Bus)?;
        }
        Ok(())
    }

    /// Blank the frame (the panel keeps showing the old one until flushed).
    pub fn clear_frame(&mut self) {
        self.frame.fill(0);
    }

    /// Draw `text` in the 6x10 font with its baseline at `y`.
    pub fn draw_str(&mut self, x: i32, y: i32, text: &str) {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        // Drawing into RAM cannot fail.
        let _ = Text::new(text, Point::new(x, y), style).draw(self);
    }

    fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let idx = (y / 8) as usize * WIDTH as usize + x as usize;
        let mask = 1u8 << (y % 8);
        if on {
            self.frame[idx] |= mask;
        } else {
            self.frame[idx] &= !mask;
        }
    }

    fn command(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.interface
            .send_commands(DataFormat::U8(bytes))
            .map_err(|_| DisplayError::Bus)
    }
}

impl<DI> OriginDimensions for Sh1106<DI> {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl<DI: WriteOnlyDataCommand> DrawTarget for Sh1106<DI> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<It>(&mut self, pixels: It) -> Result<(), Self::Error>
    where
        It: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}
