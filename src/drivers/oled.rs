//! SSD1306 OLED display wrapper.

use defmt::warn;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_5X8, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use tagbank::config::DISPLAY_I2C_ADDR;
use tagbank::ui::Surface;
use tagbank::Error;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct Oled<I2C> {
    display: Display<I2C>,
}

impl<I2C> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 and clear the screen.
    ///
    /// A panel that fails to initialise is logged and kept: every later
    /// frame retries the bus, so a loose connector recovers on its own.
    pub fn init(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDR);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if display.init().is_err() {
            warn!("OLED init failed");
        }
        display.clear_buffer();
        let _ = display.flush();
        Self { display }
    }
}

/// Map the surface's glyph scale onto the closest built-in mono font.
fn text_style(scale: u8) -> MonoTextStyle<'static, BinaryColor> {
    let font = match scale {
        0 | 1 => &FONT_5X8,
        2 => &FONT_9X18_BOLD,
        _ => &FONT_10X20,
    };
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> Surface for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = Error;

    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn draw_text(&mut self, x: i32, y: i32, scale: u8, text: &str) -> Result<(), Error> {
        Text::with_baseline(text, Point::new(x, y), text_style(scale), Baseline::Top)
            .draw(&mut self.display)
            .map(|_| ())
            .map_err(|_| Error::Display)
    }

    fn present(&mut self) -> Result<(), Error> {
        self.display.flush().map_err(|_| Error::Display)
    }
}
