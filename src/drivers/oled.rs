//! SSD1306 OLED adapter: renders text into the 8x8-pixel cell grid.
//!
//! Implements the presenter's [`TextDisplay`] contract: clear the cell
//! rectangle under the new text, draw, then push the buffer to the panel so
//! every write is visible immediately.

use core::cell::RefCell;

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use airmon_pico2::config::CELL_SIZE;
use airmon_pico2::presenter::{Presenter, TextDisplay};

type Display = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// The presenter wrapped for cross-task access. Writes are short and never
/// await, so the cooperative no-interleaving guarantee holds.
pub type SharedPresenter = Mutex<CriticalSectionRawMutex, RefCell<Presenter<Oled>>>;

pub struct Oled {
    display: Display,
}

impl Oled {
    /// Initialize the panel and clear it.
    pub fn new(i2c: I2c<'static, I2C1, Blocking>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().expect("display init failed");
        display.clear(BinaryColor::Off).ok();
        display.flush().ok();
        Self { display }
    }
}

impl TextDisplay for Oled {
    fn write_text(&mut self, text: &str, col: u8, row: u8) {
        let x = i32::from(col) * CELL_SIZE as i32;
        let y = i32::from(row) * CELL_SIZE as i32;

        // Blank the cell footprint first so shorter glyphs leave no remnants
        Rectangle::new(
            Point::new(x, y),
            Size::new(text.len() as u32 * CELL_SIZE, CELL_SIZE),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(&mut self.display)
        .ok();

        Text::with_baseline(
            text,
            Point::new(x, y),
            MonoTextStyle::new(&FONT_5X8, BinaryColor::On),
            Baseline::Top,
        )
        .draw(&mut self.display)
        .ok();

        self.display.flush().ok();
    }
}
