//! Hardware adapters for the monitor's external collaborators.
//!
//! Each adapter implements one of the library's interface traits over an
//! embassy-rp peripheral:
//!
//! - `oled`: SSD1306 text-cell renderer behind [`airmon_pico2::presenter::TextDisplay`]
//! - `dht22`: one-wire climate sensor behind [`airmon_pico2::sensors::ClimateSensor`]
//! - `pms5003`: UART particulate sensor behind [`airmon_pico2::sensors::ParticulateSensor`]
//! - `scd30`: I2C CO2 sensor behind [`airmon_pico2::sensors::Co2Sensor`]
//! - `vsys`: battery sense ADC behind [`airmon_pico2::sensors::BatteryAdc`]
//! - `outputs`: PWM status LED and buzzer behind the alert traits

mod dht22;
mod oled;
mod outputs;
mod pms5003;
mod scd30;
mod vsys;

pub use dht22::Dht22;
pub use oled::{Oled, SharedPresenter};
pub use outputs::{AlertLed, PwmBuzzer};
pub use pms5003::Pms5003;
pub use scd30::Scd30;
pub use vsys::BatteryVsys;
