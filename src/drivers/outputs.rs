//! PWM output adapters: RGB status LED and alarm buzzer.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::traits::ToFixed;

use airmon_pico2::alert::{Buzzer, RgbLed, channel_duty};

/// PWM divider putting the buzzer slice at a 1 MHz tick (150 MHz sys clock).
const BUZZER_CLOCK_DIV: f32 = 150.0;
const BUZZER_TICK_HZ: u32 = 1_000_000;

// =============================================================================
// Status LED
// =============================================================================

/// RGB status LED on two PWM slices: red/green share slice channels A/B,
/// blue sits on its own slice channel A.
pub struct AlertLed {
    rg: Pwm<'static>,
    b: Pwm<'static>,
    rg_cfg: PwmConfig,
    b_cfg: PwmConfig,
}

impl AlertLed {
    /// 8-bit color resolution: duty compare runs 0..=255.
    pub fn led_config() -> PwmConfig {
        let mut cfg = PwmConfig::default();
        cfg.top = 255;
        cfg
    }

    pub fn new(rg: Pwm<'static>, b: Pwm<'static>) -> Self {
        let mut led = Self {
            rg,
            b,
            rg_cfg: Self::led_config(),
            b_cfg: Self::led_config(),
        };
        led.set_rgb(0, 0, 0);
        led
    }
}

impl RgbLed for AlertLed {
    fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        // channel_duty applies brightness scaling and common-anode inversion
        self.rg_cfg.compare_a = u16::from(channel_duty(r));
        self.rg_cfg.compare_b = u16::from(channel_duty(g));
        self.b_cfg.compare_a = u16::from(channel_duty(b));
        self.rg.set_config(&self.rg_cfg);
        self.b.set_config(&self.b_cfg);
    }
}

// =============================================================================
// Buzzer
// =============================================================================

pub struct PwmBuzzer {
    pwm: Pwm<'static>,
    cfg: PwmConfig,
}

impl PwmBuzzer {
    pub fn buzzer_config() -> PwmConfig {
        let mut cfg = PwmConfig::default();
        cfg.divider = BUZZER_CLOCK_DIV.to_fixed();
        cfg.compare_a = 0;
        cfg
    }

    pub fn new(pwm: Pwm<'static>) -> Self {
        Self {
            pwm,
            cfg: Self::buzzer_config(),
        }
    }
}

impl Buzzer for PwmBuzzer {
    fn tone(&mut self, freq_hz: u16) {
        let top = (BUZZER_TICK_HZ / u32::from(freq_hz.max(16))) as u16 - 1;
        self.cfg.top = top;
        self.cfg.compare_a = top / 2; // square wave
        self.pwm.set_config(&self.cfg);
    }

    fn silence(&mut self) {
        self.cfg.compare_a = 0;
        self.pwm.set_config(&self.cfg);
    }
}
