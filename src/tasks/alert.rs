//! Alert output tasks: LED blink toggling and the buzzer beep pattern.
//!
//! Both tasks only execute what the shared [`AlertController`] state machines
//! decide; the decisions themselves happen on the particulate task's updates.
//!
//! [`AlertController`]: airmon_pico2::alert::AlertController

use defmt::info;
use embassy_time::Timer;

use airmon_pico2::alert::{BeepAction, Buzzer, RgbLed, SharedAlert};
use airmon_pico2::config::BLINK_INTERVAL_MS;

use crate::drivers::{AlertLed, PwmBuzzer};

/// Advances the LED blink phase at a fixed interval. Steady levels simply
/// re-apply the same color every tick.
#[embassy_executor::task]
pub async fn led_blink_task(mut led: AlertLed, alert: &'static SharedAlert) -> ! {
    info!("led blink task started");

    loop {
        Timer::after_millis(BLINK_INTERVAL_MS).await;
        let (r, g, b) = alert.lock(|cell| cell.borrow_mut().blink_mut().tick());
        led.set_rgb(r, g, b);
    }
}

/// Plays the beep pattern. While the sequence is idle this degrades to a
/// cheap 2 s poll waiting for the alarm to re-arm it.
#[embassy_executor::task]
pub async fn beep_task(mut buzzer: PwmBuzzer, alert: &'static SharedAlert) -> ! {
    info!("beep task started");

    loop {
        let action = alert.lock(|cell| cell.borrow_mut().beeps_mut().next_action());
        match action {
            BeepAction::Tone { freq_hz, ms } => {
                buzzer.tone(freq_hz);
                Timer::after_millis(ms).await;
            }
            BeepAction::Silence { ms } | BeepAction::Idle { ms } => {
                buzzer.silence();
                Timer::after_millis(ms).await;
            }
        }
    }
}
