//! Liveness heartbeat on the onboard LED.

use defmt::info;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

const HEARTBEAT_MS: u64 = 1000;

/// Toggles the onboard LED so a wedged executor is visible at a glance.
#[embassy_executor::task]
pub async fn heartbeat_task(mut led: Output<'static>) -> ! {
    info!("heartbeat task started");

    loop {
        led.toggle();
        Timer::after_millis(HEARTBEAT_MS).await;
    }
}
