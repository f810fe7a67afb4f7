//! Battery monitoring task.

use defmt::{debug, info};
use embassy_time::Timer;

use airmon_pico2::config::{BATTERY_PERIOD_MS, is_low_battery};
use airmon_pico2::metrics::{battery_percent, counts_to_volts};
use airmon_pico2::readings::{self, SharedReadings};
use airmon_pico2::sensors::BatteryAdc;

use crate::drivers::{BatteryVsys, SharedPresenter};

#[embassy_executor::task]
pub async fn battery_task(
    mut adc: BatteryVsys<'static>,
    shared: &'static SharedReadings,
    presenter: &'static SharedPresenter,
) -> ! {
    info!("battery task started");

    loop {
        Timer::after_millis(BATTERY_PERIOD_MS).await;

        let raw = adc.read_raw().await.expect("battery adc read failed");
        let volts = counts_to_volts(raw);
        let percent = battery_percent(volts);
        // One-sided threshold: the indicator clears as soon as the
        // percentage is back above the limit
        let low = is_low_battery(percent);

        readings::update(shared, |r| {
            r.battery_volts = volts;
            r.battery_pct = percent;
            r.low_battery = low;
        });

        presenter.lock(|cell| {
            let mut p = cell.borrow_mut();
            p.battery(percent);
            p.low_battery(low);
        });

        debug!("battery: {}V {}% low={}", volts, percent, low);
    }
}
