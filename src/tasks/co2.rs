//! CO2 sampling task.
//!
//! The sensor measures on its own cadence; this loop polls its data-ready
//! flag every 200 ms (not an error condition, just not-yet), reads the
//! measurement, and batches the raw values through a 5-sample window. The
//! display only updates when a window completes.

use defmt::{debug, info};
use embassy_time::Timer;

use airmon_pico2::config::{CO2_AVG_WINDOW, CO2_POLL_MS};
use airmon_pico2::filter::AverageFilter;
use airmon_pico2::readings::{self, SharedReadings};
use airmon_pico2::sensors::Co2Sensor;

use crate::drivers::{Scd30, SharedPresenter};

#[embassy_executor::task]
pub async fn co2_task(
    mut sensor: Scd30<'static>,
    shared: &'static SharedReadings,
    presenter: &'static SharedPresenter,
) -> ! {
    info!("co2 task started");

    let mut filter = AverageFilter::new(CO2_AVG_WINDOW);

    loop {
        while !sensor.data_ready().await.expect("co2 status poll failed") {
            Timer::after_millis(CO2_POLL_MS).await;
        }

        // The sensor's own temperature/humidity ride along; the climate task
        // owns those fields, so only the gas reading is kept
        let measurement = sensor
            .read_measurement()
            .await
            .expect("co2 sensor read failed");

        readings::update(shared, |r| r.co2_ppm = measurement.co2_ppm);

        if let Some(average) = filter.push(f32::from(measurement.co2_ppm)) {
            readings::update(shared, |r| r.co2_ppm_avg = Some(average));
            presenter.lock(|cell| cell.borrow_mut().co2_average(average));
            debug!("co2: window average {} ppm", average);
        }
    }
}
