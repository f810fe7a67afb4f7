//! Temperature/humidity sampling task.

use defmt::{debug, info};
use embassy_time::Timer;

use airmon_pico2::config::CLIMATE_PERIOD_MS;
use airmon_pico2::metrics::dewpoint;
use airmon_pico2::readings::{self, SharedReadings};
use airmon_pico2::sensors::ClimateSensor;

use crate::drivers::{Dht22, SharedPresenter};

#[embassy_executor::task]
pub async fn climate_task(
    mut sensor: Dht22<'static>,
    shared: &'static SharedReadings,
    presenter: &'static SharedPresenter,
) -> ! {
    info!("climate task started");

    loop {
        // The sensor needs the full period between reads; sleeping first also
        // covers its power-up settling time
        Timer::after_millis(CLIMATE_PERIOD_MS).await;

        let sample = sensor
            .measure()
            .await
            .expect("climate sensor read failed");
        let dewpoint_c = dewpoint(sample.temperature_c, sample.humidity_pct);

        readings::update(shared, |r| {
            r.temperature_c = sample.temperature_c;
            r.humidity_pct = sample.humidity_pct;
            r.dewpoint_c = dewpoint_c;
        });

        presenter.lock(|cell| {
            let mut p = cell.borrow_mut();
            p.temperature(sample.temperature_c);
            p.humidity(sample.humidity_pct);
            p.dewpoint(dewpoint_c);
        });

        debug!(
            "climate: {}C {}% dewpoint {}C",
            sample.temperature_c, sample.humidity_pct, dewpoint_c
        );
    }
}
