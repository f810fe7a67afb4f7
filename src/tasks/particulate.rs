//! Particulate sampling task.
//!
//! Event-driven: the sensor sets the pace by streaming a frame per completed
//! measurement, so this loop has no timer of its own. Each reading produces
//! the plain AQI and the smoke-corrected AQI; the latter drives the alert
//! controller.

use defmt::{debug, info};

use airmon_pico2::alert::SharedAlert;
use airmon_pico2::aqi::aqi_from_pm25;
use airmon_pico2::config::SMOKE_CORRECTION;
use airmon_pico2::readings::{self, SharedReadings};
use airmon_pico2::sensors::ParticulateSensor;

use crate::drivers::{Pms5003, SharedPresenter};

#[embassy_executor::task]
pub async fn particulate_task(
    mut sensor: Pms5003<'static>,
    shared: &'static SharedReadings,
    presenter: &'static SharedPresenter,
    alert: &'static SharedAlert,
) -> ! {
    info!("particulate task started");

    loop {
        let pm = sensor
            .next_reading()
            .await
            .expect("particulate sensor read failed");

        let aqi = aqi_from_pm25(f32::from(pm.pm25_env));
        let smoke_aqi = aqi_from_pm25(f32::from(pm.pm25_env) * SMOKE_CORRECTION);

        readings::update(shared, |r| {
            r.pm25_ugm3 = pm.pm25_env;
            r.pm10_ugm3 = pm.pm10_env;
            r.aqi = aqi;
            r.smoke_aqi = smoke_aqi;
        });

        presenter.lock(|cell| {
            let mut p = cell.borrow_mut();
            p.pm25(pm.pm25_env);
            p.pm10(pm.pm10_env);
            p.aqi(aqi);
            p.smoke_aqi(smoke_aqi);
        });

        if let Some(event) = alert.lock(|cell| cell.borrow_mut().update(smoke_aqi)) {
            info!("alarm {} at smoke AQI {}", defmt::Debug2Format(&event), smoke_aqi);
        }

        debug!(
            "particulate: PM2.5 {} PM10 {} AQI {} smoke {}",
            pm.pm25_env, pm.pm10_env, aqi, smoke_aqi
        );
    }
}
