//! Shared sensor readings and derived values.
//!
//! One [`Readings`] value lives for the whole process behind a blocking
//! mutex and is handed to every sampling task by `&'static` reference at
//! construction. Each field has exactly one producing task; everyone else
//! only reads. Semantics are last-writer-wins per field: because tasks are
//! cooperative and the critical sections below never contain an await, a
//! reader can observe a value from before or after the producer's latest
//! update, but never a torn one.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Latest raw readings and derived values from all sensors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readings {
    /// Air temperature in °C (climate task).
    pub temperature_c: f32,
    /// Relative humidity in percent (climate task).
    pub humidity_pct: f32,
    /// Magnus dewpoint in °C (climate task).
    pub dewpoint_c: f32,
    /// Latest raw CO2 concentration in ppm (CO2 task).
    pub co2_ppm: u16,
    /// Windowed CO2 average in ppm; `None` until the first window completes
    /// (CO2 task).
    pub co2_ppm_avg: Option<f32>,
    /// PM2.5 concentration in µg/m³ (particulate task).
    pub pm25_ugm3: u16,
    /// PM10 concentration in µg/m³ (particulate task).
    pub pm10_ugm3: u16,
    /// AQI derived from raw PM2.5 (particulate task).
    pub aqi: u16,
    /// AQI derived from smoke-corrected PM2.5 (particulate task).
    pub smoke_aqi: u16,
    /// Battery voltage (battery task).
    pub battery_volts: f32,
    /// Battery charge percentage (battery task).
    pub battery_pct: u8,
    /// Low-battery indicator state (battery task).
    pub low_battery: bool,
}

impl Readings {
    /// All-zero startup state, before any sensor has reported.
    pub const fn new() -> Self {
        Self {
            temperature_c: 0.0,
            humidity_pct: 0.0,
            dewpoint_c: 0.0,
            co2_ppm: 0,
            co2_ppm_avg: None,
            pm25_ugm3: 0,
            pm10_ugm3: 0,
            aqi: 0,
            smoke_aqi: 0,
            battery_volts: 0.0,
            battery_pct: 0,
            low_battery: false,
        }
    }
}

impl Default for Readings {
    fn default() -> Self { Self::new() }
}

/// Process-wide shared readings container.
pub type SharedReadings = Mutex<CriticalSectionRawMutex, RefCell<Readings>>;

/// Create the shared container. Intended for a `static` in the binary.
pub const fn shared() -> SharedReadings { Mutex::new(RefCell::new(Readings::new())) }

/// Mutate the shared readings inside a short critical section.
/// The closure must not block or await.
pub fn update(shared: &SharedReadings, f: impl FnOnce(&mut Readings)) {
    shared.lock(|cell| f(&mut cell.borrow_mut()));
}

/// Copy the current readings out of the shared container.
pub fn snapshot(shared: &SharedReadings) -> Readings {
    shared.lock(|cell| *cell.borrow())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_state_is_empty() {
        let r = Readings::new();
        assert_eq!(r.co2_ppm_avg, None);
        assert_eq!(r.aqi, 0);
        assert!(!r.low_battery);
    }

    #[test]
    fn test_update_and_snapshot() {
        let shared = shared();
        update(&shared, |r| {
            r.temperature_c = 21.5;
            r.humidity_pct = 48.0;
        });

        let snap = snapshot(&shared);
        assert_eq!(snap.temperature_c, 21.5);
        assert_eq!(snap.humidity_pct, 48.0);
    }

    #[test]
    fn test_last_writer_wins_per_field() {
        let shared = shared();
        update(&shared, |r| r.co2_ppm = 400);
        update(&shared, |r| r.co2_ppm = 612);
        // A write to one field leaves every other field untouched
        update(&shared, |r| r.pm25_ugm3 = 7);

        let snap = snapshot(&shared);
        assert_eq!(snap.co2_ppm, 612);
        assert_eq!(snap.pm25_ugm3, 7);
        assert_eq!(snap.temperature_c, 0.0);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let shared = shared();
        let before = snapshot(&shared);
        update(&shared, |r| r.battery_pct = 80);
        // The earlier snapshot is unaffected by later writes
        assert_eq!(before.battery_pct, 0);
        assert_eq!(snapshot(&shared).battery_pct, 80);
    }
}
