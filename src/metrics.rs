//! Pure derived-metric functions: dewpoint and battery conversion.
//!
//! Everything here is stateless; sampling tasks call these with the latest
//! raw readings and store the results in the shared readings.

use crate::config::{ADC_COUNTS_PER_VOLT, VBAT_EMPTY, VBAT_FULL};

/// Dewpoint in °C from air temperature (°C) and relative humidity (%),
/// using the Magnus-form approximation:
///
/// alpha = ln(h/100) + 17.62*T / (243.12 + T)
/// dewpoint = 243.12 * alpha / (17.62 - alpha)
///
/// Humidity is clamped to a small positive floor; ln(0) has no finite value
/// and a sensor reporting 0% is already outside its calibrated range.
pub fn dewpoint(temperature_c: f32, humidity_pct: f32) -> f32 {
    let humidity = humidity_pct.clamp(0.1, 100.0);
    let alpha = libm::logf(humidity / 100.0) + 17.62 * temperature_c / (243.12 + temperature_c);
    243.12 * alpha / (17.62 - alpha)
}

/// Convert a raw ADC count from the battery sense input to volts.
#[inline]
pub fn counts_to_volts(raw: u16) -> f32 { f32::from(raw) / ADC_COUNTS_PER_VOLT }

/// Battery charge percentage from the measured voltage: linear interpolation
/// between [`VBAT_EMPTY`] (0%) and [`VBAT_FULL`] (100%), clamped.
pub fn battery_percent(volts: f32) -> u8 {
    let fraction = (volts - VBAT_EMPTY) / (VBAT_FULL - VBAT_EMPTY);
    let percent = (fraction * 100.0).clamp(0.0, 100.0);
    libm::roundf(percent) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dewpoint_reference_point() {
        // Magnus reference: 20C at 50% RH gives a dewpoint of ~9.26C
        let dp = dewpoint(20.0, 50.0);
        assert!((dp - 9.26).abs() < 0.1, "dewpoint(20, 50) = {dp}");
    }

    #[test]
    fn test_dewpoint_equals_temperature_at_saturation() {
        for t in [-5.0, 0.0, 20.0, 35.0] {
            let dp = dewpoint(t, 100.0);
            assert!((dp - t).abs() < 0.05, "dewpoint({t}, 100) = {dp}");
        }
    }

    #[test]
    fn test_dewpoint_monotonic_in_humidity() {
        let dry = dewpoint(20.0, 30.0);
        let humid = dewpoint(20.0, 70.0);
        assert!(dry < humid);
    }

    #[test]
    fn test_dewpoint_zero_humidity_is_finite() {
        assert!(dewpoint(20.0, 0.0).is_finite());
    }

    #[test]
    fn test_counts_to_volts() {
        assert_eq!(counts_to_volts(0), 0.0);
        let volts = counts_to_volts(1531); // ~3.7 V through the divider
        assert!((volts - 3.7).abs() < 0.01, "counts_to_volts(1531) = {volts}");
    }

    #[test]
    fn test_battery_percent_clamps_below_empty() {
        assert_eq!(battery_percent(VBAT_EMPTY), 0);
        assert_eq!(battery_percent(2.5), 0);
        assert_eq!(battery_percent(0.0), 0);
    }

    #[test]
    fn test_battery_percent_clamps_above_full() {
        assert_eq!(battery_percent(VBAT_FULL), 100);
        assert_eq!(battery_percent(4.5), 100);
    }

    #[test]
    fn test_battery_percent_midpoint() {
        let mid = (VBAT_EMPTY + VBAT_FULL) / 2.0;
        let pct = battery_percent(mid);
        assert!(pct >= 49 && pct <= 51, "battery_percent(midpoint) = {pct}");
    }
}
