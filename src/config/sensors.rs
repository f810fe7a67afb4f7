//! Centralized sampling, alerting, and battery configuration.
//!
//! All values are compile-time constants with validation assertions.
//! This keeps the sampling tasks, the alert controller, and the battery
//! monitor consistent with each other.
//!
//! # Compile-Time Validation
//!
//! Each constant group includes `const` assertions that verify ordering at
//! compile time. If constants are configured incorrectly (e.g. the alarm
//! disable threshold above the enable threshold, which would remove the
//! hysteresis dead band), compilation fails with a clear error.

// =============================================================================
// Sampling Periods
// =============================================================================

/// Minimum period for the slow timed sensors. The DHT-class climate sensor
/// cannot be polled faster than this without corrupting its readings.
pub const MIN_SLOW_PERIOD_MS: u64 = 2000;

/// Climate (temperature/humidity) sampling period.
pub const CLIMATE_PERIOD_MS: u64 = 2000;

/// Interval between CO2 data-ready polls while waiting for a measurement.
pub const CO2_POLL_MS: u64 = 200;

/// Number of raw CO2 samples batched into one displayed average.
pub const CO2_AVG_WINDOW: usize = 5;

/// Battery sampling period.
pub const BATTERY_PERIOD_MS: u64 = 5000;

// Compile-time validation: timed sensor periods must respect the minimum
const _: () = assert!(CLIMATE_PERIOD_MS >= MIN_SLOW_PERIOD_MS);
const _: () = assert!(BATTERY_PERIOD_MS >= MIN_SLOW_PERIOD_MS);
const _: () = assert!(CO2_AVG_WINDOW > 0);

// =============================================================================
// Air Quality Alarm Thresholds
// =============================================================================

/// Correction factor applied to raw PM2.5 before computing the smoke AQI.
/// Approximates smoke-specific particle composition.
pub const SMOKE_CORRECTION: f32 = 0.48;

/// Smoke AQI at or above which the alarm engages.
pub const ALARM_ENABLE_AQI: u16 = 80;

/// Smoke AQI at or below which the alarm disengages.
/// The gap up to [`ALARM_ENABLE_AQI`] is the hysteresis dead band: values
/// strictly between the two thresholds never change the alarm state.
pub const ALARM_DISABLE_AQI: u16 = 50;

// Compile-time validation: a dead band must exist or the alarm chatters
const _: () = assert!(ALARM_DISABLE_AQI < ALARM_ENABLE_AQI);

// =============================================================================
// Buzzer Beep Pattern
// =============================================================================

/// Number of beeps played when the alarm engages.
pub const BEEP_COUNT: u16 = 60;

/// Beep tone frequency in Hz.
pub const BEEP_FREQ_HZ: u16 = 700;

/// Tone-on duration of one beep cycle.
pub const BEEP_ON_MS: u64 = 140;

/// Silent gap between beeps.
pub const BEEP_PAUSE_MS: u64 = 30;

/// Re-arm poll interval while the beep sequence is idle.
pub const BEEP_IDLE_POLL_MS: u64 = 2000;

const _: () = assert!(BEEP_COUNT > 0);
const _: () = assert!(BEEP_ON_MS > 0 && BEEP_PAUSE_MS > 0);

// =============================================================================
// Status LED
// =============================================================================

/// LED on/off toggle interval while a blinking level is active.
pub const BLINK_INTERVAL_MS: u64 = 500;

/// Brightness factor applied to every LED channel, in [0.0, 1.0].
pub const LED_BRIGHTNESS: f32 = 0.25;

/// The status LED is wired common-anode: channel duty must be inverted
/// (255 - scaled value) before it reaches the PWM compare register.
pub const LED_COMMON_ANODE: bool = true;

const _: () = assert!(BLINK_INTERVAL_MS > 0);
const _: () = assert!(LED_BRIGHTNESS >= 0.0 && LED_BRIGHTNESS <= 1.0);

// =============================================================================
// Battery Calibration
// =============================================================================

/// ADC counts per volt at the battery sense input: 12-bit conversion, 3.3 V
/// reference, behind the 3:1 VSYS divider (4096 / (3.3 * 3)).
pub const ADC_COUNTS_PER_VOLT: f32 = 413.7;

/// Voltage reported as 0% charge.
pub const VBAT_EMPTY: f32 = 3.2;

/// Voltage reported as 100% charge.
pub const VBAT_FULL: f32 = 4.2;

/// Percentage below which the low-battery indicator is shown.
/// One-sided threshold: the indicator clears as soon as the percentage is
/// back at or above this value (unlike the AQI alarm, no hysteresis).
pub const LOW_BATTERY_PERCENT: u8 = 20;

const _: () = assert!(VBAT_EMPTY < VBAT_FULL);
const _: () = assert!(LOW_BATTERY_PERCENT <= 100);

/// Check if the battery percentage is in the low-battery range.
#[inline]
pub fn is_low_battery(percent: u8) -> bool { percent < LOW_BATTERY_PERCENT }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)] // Intentional validation of constant ordering
mod tests {
    use super::*;

    #[test]
    fn test_alarm_thresholds_leave_dead_band() {
        assert!(ALARM_DISABLE_AQI < ALARM_ENABLE_AQI);
        assert!(ALARM_ENABLE_AQI - ALARM_DISABLE_AQI >= 10, "dead band should be wide enough to stop chatter");
    }

    #[test]
    fn test_sampling_periods_respect_minimum() {
        assert!(CLIMATE_PERIOD_MS >= MIN_SLOW_PERIOD_MS);
        assert!(BATTERY_PERIOD_MS >= MIN_SLOW_PERIOD_MS);
        assert!(CO2_POLL_MS < MIN_SLOW_PERIOD_MS, "CO2 ready polling is a fast poll, not a slow sample");
    }

    #[test]
    fn test_battery_voltage_window() {
        assert!(VBAT_EMPTY < VBAT_FULL);
    }

    #[test]
    fn test_is_low_battery() {
        assert!(is_low_battery(0), "0% should be low");
        assert!(is_low_battery(19), "19% should be low");
        assert!(!is_low_battery(20), "20% should not be low");
        assert!(!is_low_battery(100), "100% should not be low");
    }

    #[test]
    fn test_smoke_correction_reduces_concentration() {
        assert!(SMOKE_CORRECTION > 0.0 && SMOKE_CORRECTION < 1.0);
    }
}
