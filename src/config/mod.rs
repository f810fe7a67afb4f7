//! Application configuration.
//!
//! - `layout`: Display grid dimensions and pre-computed layout constants
//! - `sensors`: Sampling periods, alert thresholds, and battery calibration

pub mod layout;
pub mod sensors;

// Re-export layout constants at config level for convenience
pub use layout::{CELL_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH, GRID_COLS, GRID_ROWS};
// Re-export sensor constants at config level for convenience
pub use sensors::{
    ADC_COUNTS_PER_VOLT,
    ALARM_DISABLE_AQI,
    ALARM_ENABLE_AQI,
    BATTERY_PERIOD_MS,
    BEEP_COUNT,
    BEEP_FREQ_HZ,
    BEEP_IDLE_POLL_MS,
    BEEP_ON_MS,
    BEEP_PAUSE_MS,
    BLINK_INTERVAL_MS,
    CLIMATE_PERIOD_MS,
    CO2_AVG_WINDOW,
    CO2_POLL_MS,
    LED_BRIGHTNESS,
    LED_COMMON_ANODE,
    LOW_BATTERY_PERCENT,
    MIN_SLOW_PERIOD_MS,
    SMOKE_CORRECTION,
    VBAT_EMPTY,
    VBAT_FULL,
    is_low_battery,
};
