//! EPA air quality index from PM2.5 concentration.
//!
//! The index is a piecewise-linear map over six concentration bands. Each band
//! interpolates linearly between its concentration bounds and its index
//! bounds; results are rounded to the nearest integer. Concentrations above
//! the top band saturate to a sentinel value rather than extrapolating.
//!
//! Values can be cross-checked against the EPA calculator at
//! <https://www.airnow.gov/aqi/aqi-calculator-concentration/>.

/// Sentinel index reported for concentrations beyond the highest band.
pub const AQI_SATURATED: u16 = 999;

/// One breakpoint band: concentration bounds mapped onto index bounds.
struct Band {
    conc_lo: f32,
    conc_hi: f32,
    index_lo: u16,
    index_hi: u16,
}

/// PM2.5 breakpoint table (µg/m³ -> index).
const PM25_BANDS: [Band; 6] = [
    Band { conc_lo: 0.0, conc_hi: 12.0, index_lo: 0, index_hi: 50 },
    Band { conc_lo: 12.0, conc_hi: 35.4, index_lo: 51, index_hi: 100 },
    Band { conc_lo: 35.4, conc_hi: 55.4, index_lo: 101, index_hi: 150 },
    Band { conc_lo: 55.4, conc_hi: 150.4, index_lo: 151, index_hi: 200 },
    Band { conc_lo: 150.4, conc_hi: 250.4, index_lo: 201, index_hi: 300 },
    Band { conc_lo: 250.4, conc_hi: 500.4, index_lo: 301, index_hi: 500 },
];

/// Calculate the AQI for a PM2.5 concentration in µg/m³.
///
/// Negative inputs are treated as zero. Concentrations above the top band
/// (500.4 µg/m³) return [`AQI_SATURATED`].
pub fn aqi_from_pm25(concentration: f32) -> u16 {
    let c = if concentration < 0.0 { 0.0 } else { concentration };

    for band in &PM25_BANDS {
        if c <= band.conc_hi {
            // Linear interpolation within the band, per the EPA formula:
            // I = (Ihi - Ilo) / (Chi - Clo) * (C - Clo) + Ilo
            let slope = f32::from(band.index_hi - band.index_lo) / (band.conc_hi - band.conc_lo);
            let index = slope * (c - band.conc_lo) + f32::from(band.index_lo);
            return libm::roundf(index) as u16;
        }
    }

    AQI_SATURATED
}

/// EPA AQI level buckets, ordered from best to worst air quality.
///
/// The derived `Ord` follows declaration order, so comparisons like
/// `level >= AqiLevel::Purple` read naturally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiLevel {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
}

impl AqiLevel {
    /// Bucket an integer AQI into its level.
    pub const fn from_index(aqi: u16) -> Self {
        match aqi {
            0..=50 => Self::Green,
            51..=100 => Self::Yellow,
            101..=150 => Self::Orange,
            151..=200 => Self::Red,
            201..=300 => Self::Purple,
            _ => Self::Maroon,
        }
    }

    /// Status LED color for this level (EPA AQI palette).
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0, 228, 0),
            Self::Yellow => (255, 255, 0),
            Self::Orange => (255, 126, 0),
            Self::Red => (255, 0, 0),
            Self::Purple => (143, 63, 151),
            Self::Maroon => (126, 0, 35),
        }
    }

    /// Whether the status LED blinks at this level. The two worst levels
    /// blink; everything below them is steady.
    pub const fn blinks(self) -> bool { matches!(self, Self::Purple | Self::Maroon) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_upper_breakpoints_exact() {
        assert_eq!(aqi_from_pm25(12.0), 50);
        assert_eq!(aqi_from_pm25(35.4), 100);
        assert_eq!(aqi_from_pm25(55.4), 150);
        assert_eq!(aqi_from_pm25(150.4), 200);
        assert_eq!(aqi_from_pm25(250.4), 300);
        assert_eq!(aqi_from_pm25(500.4), 500);
    }

    #[test]
    fn test_band_interior_values() {
        assert_eq!(aqi_from_pm25(0.0), 0);
        assert_eq!(aqi_from_pm25(6.0), 25);
        assert_eq!(aqi_from_pm25(45.0), 125);
        assert_eq!(aqi_from_pm25(90.0), 169);
    }

    #[test]
    fn test_saturation_above_top_band() {
        assert_eq!(aqi_from_pm25(500.5), AQI_SATURATED);
        assert_eq!(aqi_from_pm25(600.0), AQI_SATURATED);
        assert_eq!(aqi_from_pm25(f32::MAX), AQI_SATURATED);
    }

    #[test]
    fn test_negative_concentration_treated_as_zero() {
        assert_eq!(aqi_from_pm25(-1.0), 0);
    }

    #[test]
    fn test_level_buckets() {
        assert_eq!(AqiLevel::from_index(0), AqiLevel::Green);
        assert_eq!(AqiLevel::from_index(50), AqiLevel::Green);
        assert_eq!(AqiLevel::from_index(51), AqiLevel::Yellow);
        assert_eq!(AqiLevel::from_index(100), AqiLevel::Yellow);
        assert_eq!(AqiLevel::from_index(101), AqiLevel::Orange);
        assert_eq!(AqiLevel::from_index(150), AqiLevel::Orange);
        assert_eq!(AqiLevel::from_index(151), AqiLevel::Red);
        assert_eq!(AqiLevel::from_index(200), AqiLevel::Red);
        assert_eq!(AqiLevel::from_index(201), AqiLevel::Purple);
        assert_eq!(AqiLevel::from_index(300), AqiLevel::Purple);
        assert_eq!(AqiLevel::from_index(301), AqiLevel::Maroon);
        assert_eq!(AqiLevel::from_index(AQI_SATURATED), AqiLevel::Maroon);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(AqiLevel::Green < AqiLevel::Yellow);
        assert!(AqiLevel::Yellow < AqiLevel::Orange);
        assert!(AqiLevel::Orange < AqiLevel::Red);
        assert!(AqiLevel::Red < AqiLevel::Purple);
        assert!(AqiLevel::Purple < AqiLevel::Maroon);
    }

    #[test]
    fn test_blink_only_at_worst_levels() {
        assert!(!AqiLevel::Green.blinks());
        assert!(!AqiLevel::Yellow.blinks());
        assert!(!AqiLevel::Orange.blinks());
        assert!(!AqiLevel::Red.blinks());
        assert!(AqiLevel::Purple.blinks());
        assert!(AqiLevel::Maroon.blinks());
    }
}
