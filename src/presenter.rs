//! Display presenter: maps semantic fields to fixed cells on the text grid.
//!
//! Each field is one variant of a closed enum carrying a fixed (column, row)
//! cell position, so writing an unknown field is a compile error rather than
//! a runtime fault. Formats are fixed-width, which keeps a field's cell
//! footprint constant across updates; the renderer clears that footprint
//! before drawing, so a shorter value can never leave artifacts behind.
//!
//! A negative declared column means right-aligned: the effective column is
//! `-declared - text_length`, anchoring the text's right edge independent of
//! its length. There is no buffering across fields; every call renders
//! synchronously and callers avoid redundant writes within one update.

use core::fmt::Write;

use heapless::String;

use crate::config::GRID_COLS;

/// Interface to the external text renderer.
///
/// Coordinates are cell positions in the 16x8 grid of 8x8-pixel cells. The
/// renderer is expected to clear the cell rectangle under the new text before
/// drawing it, and to present the result after each write.
pub trait TextDisplay {
    fn write_text(&mut self, text: &str, col: u8, row: u8);
}

/// Semantic display fields, each pinned to a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Battery,
    Temperature,
    Humidity,
    Dewpoint,
    Co2Average,
    Pm25,
    Pm10,
    Aqi,
    SmokeAqi,
    LowBattery,
}

impl Field {
    /// Declared (column, row) cell for this field. A negative column
    /// right-aligns the text as described in the module docs.
    const fn cell(self) -> (i8, u8) {
        match self {
            Self::Title => (0, 0),
            Self::Battery => (-16, 0),
            Self::Temperature => (0, 1),
            Self::Humidity => (-16, 1),
            Self::Dewpoint => (0, 2),
            Self::Co2Average => (0, 3),
            Self::Pm25 => (0, 4),
            Self::Pm10 => (0, 5),
            Self::Aqi => (0, 6),
            Self::SmokeAqi => (-16, 6),
            Self::LowBattery => (-16, 7),
        }
    }
}

/// Resolve a declared column to the effective left-edge column.
///
/// Non-negative columns are used as-is. For negative columns the text is
/// right-aligned: effective column = -declared - length, clamping at zero if
/// the text is too wide for its anchor.
pub fn resolve_col(declared: i8, text_len: usize) -> u8 {
    if declared >= 0 {
        return declared as u8;
    }
    let effective = -i32::from(declared) - text_len as i32;
    effective.clamp(0, GRID_COLS as i32 - 1) as u8
}

/// Formats field values and writes them to their grid cells.
pub struct Presenter<D: TextDisplay> {
    display: D,
}

impl<D: TextDisplay> Presenter<D> {
    pub const fn new(display: D) -> Self { Self { display } }

    /// Static title line, drawn once at startup.
    pub fn title(&mut self) { self.write(Field::Title, "AIR MONITOR"); }

    pub fn temperature(&mut self, celsius: f32) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "T {celsius:5.1}C");
        self.write(Field::Temperature, &text);
    }

    pub fn humidity(&mut self, percent: f32) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "H {percent:5.1}%");
        self.write(Field::Humidity, &text);
    }

    pub fn dewpoint(&mut self, celsius: f32) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "DP {celsius:5.1}C");
        self.write(Field::Dewpoint, &text);
    }

    /// Windowed CO2 average; only called when a window completes.
    pub fn co2_average(&mut self, ppm: f32) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "CO2 {ppm:5.0}ppm");
        self.write(Field::Co2Average, &text);
    }

    pub fn pm25(&mut self, ugm3: u16) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "PM2.5 {ugm3:4}");
        self.write(Field::Pm25, &text);
    }

    pub fn pm10(&mut self, ugm3: u16) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "PM10  {ugm3:4}");
        self.write(Field::Pm10, &text);
    }

    pub fn aqi(&mut self, index: u16) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "AQI {index:3}");
        self.write(Field::Aqi, &text);
    }

    pub fn smoke_aqi(&mut self, index: u16) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "SMK {index:3}");
        self.write(Field::SmokeAqi, &text);
    }

    pub fn battery(&mut self, percent: u8) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "{percent:3}%");
        self.write(Field::Battery, &text);
    }

    /// Persistent low-battery indicator; blanks its footprint when cleared.
    pub fn low_battery(&mut self, active: bool) {
        let text = if active { "LOW BAT" } else { "       " };
        self.write(Field::LowBattery, text);
    }

    fn write(&mut self, field: Field, text: &str) {
        let (declared_col, row) = field.cell();
        let col = resolve_col(declared_col, text.len());
        self.display.write_text(text, col, row);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Captures writes so tests can assert on text and placement.
    struct MockDisplay {
        writes: Vec<(std::string::String, u8, u8)>,
    }

    impl MockDisplay {
        fn new() -> Self { Self { writes: Vec::new() } }
    }

    impl TextDisplay for MockDisplay {
        fn write_text(&mut self, text: &str, col: u8, row: u8) {
            self.writes.push((text.into(), col, row));
        }
    }

    fn last(p: &Presenter<MockDisplay>) -> &(std::string::String, u8, u8) {
        p.display.writes.last().expect("no write captured")
    }

    #[test]
    fn test_resolve_col_passthrough_for_non_negative() {
        assert_eq!(resolve_col(0, 10), 0);
        assert_eq!(resolve_col(5, 3), 5);
    }

    #[test]
    fn test_resolve_col_right_alignment() {
        // "3.4%" declared at column -6: effective = 6 - 4 = 2, so the text's
        // right edge lands on cell boundary 6 regardless of its length
        assert_eq!(resolve_col(-6, 4), 2);
        assert_eq!(resolve_col(-6, 2), 4);
        assert_eq!(resolve_col(-16, 4), 12);
    }

    #[test]
    fn test_resolve_col_clamps_oversized_text() {
        assert_eq!(resolve_col(-4, 10), 0);
    }

    #[test]
    fn test_title_at_origin() {
        let mut p = Presenter::new(MockDisplay::new());
        p.title();
        assert_eq!(last(&p), &("AIR MONITOR".into(), 0, 0));
    }

    #[test]
    fn test_temperature_formatting() {
        let mut p = Presenter::new(MockDisplay::new());
        p.temperature(23.4);
        assert_eq!(last(&p), &("T  23.4C".into(), 0, 1));

        p.temperature(-5.0);
        assert_eq!(last(&p).0, "T  -5.0C");
    }

    #[test]
    fn test_humidity_right_aligned_to_screen_edge() {
        let mut p = Presenter::new(MockDisplay::new());
        p.humidity(50.3);
        let (text, col, row) = last(&p).clone();
        assert_eq!(text, "H  50.3%");
        assert_eq!((col, row), (8, 1));
        // Right edge sits on the last grid column
        assert_eq!(col as usize + text.len(), GRID_COLS as usize);
    }

    #[test]
    fn test_battery_right_aligned_fixed_width() {
        let mut p = Presenter::new(MockDisplay::new());
        p.battery(97);
        assert_eq!(last(&p), &(" 97%".into(), 12, 0));

        // Width is constant, so the footprint never moves
        p.battery(5);
        assert_eq!(last(&p), &("  5%".into(), 12, 0));
        p.battery(100);
        assert_eq!(last(&p), &("100%".into(), 12, 0));
    }

    #[test]
    fn test_co2_average_row() {
        let mut p = Presenter::new(MockDisplay::new());
        p.co2_average(612.4);
        assert_eq!(last(&p), &("CO2   612ppm".into(), 0, 3));
    }

    #[test]
    fn test_particulate_rows_do_not_collide() {
        let mut p = Presenter::new(MockDisplay::new());
        p.pm25(12);
        p.pm10(34);
        p.aqi(51);
        p.smoke_aqi(999);

        let w = &p.display.writes;
        assert_eq!(w[0], ("PM2.5   12".into(), 0, 4));
        assert_eq!(w[1], ("PM10    34".into(), 0, 5));
        assert_eq!(w[2], ("AQI  51".into(), 0, 6));
        assert_eq!(w[3], ("SMK 999".into(), 9, 6));
        // AQI ends at column 7, smoke AQI starts at column 9
        assert!(w[2].0.len() < w[3].1 as usize);
    }

    #[test]
    fn test_low_battery_blanks_same_footprint() {
        let mut p = Presenter::new(MockDisplay::new());
        p.low_battery(true);
        let (on_text, on_col, on_row) = last(&p).clone();
        assert_eq!(on_text, "LOW BAT");

        p.low_battery(false);
        let (off_text, off_col, off_row) = last(&p).clone();
        assert_eq!(off_text.trim(), "");
        assert_eq!(off_text.len(), on_text.len());
        assert_eq!((off_col, off_row), (on_col, on_row));
    }
}
