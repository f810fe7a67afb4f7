//! Alert controller: alarm hysteresis, LED blink state, and beep sequencing.
//!
//! The controller is fed the smoke AQI on every particulate update. Two
//! independent outputs are derived from it:
//!
//! - the status LED target color and blink mode, straight from the AQI level
//!   bucket on every update, and
//! - the audible alarm, through a dual-threshold (hysteresis) state machine
//!   so the buzzer cannot chatter when the index hovers near one boundary.
//!
//! The LED toggle and the beep pattern each run under their own periodic
//! task in the binary; the state machines here only decide what those tasks
//! should do next.

use crate::aqi::AqiLevel;
use crate::config::{
    ALARM_DISABLE_AQI,
    ALARM_ENABLE_AQI,
    BEEP_COUNT,
    BEEP_FREQ_HZ,
    BEEP_IDLE_POLL_MS,
    BEEP_ON_MS,
    BEEP_PAUSE_MS,
    LED_BRIGHTNESS,
    LED_COMMON_ANODE,
};

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

// =============================================================================
// Beep Sequence
// =============================================================================

/// What the buzzer task should do next, and for how long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeepAction {
    /// Sound the tone at `freq_hz` for `ms` milliseconds.
    Tone { freq_hz: u16, ms: u64 },
    /// Stay silent for `ms` milliseconds (the gap inside a beep cycle).
    Silence { ms: u64 },
    /// Nothing to play; check back in `ms` milliseconds.
    Idle { ms: u64 },
}

/// Beep pattern state machine: a fixed number of tone/pause cycles.
///
/// One beep is one tone phase followed by one pause phase; the remaining-beep
/// counter decrements once per completed cycle. At zero the sequence idles
/// (cheap poll) until [`BeepSequence::arm`] reloads the counter.
pub struct BeepSequence {
    freq_hz: u16,
    on_ms: u64,
    pause_ms: u64,
    remaining: u16,
    in_pause: bool,
}

impl BeepSequence {
    /// Create an idle sequence with the given tone parameters.
    pub const fn new(freq_hz: u16, on_ms: u64, pause_ms: u64) -> Self {
        Self {
            freq_hz,
            on_ms,
            pause_ms,
            remaining: 0,
            in_pause: false,
        }
    }

    /// Start (or restart) the pattern with `beeps` cycles.
    pub fn arm(&mut self, beeps: u16) {
        self.remaining = beeps;
        self.in_pause = false;
    }

    /// Advance the state machine and return the next action for the buzzer
    /// task to execute.
    pub fn next_action(&mut self) -> BeepAction {
        if self.remaining == 0 {
            return BeepAction::Idle { ms: BEEP_IDLE_POLL_MS };
        }

        if self.in_pause {
            self.in_pause = false;
            self.remaining -= 1;
            BeepAction::Silence { ms: self.pause_ms }
        } else {
            self.in_pause = true;
            BeepAction::Tone {
                freq_hz: self.freq_hz,
                ms: self.on_ms,
            }
        }
    }

    /// Beep cycles left to play.
    pub const fn remaining(&self) -> u16 { self.remaining }

    /// True when the pattern has drained and the task is just polling.
    pub const fn is_idle(&self) -> bool { self.remaining == 0 }
}

// =============================================================================
// LED Blink State
// =============================================================================

/// Status LED state: target color, blink mode, and the on/off phase.
///
/// The phase only advances while blinking is active; steady levels pin the
/// LED on so a level change never leaves it stuck dark.
pub struct BlinkState {
    color: (u8, u8, u8),
    blink: bool,
    phase_on: bool,
}

impl BlinkState {
    pub const fn new() -> Self {
        Self {
            color: (0, 0, 0),
            blink: false,
            phase_on: true,
        }
    }

    /// Set the target color and whether it should blink.
    pub fn set_target(&mut self, color: (u8, u8, u8), blink: bool) {
        self.color = color;
        self.blink = blink;
        if !blink {
            self.phase_on = true;
        }
    }

    /// Advance one blink interval and return the color to show now.
    /// Called by the LED task at a fixed period.
    pub fn tick(&mut self) -> (u8, u8, u8) {
        if self.blink {
            self.phase_on = !self.phase_on;
        }
        self.output()
    }

    /// Color for the current phase: the target color, or off.
    pub const fn output(&self) -> (u8, u8, u8) {
        if self.phase_on { self.color } else { (0, 0, 0) }
    }
}

impl Default for BlinkState {
    fn default() -> Self { Self::new() }
}

/// Convert one raw color channel to a PWM duty value: scale by the configured
/// brightness, then invert for common-anode wiring (255 - raw*brightness).
pub fn channel_duty(raw: u8) -> u8 {
    let scaled = libm::roundf(f32::from(raw) * LED_BRIGHTNESS) as u8;
    if LED_COMMON_ANODE { 255 - scaled } else { scaled }
}

// =============================================================================
// Output Device Interfaces
// =============================================================================

/// Interface to the external status LED driver. Channels are raw color
/// values; the driver applies [`channel_duty`] before its PWM registers.
pub trait RgbLed {
    fn set_rgb(&mut self, r: u8, g: u8, b: u8);
}

/// Interface to the external buzzer driver.
pub trait Buzzer {
    /// Start sounding at the given frequency until told otherwise.
    fn tone(&mut self, freq_hz: u16);
    /// Stop sounding.
    fn silence(&mut self);
}

// =============================================================================
// Alert Controller
// =============================================================================

/// Alarm state transition reported by [`AlertController::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlarmEvent {
    /// The smoke AQI crossed the enable threshold; the beep pattern was armed.
    Engaged,
    /// The smoke AQI fell to the disable threshold; future triggers are
    /// suppressed but an in-progress beep pattern keeps playing.
    Disengaged,
}

/// Hysteresis state machine converting the smoke AQI into LED and buzzer
/// behavior.
pub struct AlertController {
    level: AqiLevel,
    alarm_on: bool,
    blink: BlinkState,
    beeps: BeepSequence,
}

impl AlertController {
    pub const fn new() -> Self {
        Self {
            level: AqiLevel::Green,
            alarm_on: false,
            blink: BlinkState::new(),
            beeps: BeepSequence::new(BEEP_FREQ_HZ, BEEP_ON_MS, BEEP_PAUSE_MS),
        }
    }

    /// Feed one smoke AQI sample. Updates the LED target unconditionally and
    /// runs the alarm hysteresis; returns the transition if one occurred.
    ///
    /// The dead band between [`ALARM_DISABLE_AQI`] and [`ALARM_ENABLE_AQI`]
    /// leaves the alarm state unchanged.
    pub fn update(&mut self, smoke_aqi: u16) -> Option<AlarmEvent> {
        let level = AqiLevel::from_index(smoke_aqi);
        self.level = level;
        self.blink.set_target(level.color(), level.blinks());

        if smoke_aqi >= ALARM_ENABLE_AQI && !self.alarm_on {
            self.alarm_on = true;
            self.beeps.arm(BEEP_COUNT);
            Some(AlarmEvent::Engaged)
        } else if smoke_aqi <= ALARM_DISABLE_AQI && self.alarm_on {
            self.alarm_on = false;
            Some(AlarmEvent::Disengaged)
        } else {
            None
        }
    }

    /// Current AQI level bucket.
    pub const fn level(&self) -> AqiLevel { self.level }

    /// Whether the alarm is currently engaged.
    pub const fn alarm_on(&self) -> bool { self.alarm_on }

    /// LED blink state, for the LED task.
    pub fn blink_mut(&mut self) -> &mut BlinkState { &mut self.blink }

    /// Beep sequence, for the buzzer task.
    pub fn beeps_mut(&mut self) -> &mut BeepSequence { &mut self.beeps }
}

impl Default for AlertController {
    fn default() -> Self { Self::new() }
}

/// Process-wide shared alert controller.
pub type SharedAlert = Mutex<CriticalSectionRawMutex, RefCell<AlertController>>;

/// Create the shared controller. Intended for a `static` in the binary.
pub const fn shared() -> SharedAlert { Mutex::new(RefCell::new(AlertController::new())) }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BEEP_COUNT, BEEP_FREQ_HZ, BEEP_IDLE_POLL_MS, BEEP_ON_MS, BEEP_PAUSE_MS};

    #[test]
    fn test_hysteresis_transition_sequence() {
        let mut alert = AlertController::new();

        // Transitions occur exactly at the 85 (off->on) and 45 (on->off)
        // samples; everything inside the dead band changes nothing.
        assert_eq!(alert.update(70), None);
        assert_eq!(alert.update(85), Some(AlarmEvent::Engaged));
        assert_eq!(alert.update(60), None);
        assert_eq!(alert.update(45), Some(AlarmEvent::Disengaged));
        assert_eq!(alert.update(65), None);
        assert!(!alert.alarm_on());
    }

    #[test]
    fn test_enable_threshold_is_inclusive() {
        let mut alert = AlertController::new();
        assert_eq!(alert.update(79), None);
        assert_eq!(alert.update(80), Some(AlarmEvent::Engaged));
    }

    #[test]
    fn test_disable_threshold_is_inclusive() {
        let mut alert = AlertController::new();
        alert.update(90);
        assert_eq!(alert.update(51), None);
        assert_eq!(alert.update(50), Some(AlarmEvent::Disengaged));
    }

    #[test]
    fn test_engage_arms_beep_pattern() {
        let mut alert = AlertController::new();
        assert!(alert.beeps_mut().is_idle());

        alert.update(120);
        assert_eq!(alert.beeps_mut().remaining(), BEEP_COUNT);
    }

    #[test]
    fn test_disengage_does_not_cut_off_beeps() {
        let mut alert = AlertController::new();
        alert.update(120);
        alert.update(40);

        // Alarm is off, but the armed pattern keeps its remaining cycles
        assert!(!alert.alarm_on());
        assert_eq!(alert.beeps_mut().remaining(), BEEP_COUNT);
    }

    #[test]
    fn test_no_retrigger_while_alarm_stays_on() {
        let mut alert = AlertController::new();
        alert.update(120);
        for _ in 0..10 {
            alert.beeps_mut().next_action();
        }
        let drained = alert.beeps_mut().remaining();

        // Staying above the enable threshold must not re-arm the pattern
        assert_eq!(alert.update(150), None);
        assert_eq!(alert.beeps_mut().remaining(), drained);
    }

    #[test]
    fn test_level_follows_every_update() {
        let mut alert = AlertController::new();
        alert.update(65);
        assert_eq!(alert.level(), AqiLevel::Yellow);
        alert.update(320);
        assert_eq!(alert.level(), AqiLevel::Maroon);
    }

    #[test]
    fn test_beep_sequence_cycle_accounting() {
        let mut beeps = BeepSequence::new(BEEP_FREQ_HZ, BEEP_ON_MS, BEEP_PAUSE_MS);
        beeps.arm(2);

        assert_eq!(
            beeps.next_action(),
            BeepAction::Tone { freq_hz: BEEP_FREQ_HZ, ms: BEEP_ON_MS }
        );
        assert_eq!(beeps.remaining(), 2, "counter decrements on cycle completion, not tone start");
        assert_eq!(beeps.next_action(), BeepAction::Silence { ms: BEEP_PAUSE_MS });
        assert_eq!(beeps.remaining(), 1);

        beeps.next_action();
        beeps.next_action();
        assert!(beeps.is_idle());
        assert_eq!(beeps.next_action(), BeepAction::Idle { ms: BEEP_IDLE_POLL_MS });
    }

    #[test]
    fn test_rearm_restarts_from_tone_phase() {
        let mut beeps = BeepSequence::new(BEEP_FREQ_HZ, BEEP_ON_MS, BEEP_PAUSE_MS);
        beeps.arm(1);
        beeps.next_action(); // tone; now mid-cycle
        beeps.arm(3);

        assert!(matches!(beeps.next_action(), BeepAction::Tone { .. }));
        assert_eq!(beeps.remaining(), 3);
    }

    #[test]
    fn test_blink_toggles_only_when_blinking() {
        let mut blink = BlinkState::new();
        blink.set_target((255, 0, 0), false);
        assert_eq!(blink.tick(), (255, 0, 0));
        assert_eq!(blink.tick(), (255, 0, 0));

        blink.set_target((126, 0, 35), true);
        assert_eq!(blink.tick(), (0, 0, 0));
        assert_eq!(blink.tick(), (126, 0, 35));
        assert_eq!(blink.tick(), (0, 0, 0));
    }

    #[test]
    fn test_steady_target_forces_phase_on() {
        let mut blink = BlinkState::new();
        blink.set_target((143, 63, 151), true);
        blink.tick(); // now in the off phase

        // Dropping back to a steady level must turn the LED on immediately
        blink.set_target((0, 228, 0), false);
        assert_eq!(blink.output(), (0, 228, 0));
    }

    #[test]
    fn test_channel_duty_common_anode_inversion() {
        // LED_BRIGHTNESS = 0.25, common anode: duty = 255 - round(raw * 0.25)
        assert_eq!(channel_duty(0), 255);
        assert_eq!(channel_duty(200), 255 - 50);
        assert_eq!(channel_duty(255), 255 - 64);
    }

    #[test]
    fn test_shared_controller_roundtrip() {
        let alert = shared();
        let event = alert.lock(|cell| cell.borrow_mut().update(95));
        assert_eq!(event, Some(AlarmEvent::Engaged));
        assert!(alert.lock(|cell| cell.borrow().alarm_on()));
    }
}
