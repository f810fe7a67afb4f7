//! Async tasks for the monitor firmware.
//!
//! One Embassy task per sampling loop, plus the two alert output tasks:
//! - `climate`: temperature/humidity every 2 s, derives the dewpoint
//! - `particulate`: event-driven PM sampling, derives AQI and feeds the alarm
//! - `co2`: ready-flag polling with windowed averaging
//! - `battery`: voltage/percentage every 5 s with the low-battery indicator
//! - `alert`: LED blink toggling and the buzzer beep pattern
//! - `heartbeat`: onboard LED liveness blink
//!
//! Every task is an infinite loop that only suspends at explicit awaits, and
//! every shared-state access is a short non-awaiting critical section. A
//! sensor failure is fatal by design: the panic is reported over defmt and
//! the process halts (microcontroller reset is the recovery path).

pub mod alert;
pub mod battery;
pub mod climate;
pub mod co2;
pub mod heartbeat;
pub mod particulate;

pub use alert::{beep_task, led_blink_task};
pub use battery::battery_task;
pub use climate::climate_task;
pub use co2::co2_task;
pub use heartbeat::heartbeat_task;
pub use particulate::particulate_task;
