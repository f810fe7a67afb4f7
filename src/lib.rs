//! Air monitor library - testable modules for the air quality monitor.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code:
//! Embassy tasks, sensor bus adapters, and display glue.
//!
//! # Concurrency model
//!
//! The firmware runs a fixed set of tasks on a single-threaded cooperative
//! executor. Tasks suspend only at explicit await points; between two awaits a
//! task runs without interleaving, which is the only concurrency guarantee in
//! the system. Shared state ([`readings::SharedReadings`],
//! [`alert::SharedAlert`]) is therefore held behind short, non-awaiting
//! critical sections: a reader may observe another task's state from before or
//! after that task's latest update (last-writer-wins per field), but never a
//! torn value.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(async_fn_in_trait)] // single-executor firmware, no Send bounds wanted
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Host tests lock the shared-state mutexes, which needs a critical-section
// implementation; the std one comes from the dev-dependency
#[cfg(test)]
use critical_section as _;

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Derived metrics
pub mod aqi;
pub mod filter;
pub mod metrics;

// Shared state and alerting
pub mod alert;
pub mod readings;

// External collaborator interfaces and presentation
pub mod presenter;
pub mod sensors;
