//! DHT22 one-wire climate sensor adapter.
//!
//! The start pulse is awaited, but the 40-bit response frame is decoded with
//! busy-waits: pulse widths are in the tens of microseconds, far below what
//! the timer queue can resolve. The executor is blocked for the ~5 ms frame.

use embassy_rp::gpio::{Flex, Pull};
use embassy_time::{Duration, Instant, Timer};

use airmon_pico2::sensors::{ClimateReading, ClimateSensor, SensorError};

/// Longest plausible single pulse inside a frame, with margin.
const PULSE_TIMEOUT_US: u64 = 200;

/// A 1-bit holds the line high for ~70 us, a 0-bit for ~27 us.
const ONE_BIT_THRESHOLD_US: u64 = 48;

pub struct Dht22<'d> {
    pin: Flex<'d>,
}

impl<'d> Dht22<'d> {
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_as_input();
        pin.set_pull(Pull::Up);
        Self { pin }
    }

    /// Busy-wait until the line reaches `high`, returning the elapsed time.
    fn wait_for(&self, high: bool, timeout_us: u64) -> Result<u64, SensorError> {
        let start = Instant::now();
        let deadline = Duration::from_micros(timeout_us);
        loop {
            if self.pin.is_high() == high {
                return Ok(start.elapsed().as_micros());
            }
            if start.elapsed() >= deadline {
                return Err(SensorError::Timeout);
            }
        }
    }
}

impl ClimateSensor for Dht22<'_> {
    async fn measure(&mut self) -> Result<ClimateReading, SensorError> {
        // Host start signal: hold the line low >1 ms, then release
        self.pin.set_as_output();
        self.pin.set_low();
        Timer::after_millis(2).await;
        self.pin.set_as_input();
        self.pin.set_pull(Pull::Up);

        // Sensor response: ~80 us low, ~80 us high, then 40 bits
        self.wait_for(false, PULSE_TIMEOUT_US)?;
        self.wait_for(true, PULSE_TIMEOUT_US)?;
        self.wait_for(false, PULSE_TIMEOUT_US)?;

        // Each bit: ~50 us low preamble, then a high pulse whose width
        // encodes the bit value
        let mut data = [0u8; 5];
        for bit in 0..40 {
            self.wait_for(true, PULSE_TIMEOUT_US)?;
            let high_us = self.wait_for(false, PULSE_TIMEOUT_US)?;
            if high_us > ONE_BIT_THRESHOLD_US {
                data[bit / 8] |= 1 << (7 - bit % 8);
            }
        }

        let sum = data[0]
            .wrapping_add(data[1])
            .wrapping_add(data[2])
            .wrapping_add(data[3]);
        if sum != data[4] {
            return Err(SensorError::Checksum);
        }

        let humidity_raw = u16::from_be_bytes([data[0], data[1]]);
        let temperature_raw = u16::from_be_bytes([data[2] & 0x7F, data[3]]);
        let temperature_c = if data[2] & 0x80 != 0 {
            -f32::from(temperature_raw) / 10.0
        } else {
            f32::from(temperature_raw) / 10.0
        };

        Ok(ClimateReading {
            temperature_c,
            humidity_pct: f32::from(humidity_raw) / 10.0,
        })
    }
}
