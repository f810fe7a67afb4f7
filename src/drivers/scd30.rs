//! SCD30 CO2 sensor adapter (I2C).
//!
//! Command set from the Sensirion interface description: continuous
//! measurement is started once, then the data-ready register is polled and
//! each measurement is read as three big-endian f32 words. Every word on the
//! wire is CRC8-protected (polynomial 0x31, init 0xFF).

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;

use airmon_pico2::sensors::{Co2Reading, Co2Sensor, SensorError};

const ADDRESS: u8 = 0x61;

const CMD_START_CONT_MEASUREMENT: u16 = 0x0010;
const CMD_SET_INTERVAL: u16 = 0x4600;
const CMD_DATA_READY: u16 = 0x0202;
const CMD_READ_MEASUREMENT: u16 = 0x0300;

/// Measurement interval in seconds, pushed to the sensor at startup.
const MEASUREMENT_INTERVAL_S: u16 = 2;

fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0xFF;
    for byte in data {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 { (crc << 1) ^ 0x31 } else { crc << 1 };
        }
    }
    crc
}

pub struct Scd30<'d> {
    i2c: I2c<'d, I2C0, Blocking>,
}

impl<'d> Scd30<'d> {
    /// Configure the sensor and start continuous measurement.
    pub fn new(i2c: I2c<'d, I2C0, Blocking>) -> Result<Self, SensorError> {
        let mut sensor = Self { i2c };
        sensor.write_command(CMD_SET_INTERVAL, Some(MEASUREMENT_INTERVAL_S))?;
        // Argument 0 = no ambient pressure compensation
        sensor.write_command(CMD_START_CONT_MEASUREMENT, Some(0))?;
        Ok(sensor)
    }

    fn write_command(&mut self, command: u16, argument: Option<u16>) -> Result<(), SensorError> {
        let cmd = command.to_be_bytes();
        match argument {
            Some(value) => {
                let arg = value.to_be_bytes();
                let buf = [cmd[0], cmd[1], arg[0], arg[1], crc8(&arg)];
                self.i2c.blocking_write(ADDRESS, &buf)
            }
            None => self.i2c.blocking_write(ADDRESS, &cmd),
        }
        .map_err(|_| SensorError::Bus)
    }

    fn read_words(&mut self, command: u16, out: &mut [u8]) -> Result<(), SensorError> {
        self.write_command(command, None)?;
        self.i2c
            .blocking_read(ADDRESS, out)
            .map_err(|_| SensorError::Bus)?;

        // Every 2-byte word is followed by its CRC
        for chunk in out.chunks_exact(3) {
            if crc8(&chunk[..2]) != chunk[2] {
                return Err(SensorError::Checksum);
            }
        }
        Ok(())
    }

    /// Reassemble an f32 from two CRC-framed words starting at `offset`.
    fn word_f32(buf: &[u8], offset: usize) -> f32 {
        f32::from_be_bytes([buf[offset], buf[offset + 1], buf[offset + 3], buf[offset + 4]])
    }
}

impl Co2Sensor for Scd30<'_> {
    async fn data_ready(&mut self) -> Result<bool, SensorError> {
        let mut buf = [0u8; 3];
        self.read_words(CMD_DATA_READY, &mut buf)?;
        Ok(u16::from_be_bytes([buf[0], buf[1]]) == 1)
    }

    async fn read_measurement(&mut self) -> Result<Co2Reading, SensorError> {
        // Three f32 values, each split into two CRC-framed words
        let mut buf = [0u8; 18];
        self.read_words(CMD_READ_MEASUREMENT, &mut buf)?;

        let co2 = Self::word_f32(&buf, 0);
        let temperature_c = Self::word_f32(&buf, 6);
        let humidity_pct = Self::word_f32(&buf, 12);

        Ok(Co2Reading {
            co2_ppm: co2 as u16,
            temperature_c,
            humidity_pct,
        })
    }
}
