//! PMS5003 particulate sensor adapter (UART, 9600 baud).
//!
//! The sensor streams one 32-byte frame per completed measurement (roughly
//! every second in active mode). `next_reading` suspends on the UART until a
//! valid frame arrives, which is what makes the particulate task event-driven
//! rather than timer-driven.

use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{Async, UartRx};

use airmon_pico2::sensors::{ParticulateSensor, PmReading, SensorError};

const FRAME_MAGIC: [u8; 2] = [0x42, 0x4D];
/// Frame length after the two magic bytes.
const BODY_LEN: usize = 30;

pub struct Pms5003<'d> {
    rx: UartRx<'d, UART0, Async>,
}

impl<'d> Pms5003<'d> {
    pub fn new(rx: UartRx<'d, UART0, Async>) -> Self { Self { rx } }

    async fn read_byte(&mut self) -> Result<u8, SensorError> {
        let mut byte = [0u8; 1];
        self.rx
            .read(&mut byte)
            .await
            .map_err(|_| SensorError::Bus)?;
        Ok(byte[0])
    }
}

impl ParticulateSensor for Pms5003<'_> {
    async fn next_reading(&mut self) -> Result<PmReading, SensorError> {
        // Resync on the frame header byte-by-byte; the stream may start
        // mid-frame after power-up
        loop {
            if self.read_byte().await? != FRAME_MAGIC[0] {
                continue;
            }
            if self.read_byte().await? == FRAME_MAGIC[1] {
                break;
            }
        }

        let mut body = [0u8; BODY_LEN];
        self.rx
            .read(&mut body)
            .await
            .map_err(|_| SensorError::Bus)?;

        // Checksum is the byte sum of the whole frame up to the checksum word
        let mut sum = u32::from(FRAME_MAGIC[0]) + u32::from(FRAME_MAGIC[1]);
        for byte in &body[..BODY_LEN - 2] {
            sum += u32::from(*byte);
        }
        let expected = u16::from_be_bytes([body[BODY_LEN - 2], body[BODY_LEN - 1]]);
        if sum as u16 != expected {
            return Err(SensorError::Checksum);
        }

        // body[0..2] is the frame length word; data words follow.
        // Atmospheric-environment concentrations sit at words 4..7.
        let word = |i: usize| u16::from_be_bytes([body[i], body[i + 1]]);
        Ok(PmReading {
            pm25_env: word(10),
            pm10_env: word(12),
        })
    }
}
