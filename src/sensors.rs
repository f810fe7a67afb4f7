//! Interfaces to the external sensor drivers.
//!
//! The wire protocols (one-wire, I2C, UART) live behind these traits; the
//! binary provides the bus adapters. Sampling tasks are written against the
//! traits only, which is also what lets the protocol logic be exercised on
//! the host.
//!
//! Errors are not recovered locally: a sampling task that receives a
//! [`SensorError`] treats it as fatal (fail-fast, whole-process).

/// Sensor I/O failure. Always fatal to the process once it reaches a
/// sampling task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorError {
    /// Bus-level failure (no ack, framing error, wire timeout).
    Bus,
    /// The sensor did not produce a reading within its protocol deadline.
    Timeout,
    /// A frame or word arrived with a bad checksum.
    Checksum,
}

/// One temperature/humidity measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

/// One particulate measurement, standard-environment concentrations in µg/m³.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PmReading {
    pub pm25_env: u16,
    pub pm10_env: u16,
}

/// One CO2 measurement. The sensor also reports its own temperature and
/// humidity alongside the gas concentration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Co2Reading {
    pub co2_ppm: u16,
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

/// Temperature/humidity sensor: one blocking measurement per call.
pub trait ClimateSensor {
    async fn measure(&mut self) -> Result<ClimateReading, SensorError>;
}

/// Particulate sensor, push model: `next_reading` suspends until the sensor
/// delivers a completed measurement. There is no fixed sampling period; the
/// sensor sets the pace.
pub trait ParticulateSensor {
    async fn next_reading(&mut self) -> Result<PmReading, SensorError>;
}

/// CO2 sensor with a data-ready flag polled ahead of each read.
pub trait Co2Sensor {
    /// Whether a completed measurement is waiting to be read.
    async fn data_ready(&mut self) -> Result<bool, SensorError>;

    /// Read the waiting measurement. Only valid after `data_ready`
    /// reported true.
    async fn read_measurement(&mut self) -> Result<Co2Reading, SensorError>;
}

/// Battery voltage sense input: raw ADC counts. Conversion constants live in
/// [`crate::config`].
pub trait BatteryAdc {
    async fn read_raw(&mut self) -> Result<u16, SensorError>;
}
