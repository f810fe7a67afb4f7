//! Battery sense adapter: VSYS voltage through the onboard 3:1 divider.

use embassy_rp::adc::{Adc, Async, Channel};

use airmon_pico2::sensors::{BatteryAdc, SensorError};

pub struct BatteryVsys<'d> {
    adc: Adc<'d, Async>,
    channel: Channel<'d>,
}

impl<'d> BatteryVsys<'d> {
    pub fn new(adc: Adc<'d, Async>, channel: Channel<'d>) -> Self { Self { adc, channel } }
}

impl BatteryAdc for BatteryVsys<'_> {
    async fn read_raw(&mut self) -> Result<u16, SensorError> {
        self.adc
            .read(&mut self.channel)
            .await
            .map_err(|_| SensorError::Bus)
    }
}
