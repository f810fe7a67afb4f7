//! Air Quality Monitor Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Samples four independent sensors on their own cadences, renders derived
//! values on an SSD1306 text grid, and drives an RGB LED + buzzer alarm with
//! hysteresis when air quality degrades.
//!
//! # Architecture
//!
//! A fixed set of Embassy tasks is spawned once at startup, one per sampling
//! loop plus the two alert output tasks and a heartbeat. Tasks share state
//! (latest readings, alert controller, presenter) through blocking mutexes
//! holding short, non-awaiting critical sections; the single-threaded
//! cooperative executor guarantees everything between two awaits runs without
//! interleaving.
//!
//! # Fault policy
//!
//! Fail-fast: any sensor I/O failure panics, `panic-probe` reports it over
//! defmt, and the core halts with the display frozen at its last rendered
//! state. A power-cycle is the recovery path.
//!
//! # Host builds
//!
//! On non-ARM targets this binary compiles to an empty stub so `cargo test`
//! can run the library's host tests; all firmware modules are ARM-gated.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (hardware adapters and Embassy tasks)
#[cfg(target_arch = "arm")]
mod drivers;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
mod firmware {
    use core::cell::RefCell;

    use defmt::info;
    use embassy_executor::Spawner;
    use embassy_rp::adc::{self, Adc, Channel};
    use embassy_rp::bind_interrupts;
    use embassy_rp::gpio::{Flex, Level, Output, Pull};
    use embassy_rp::i2c::{self, I2c};
    use embassy_rp::peripherals::UART0;
    use embassy_rp::pwm::Pwm;
    use embassy_rp::uart::{self, UartRx};
    use embassy_sync::blocking_mutex::Mutex;
    use static_cell::StaticCell;
    use {defmt_rtt as _, panic_probe as _};

    use airmon_pico2::alert::{self, SharedAlert};
    use airmon_pico2::presenter::Presenter;
    use airmon_pico2::readings::{self, SharedReadings};

    use crate::drivers::{
        AlertLed,
        BatteryVsys,
        Dht22,
        Oled,
        Pms5003,
        PwmBuzzer,
        Scd30,
        SharedPresenter,
    };
    use crate::tasks::{
        battery_task,
        beep_task,
        climate_task,
        co2_task,
        heartbeat_task,
        led_blink_task,
        particulate_task,
    };

    bind_interrupts!(struct Irqs {
        ADC_IRQ_FIFO => adc::InterruptHandler;
        UART0_IRQ => uart::InterruptHandler<UART0>;
    });

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"airmon-pico2"),
        embassy_rp::binary_info::rp_program_description!(c"Air quality monitor on SSD1306"),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    // Process-wide shared state: created once, handed to tasks by reference,
    // mutated in place until power-off
    static READINGS: SharedReadings = readings::shared();
    static ALERT: SharedAlert = alert::shared();
    static PRESENTER: StaticCell<SharedPresenter> = StaticCell::new();

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("Air monitor starting...");
        let p = embassy_rp::init(Default::default());

        // Display on I2C1 (GPIO2 SDA / GPIO3 SCL)
        let display_i2c = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, i2c::Config::default());
        let mut presenter = Presenter::new(Oled::new(display_i2c));
        presenter.title();
        let presenter: &'static SharedPresenter =
            PRESENTER.init(Mutex::new(RefCell::new(presenter)));
        info!("Display initialized");

        // Climate sensor data line on GPIO6
        let dht = Dht22::new(Flex::new(p.PIN_6));

        // Particulate sensor on UART0 RX (GPIO1), 9600 baud
        let mut uart_cfg = uart::Config::default();
        uart_cfg.baudrate = 9600;
        let pms = Pms5003::new(UartRx::new(p.UART0, p.PIN_1, Irqs, p.DMA_CH0, uart_cfg));

        // CO2 sensor on I2C0 (GPIO4 SDA / GPIO5 SCL)
        let co2_i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
        let scd = Scd30::new(co2_i2c).expect("co2 sensor init failed");

        // Battery sense through the VSYS divider (GPIO29)
        let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
        let battery = BatteryVsys::new(adc, Channel::new_pin(p.PIN_29, Pull::None));

        // Status LED on GPIO26/27/28 (common anode), buzzer on GPIO16
        let led = AlertLed::new(
            Pwm::new_output_ab(p.PWM_SLICE5, p.PIN_26, p.PIN_27, AlertLed::led_config()),
            Pwm::new_output_a(p.PWM_SLICE6, p.PIN_28, AlertLed::led_config()),
        );
        let buzzer =
            PwmBuzzer::new(Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, PwmBuzzer::buzzer_config()));

        // Onboard LED for the heartbeat
        let onboard_led = Output::new(p.PIN_25, Level::Low);

        // The task set is fixed here; nothing is spawned later and nothing
        // ever terminates
        spawner.spawn(climate_task(dht, &READINGS, presenter)).unwrap();
        spawner
            .spawn(particulate_task(pms, &READINGS, presenter, &ALERT))
            .unwrap();
        spawner.spawn(co2_task(scd, &READINGS, presenter)).unwrap();
        spawner.spawn(battery_task(battery, &READINGS, presenter)).unwrap();
        spawner.spawn(led_blink_task(led, &ALERT)).unwrap();
        spawner.spawn(beep_task(buzzer, &ALERT)).unwrap();
        spawner.spawn(heartbeat_task(onboard_led)).unwrap();
        info!("All tasks spawned");
    }
}

// On the host this binary is a stub; the testable logic lives in the library
#[cfg(not(target_arch = "arm"))]
fn main() {}
