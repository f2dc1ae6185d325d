//! Wirecube - rotating wireframe cube
//!
//! RP2040 firmware driving a 240x320 ILI9341 over SPI0. Each frame draws
//! the cube edges in the foreground colour and immediately erases them,
//! so only the lines being drawn ever touch the bus.
//!
//! Wiring:
//! - SCK GPIO18, MOSI GPIO19, MISO GPIO16
//! - CS GPIO17, DC GPIO20, RST GPIO21
//! - Backlight GPIO22

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Phase, Polarity, Spi};
use embassy_time::{Delay, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use wirecube_core::{Animation, Renderer, SceneConfig, Surface};
use wirecube_drivers::display::Ili9341;

/// SPI clock for the panel
const SPI_FREQUENCY_HZ: u32 = 10_000_000;

/// Frames between timing reports
const REPORT_INTERVAL: u32 = 100;

/// Pause before retrying after a failed frame
const ERROR_BACKOFF_MS: u64 = 250;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Wirecube firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Mode 3: clock idles high, data sampled on the rising (second) edge
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    spi_config.phase = Phase::CaptureOnSecondTransition;
    spi_config.polarity = Polarity::IdleHigh;
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config);

    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::High);
    let rst = Output::new(p.PIN_21, Level::High);
    let _backlight = Output::new(p.PIN_22, Level::High);

    let config = SceneConfig::default();
    let mut lcd = Ili9341::new(spi, dc, cs, rst);

    unwrap!(lcd.init(&mut Delay));
    info!("ILI9341 initialized");

    unwrap!(lcd.set_orientation(config.orientation));
    unwrap!(lcd.clear(config.background));
    info!(
        "Display {}x{}, orientation {}",
        lcd.width(),
        lcd.height(),
        config.orientation
    );

    let renderer = Renderer::new(lcd.width(), lcd.height(), &config);
    let mut animation = Animation::from_config(&config);
    debug!("Scene: {}", config);

    let mut frames: u32 = 0;
    let mut window_start = Instant::now();

    loop {
        if let Err(e) = animation.frame(&mut lcd, &renderer, config.foreground, config.background)
        {
            error!("Frame failed: {}", e);
            Timer::after_millis(ERROR_BACKOFF_MS).await;
            continue;
        }

        frames = frames.wrapping_add(1);
        if frames % REPORT_INTERVAL == 0 {
            let elapsed = window_start.elapsed().as_millis();
            info!(
                "{} frames, {} ms/frame, theta={}",
                frames,
                elapsed / REPORT_INTERVAL as u64,
                animation.theta()
            );
            if elapsed / (REPORT_INTERVAL as u64) > 200 {
                warn!("Frame time above 200 ms, check SPI clock");
            }
            window_start = Instant::now();
        }
    }
}
