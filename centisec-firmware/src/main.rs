//! Centisec - 4-digit stopwatch firmware
//!
//! Main firmware binary for RP2040 boards driving a multiplexed 4-digit
//! 7-segment display with start, stop and reset buttons.
//!
//! Named after the centisecond: the display counts in hundredths of a
//! second, one per full refresh.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Centisec firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    let (display, buttons) = board::init(p, &config.buttons);

    spawner.spawn(unwrap!(tasks::stopwatch_task(
        display,
        buttons,
        config.stopwatch
    )));

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
