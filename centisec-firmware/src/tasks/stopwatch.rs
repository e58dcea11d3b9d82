//! Stopwatch task
//!
//! Owns the stopwatch and both pin banks. Each cycle refreshes the display
//! once, advances the counter and samples the buttons, so the display
//! refresh period is also the counting period.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Delay;

use centisec_core::config::StopwatchConfig;
use centisec_core::stopwatch::Stopwatch;
use centisec_drivers::HalDelay;

use crate::board::{Buttons, Display};

/// Stopwatch task - runs the refresh/tick/poll cycle forever
#[embassy_executor::task]
pub async fn stopwatch_task(mut display: Display, mut buttons: Buttons, config: StopwatchConfig) {
    info!(
        "Stopwatch task started ({}us per tick)",
        config.refresh_period_us()
    );

    let mut stopwatch: Stopwatch = Stopwatch::new(&config);
    let mut delay = HalDelay::new(Delay);

    loop {
        for transition in stopwatch.cycle(&mut display, &mut buttons, &mut delay) {
            info!(
                "{}: {} -> {} at {}.{:02} s",
                transition.event,
                transition.from,
                transition.to,
                transition.elapsed.seconds(),
                transition.elapsed.hundredths()
            );
        }

        // Digit dwell is a blocking delay; let other tasks in between cycles
        yield_now().await;
    }
}
