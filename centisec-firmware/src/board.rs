//! Board pin assignments
//!
//! Raspberry Pi Pico wiring for a 4-digit multiplexed 7-segment display:
//!
//! | Function          | GPIO    |
//! |-------------------|---------|
//! | Segments a..g     | 0..6    |
//! | Select bits 0..3  | 7..10   |
//! | Start button      | 11      |
//! | Stop button       | 12      |
//! | Reset button      | 13      |
//!
//! Select bit 3 (GPIO10) drives the rightmost digit, bit 0 (GPIO7) the
//! leftmost.

use defmt::*;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;

use centisec_core::config::ButtonConfig;
use centisec_drivers::{ActiveLevel, GpioButtons, MultiplexedDisplay, SegmentPins, SelectPins};

/// Display wired to on-chip GPIO
pub type Display = MultiplexedDisplay<Output<'static>, Output<'static>>;

/// Buttons wired to on-chip GPIO
pub type Buttons = GpioButtons<Input<'static>>;

/// Claim the display and button pins
pub fn init(p: Peripherals, buttons: &ButtonConfig) -> (Display, Buttons) {
    let segments = SegmentPins::new(
        [
            Output::new(p.PIN_0, Level::Low),
            Output::new(p.PIN_1, Level::Low),
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_6, Level::Low),
        ],
        ActiveLevel::High,
    );

    let select = SelectPins::new(
        [
            Output::new(p.PIN_7, Level::Low),
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
            Output::new(p.PIN_10, Level::Low),
        ],
        ActiveLevel::High,
    );

    info!("Display pins initialized (segments GPIO0-6, select GPIO7-10)");

    // Pull toward the released level so a floating input reads as not pressed
    let level = ActiveLevel::from_active_low(buttons.active_low);
    let pull = match level {
        ActiveLevel::Low => Pull::Up,
        ActiveLevel::High => Pull::Down,
    };

    let buttons = GpioButtons::new(
        Input::new(p.PIN_11, pull),
        Input::new(p.PIN_12, pull),
        Input::new(p.PIN_13, pull),
        level,
    );

    info!("Button pins initialized (GPIO11-13, active {})", level);

    (MultiplexedDisplay::new(segments, select), buttons)
}
