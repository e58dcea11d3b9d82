//! Board-agnostic core logic for the stopwatch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (segment/select ports, buttons, delay)
//! - Sample-window button debouncing
//! - Digit decomposition and display multiplexing
//! - Start/stop/reset state machine
//! - The stopwatch controller that ties them together
//! - Configuration type definitions and parsing

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod debounce;
pub mod display;
pub mod state;
pub mod stopwatch;
pub mod traits;
