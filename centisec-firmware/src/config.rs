//! Board configuration
//!
//! `stopwatch.toml` is compiled into the firmware. build.rs runs this same
//! parser over the file and fails the build if it errors or reads a value
//! differently from the `toml` crate, so the fallback below is not expected
//! to trigger.

use defmt::*;

use centisec_core::config::{parse_config, BoardConfig};

/// Embedded configuration (compiled into firmware)
/// Edit stopwatch.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../stopwatch.toml");

/// Load the embedded configuration, falling back to defaults
pub fn load() -> BoardConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            warn!("Failed to parse embedded config: {}", e);
            warn!("Using default configuration");
            BoardConfig::default()
        }
    };

    info!(
        "Board '{}': dwell={}us ({}us/tick), overflow={}, blanking={}",
        config.name.as_str(),
        config.stopwatch.dwell_us,
        config.stopwatch.refresh_period_us(),
        config.stopwatch.overflow,
        config.stopwatch.blank_between_digits
    );

    config
}
