//! Build script for centisec-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates stopwatch.toml at compile time, with the `toml` crate and
//!   with the parser the firmware runs at boot

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use centisec_core::config::{parse_config, BoardConfig, OverflowPolicy};
use serde::Deserialize;

/// Dwell range accepted by the core (µs)
const MIN_DWELL_US: u32 = 100;
const MAX_DWELL_US: u32 = 10_000;

/// Longest board name the core can hold
const MAX_NAME_LEN: usize = 16;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StopwatchToml {
    board: Option<BoardSection>,
    display: Option<DisplaySection>,
    counter: Option<CounterSection>,
    buttons: Option<ButtonsSection>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardSection {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplaySection {
    dwell_us: Option<u32>,
    blank_between_digits: Option<bool>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CounterSection {
    overflow: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ButtonsSection {
    active_low: Option<bool>,
}

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate stopwatch.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=stopwatch.toml");

    let config_path = Path::new("stopwatch.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: stopwatch.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds stopwatch.toml from the                     ║\n\
            ║  centisec-firmware directory. Please create one.                 ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read stopwatch.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax and reject unknown sections/keys
    let config: StopwatchToml = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid stopwatch.toml                                   ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = validate_values(&config);
    if errors.is_empty() {
        errors = check_runtime_parse(&config_content, &config);
    }
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in stopwatch.toml                         ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=stopwatch.toml validated successfully");
}

/// Check value ranges the TOML types alone do not capture
fn validate_values(config: &StopwatchToml) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(name) = config.board.as_ref().and_then(|b| b.name.as_ref()) {
        if name.len() > MAX_NAME_LEN {
            errors.push(format!(
                "[board] name must be at most {} bytes",
                MAX_NAME_LEN
            ));
        }
    }

    if let Some(dwell) = config.display.as_ref().and_then(|d| d.dwell_us) {
        if !(MIN_DWELL_US..=MAX_DWELL_US).contains(&dwell) {
            errors.push(format!(
                "[display] dwell_us must be {}-{}",
                MIN_DWELL_US, MAX_DWELL_US
            ));
        }
    }

    if let Some(overflow) = config.counter.as_ref().and_then(|c| c.overflow.as_ref()) {
        if !["wrap", "saturate"].contains(&overflow.as_str()) {
            errors.push("[counter] overflow must be 'wrap' or 'saturate'".to_string());
        }
    }

    errors
}

/// Check the on-target parser reads the file the same way `toml` does
///
/// A file the firmware cannot parse would otherwise boot with defaults.
fn check_runtime_parse(content: &str, config: &StopwatchToml) -> Vec<String> {
    let parsed = match parse_config(content) {
        Ok(parsed) => parsed,
        Err(e) => {
            return vec![format!(
                "firmware parser rejects this file ({:?}); use plain values",
                e
            )]
        }
    };

    let mut errors = Vec::new();
    let expected = BoardConfig::default();

    let name = config.board.as_ref().and_then(|b| b.name.as_deref());
    if parsed.name.as_str() != name.unwrap_or(expected.name.as_str()) {
        errors.push("[board] name reads differently on the firmware".to_string());
    }

    let display = config.display.as_ref();
    let dwell = display.and_then(|d| d.dwell_us);
    if parsed.stopwatch.dwell_us != dwell.unwrap_or(expected.stopwatch.dwell_us) {
        errors.push("[display] dwell_us reads differently on the firmware".to_string());
    }
    let blank = display.and_then(|d| d.blank_between_digits);
    if parsed.stopwatch.blank_between_digits
        != blank.unwrap_or(expected.stopwatch.blank_between_digits)
    {
        errors.push("[display] blank_between_digits reads differently on the firmware".to_string());
    }

    let overflow = match config.counter.as_ref().and_then(|c| c.overflow.as_deref()) {
        Some("saturate") => OverflowPolicy::Saturate,
        Some(_) => OverflowPolicy::Wrap,
        None => expected.stopwatch.overflow,
    };
    if parsed.stopwatch.overflow != overflow {
        errors.push("[counter] overflow reads differently on the firmware".to_string());
    }

    let active_low = config.buttons.as_ref().and_then(|b| b.active_low);
    if parsed.buttons.active_low != active_low.unwrap_or(expected.buttons.active_low) {
        errors.push("[buttons] active_low reads differently on the firmware".to_string());
    }

    errors
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            // Cut on a char boundary; toml errors quote the input
            let truncated = match line.char_indices().nth(61) {
                Some((cut, _)) if line.chars().count() > 64 => {
                    format!("{}...", &line[..cut])
                }
                _ => line.to_string(),
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
