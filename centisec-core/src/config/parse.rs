//! Simple TOML parser for board configuration
//!
//! Handles only the subset used by `stopwatch.toml`; the full file is
//! validated with the real `toml` crate at build time.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Basic (`"..."`) and literal (`'...'`) strings
//! - Integers with `_` digit separators
//! - [section] headers
//! - Comments (# ...), including after headers and values
//!
//! NOT supported:
//! - Dotted section names and quoted keys
//! - Escape sequences in basic strings
//! - Arrays and inline tables
//! - Multi-line strings

use heapless::String;

use super::types::{BoardConfig, OverflowPolicy, MAX_NAME_LEN};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not recognized in its section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Board,
    Display,
    Counter,
    Buttons,
}

/// Parse TOML configuration into a [`BoardConfig`]
///
/// Keys that are absent keep their default values.
pub fn parse_config(input: &str) -> Result<BoardConfig, ParseError> {
    let mut config = BoardConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line.trim());

        // Skip empty lines and comment-only lines
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = header.strip_suffix(']').ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    if !config.stopwatch.is_valid() {
        return Err(ParseError::InvalidValue);
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "board" => Ok(Section::Board),
        "display" => Ok(Section::Display),
        "counter" => Ok(Section::Counter),
        "buttons" => Ok(Section::Buttons),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Drop a trailing `# comment`; a `#` inside a quoted string is kept
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    let mut escaped = false;

    for (pos, c) in line.char_indices() {
        match quote {
            None if c == '#' => return line[..pos].trim_end(),
            None if c == '"' || c == '\'' => quote = Some(c),
            None => {}
            // Only basic strings have escapes
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
        }
    }

    line
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut BoardConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Board, "name") => config.name = parse_name(value)?,
        (Section::Display, "dwell_us") => config.stopwatch.dwell_us = parse_int(value)?,
        (Section::Display, "blank_between_digits") => {
            config.stopwatch.blank_between_digits = parse_bool(value)?
        }
        (Section::Counter, "overflow") => config.stopwatch.overflow = parse_overflow(value)?,
        (Section::Buttons, "active_low") => config.buttons.active_low = parse_bool(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Parse a quoted string value (removes quotes)
///
/// Basic strings containing escapes are rejected rather than passed through
/// with the backslashes still in them.
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if let Some(inner) = value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')) {
        if !inner.contains('\'') {
            return Ok(inner);
        }
    }
    if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        if !inner.contains('"') && !inner.contains('\\') {
            return Ok(inner);
        }
    }
    Err(ParseError::InvalidValue)
}

fn parse_name(value: &str) -> Result<String<MAX_NAME_LEN>, ParseError> {
    let mut name = String::new();
    name.push_str(parse_string(value)?)
        .map_err(|_| ParseError::InvalidValue)?;
    Ok(name)
}

/// Parse a decimal integer, allowing `_` between digits
fn parse_int(value: &str) -> Result<u32, ParseError> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    let bytes = digits.as_bytes();
    if bytes.first() == Some(&b'_') || bytes.last() == Some(&b'_') || digits.contains("__") {
        return Err(ParseError::InvalidValue);
    }

    let mut result: u32 = 0;
    let mut seen_digit = false;
    for &b in bytes {
        match b {
            b'_' => {}
            b'0'..=b'9' => {
                result = result
                    .checked_mul(10)
                    .and_then(|r| r.checked_add((b - b'0') as u32))
                    .ok_or(ParseError::InvalidValue)?;
                seen_digit = true;
            }
            _ => return Err(ParseError::InvalidValue),
        }
    }

    if !seen_digit {
        return Err(ParseError::InvalidValue);
    }
    Ok(result)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_overflow(value: &str) -> Result<OverflowPolicy, ParseError> {
    match parse_string(value)? {
        "wrap" => Ok(OverflowPolicy::Wrap),
        "saturate" => Ok(OverflowPolicy::Saturate),
        _ => Err(ParseError::InvalidValue),
    }
}
