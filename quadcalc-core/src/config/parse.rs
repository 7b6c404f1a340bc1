//! Simple TOML parser for calculator configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the calculator configuration. It does NOT support the full TOML spec
//! and needs no allocator.
//!
//! Supported features:
//! - `key = value` pairs (string, integer, boolean)
//! - `[section]` headers
//! - Comments (`# ...`), including trailing comments
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys and nested sections

use super::types::CalculatorConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Section header not recognized
    InvalidSection { line: u16 },
    /// Key not valid in the current section
    UnknownKey { line: u16 },
    /// Line is neither a header nor `key = value`
    Syntax { line: u16 },
    /// Value has the wrong type or is out of range
    InvalidValue { line: u16 },
    /// Keypad row does not describe a valid set of keys
    InvalidLayout { line: u16 },
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Keypad,
    Display,
}

/// Parse TOML configuration into a [`CalculatorConfig`]
///
/// Keys that are not present keep their default values.
pub fn parse_config(input: &str) -> Result<CalculatorConfig, ConfigError> {
    let mut config = CalculatorConfig::new();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = (index + 1).min(u16::MAX as usize) as u16;
        let line = strip_comment(raw).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') {
            section = parse_section_header(line, line_no)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::Syntax { line: line_no })?;
        apply_value(&mut config, section, key, value, line_no)?;
    }

    Ok(config)
}

fn parse_section_header(line: &str, line_no: u16) -> Result<Section, ConfigError> {
    let name = line
        .strip_prefix('[')
        .and_then(|l| l.strip_suffix(']'))
        .ok_or(ConfigError::Syntax { line: line_no })?;

    match name.trim() {
        "keypad" => Ok(Section::Keypad),
        "display" => Ok(Section::Display),
        _ => Err(ConfigError::InvalidSection { line: line_no }),
    }
}

fn apply_value(
    config: &mut CalculatorConfig,
    section: Section,
    key: &str,
    value: &str,
    line: u16,
) -> Result<(), ConfigError> {
    let invalid = ConfigError::InvalidValue { line };

    match section {
        Section::Keypad => {
            let keypad = &mut config.keypad;
            if let Some(row) = layout_row(key) {
                let text = parse_string(value).ok_or(invalid)?;
                return keypad
                    .layout
                    .set_row(row, text)
                    .map_err(|_| ConfigError::InvalidLayout { line });
            }
            match key {
                "scan_interval_ms" => keypad.scan_interval_ms = parse_int(value).ok_or(invalid)?,
                "debounce_ms" => keypad.debounce_ms = parse_int(value).ok_or(invalid)?,
                "settle_us" => keypad.settle_us = parse_int(value).ok_or(invalid)?,
                "divide_opens_help" => keypad.divide_opens_help = parse_bool(value).ok_or(invalid)?,
                _ => return Err(ConfigError::UnknownKey { line }),
            }
        }
        Section::Display => {
            let display = &mut config.display;
            match key {
                "splash_ms" => display.splash_ms = parse_int(value).ok_or(invalid)?,
                "help_ms" => display.help_ms = parse_int(value).ok_or(invalid)?,
                _ => return Err(ConfigError::UnknownKey { line }),
            }
        }
        Section::Root => return Err(ConfigError::UnknownKey { line }),
    }

    Ok(())
}

/// Row index for `row0`..`row3` keys
fn layout_row(key: &str) -> Option<usize> {
    let digits = key.strip_prefix("row")?;
    if digits.len() != 1 {
        return None;
    }
    digits.parse().ok()
}

/// Drop a trailing `#` comment that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Option<&str> {
    value.strip_prefix('"')?.strip_suffix('"')
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
