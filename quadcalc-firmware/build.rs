//! Build script for quadcalc-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates calculator.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Characters allowed in a keypad row
const KEY_CHARS: &str = "0123456789+-*/=Cc#.";

/// Keys recognized in each section
const KEYPAD_KEYS: &[&str] = &[
    "row0",
    "row1",
    "row2",
    "row3",
    "scan_interval_ms",
    "debounce_ms",
    "settle_us",
    "divide_opens_help",
];
const DISPLAY_KEYS: &[&str] = &["splash_ms", "help_ms"];

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

    // Linker scripts for cortex-m-rt and defmt
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate calculator.toml configuration at compile time
fn validate_config() {
    // Re-run if calculator.toml changes
    println!("cargo:rerun-if-changed=calculator.toml");

    let config_path = Path::new("calculator.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: calculator.toml not found!                               ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a calculator.toml configuration file.       ║\n\
            ║  Please create one in the quadcalc-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read calculator.toml                           ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in calculator.toml                   ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_keypad(&config, &mut errors);
    validate_display(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid calculator configuration                         ║\n\
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

    println!("cargo:warning=calculator.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only [keypad] and [display] tables are allowed, each with known keys
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        let allowed = match name.as_str() {
            "keypad" => KEYPAD_KEYS,
            "display" => DISPLAY_KEYS,
            _ => {
                errors.push(format!("Unknown section [{}]", name));
                continue;
            }
        };

        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", name));
            continue;
        };

        for key in table.keys() {
            if !allowed.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
            }
        }
    }
}

/// Validate keypad layout and timing
fn validate_keypad(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(keypad) = config.get("keypad").and_then(|k| k.as_table()) else {
        return;
    };

    let mut has_help = false;
    for row in ["row0", "row1", "row2", "row3"] {
        match keypad.get(row) {
            Some(toml::Value::String(keys)) => {
                if keys.chars().count() != 4 {
                    errors.push(format!("[keypad] {} must have exactly 4 keys", row));
                }
                if let Some(bad) = keys.chars().find(|c| !KEY_CHARS.contains(*c)) {
                    errors.push(format!("[keypad] {} has unknown key '{}'", row, bad));
                }
                has_help |= keys.contains('#');
            }
            Some(_) => errors.push(format!("[keypad] {} must be a string", row)),
            None => {}
        }
    }

    validate_ms(keypad, "keypad", "scan_interval_ms", errors);
    validate_ms(keypad, "keypad", "debounce_ms", errors);
    validate_ms(keypad, "keypad", "settle_us", errors);

    match keypad.get("divide_opens_help") {
        Some(toml::Value::Boolean(false)) if !has_help => {
            println!("cargo:warning=calculator.toml: help is unreachable (no '#' key and divide_opens_help = false)");
        }
        Some(toml::Value::Boolean(_)) | None => {}
        Some(_) => errors.push("[keypad] divide_opens_help must be true or false".to_string()),
    }
}

/// Validate display timing
fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display").and_then(|d| d.as_table()) else {
        return;
    };

    validate_ms(display, "display", "splash_ms", errors);
    validate_ms(display, "display", "help_ms", errors);
}

/// Integer fields are stored as u16 on the target
fn validate_ms(
    table: &toml::map::Map<String, toml::Value>,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        Some(toml::Value::Integer(v)) => {
            if *v < 0 || *v > u16::MAX as i64 {
                errors.push(format!("[{}] {} must be 0-{}", section, key, u16::MAX));
            }
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
        None => {}
    }
}
