//! Build script for dozenal-sim
//!
//! Validates dozenal.toml at compile time, since it is embedded as the
//! default configuration.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=dozenal.toml");
    validate_config();
}

/// Validate dozenal.toml
fn validate_config() {
    let config_path = Path::new("dozenal.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read dozenal.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Table = match config_content.parse() {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in dozenal.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let errors = validate_face(&config);
    if !errors.is_empty() {
        let lines: Vec<String> = errors.iter().map(|e| format!("║  • {:<62} ║", e)).collect();
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid [face] section in dozenal.toml                   ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            lines.join("\n")
        );
    }
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

/// Check the values the face would reject at startup
fn validate_face(config: &toml::Table) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(face) = config.get("face").and_then(|f| f.as_table()) else {
        return errors;
    };

    if let Some(rate) = face.get("tick_rate") {
        match rate.as_integer() {
            Some(hz) if (1..=128).contains(&hz) && (hz & (hz - 1)) == 0 => {}
            _ => errors.push(format!("tick_rate must be a power of two 1-128, got {}", rate)),
        }
    }

    if let Some(offset) = face.get("display_offset") {
        match offset.as_integer() {
            Some(o) if (0..=5).contains(&o) => {}
            _ => errors.push(format!("display_offset must be 0-5, got {}", offset)),
        }
    }

    if let Some(table) = face.get("table").and_then(|t| t.as_table()) {
        for key in ["first", "second", "third", "fraction_num", "fraction_den"] {
            if let Some(value) = table.get(key) {
                if !matches!(value.as_integer(), Some(v) if v > 0) {
                    errors.push(format!("table.{} must be a positive integer", key));
                }
            }
        }
    }

    errors
}
