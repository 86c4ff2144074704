//! Display and output formatting utilities

use crate::config::{SeedPreset, SpeedPreset};
use crate::game_of_life::Grid;
use crate::session::GameStatus;
use itertools::Itertools;

/// Format grids and session state for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1) * 3);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                output.push(if grid.is_alive(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for y in 0..grid.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width() {
                output.push_str(if grid.is_alive(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-decimal percentage of capacity
    pub fn to_percent(status: &GameStatus, value: usize) -> String {
        format!("{:.1}", status.percent_of_capacity(value))
    }

    /// Status panel with steps, elapsed time and population percentages
    pub fn format_status(status: &GameStatus) -> String {
        [
            format!("Steps: {}", status.steps_count),
            format!("Time: {:.1}s", status.time_elapsed_ms as f64 / 1000.0),
            format!("Active: {}%", Self::to_percent(status, status.active)),
            format!("Population: {}%", Self::to_percent(status, status.lived_current)),
            format!("Min: {}%", Self::to_percent(status, status.lived_min)),
            format!("Max: {}%", Self::to_percent(status, status.lived_max)),
        ]
        .iter()
        .join(" | ")
    }

    /// Listing of the seed and speed presets, defaults marked with `*`
    pub fn format_presets(seeds: &[SeedPreset], speeds: &[SpeedPreset]) -> String {
        let marker = |selected: bool| if selected { '*' } else { ' ' };

        let seed_lines = seeds
            .iter()
            .map(|p| {
                let arg = match p.arg {
                    serde_json::Value::Array(ref cells) => format!("{} cells", cells.len()),
                    ref other => other.to_string(),
                };
                format!("{} {:<20} {:<10} {}", marker(p.selected), p.name, p.algo, arg)
            })
            .join("\n");
        let speed_lines = speeds
            .iter()
            .map(|s| format!("{} {:<20} {} ms", marker(s.selected), s.name, s.period))
            .join("\n");

        format!("Initial states:\n{}\n\nSpeeds:\n{}\n", seed_lines, speed_lines)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
