//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a numbered route stop
    pub fn stop(marker: usize, name: &str, detail: &str) {
        println!("{} {} {}", format!("{:>3}.", marker).cyan().bold(), name, detail.dimmed());
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a distance in kilometers; short distances are shown in meters
///
/// The unit is chosen after rounding, so `0.9996` reads `1.00 km`.
pub fn format_distance_km(km: f64) -> String {
    if !km.is_finite() {
        return "unknown".to_string();
    }

    let meters = (km * 1000.0).round();
    if meters < 1000.0 {
        format!("{:.0} m", meters)
    } else if (km * 100.0).round() < 10_000.0 {
        format!("{:.2} km", km)
    } else {
        format!("{:.0} km", km)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance_meters() {
        assert_eq!(format_distance_km(0.537), "537 m");
        assert_eq!(format_distance_km(0.0), "0 m");
    }

    #[test]
    fn test_format_distance_km() {
        assert_eq!(format_distance_km(4.706), "4.71 km");
        assert_eq!(format_distance_km(582.46), "582 km");
    }

    #[test]
    fn test_format_distance_unit_boundaries() {
        assert_eq!(format_distance_km(0.9994), "999 m");
        assert_eq!(format_distance_km(0.9996), "1.00 km");
        assert_eq!(format_distance_km(99.994), "99.99 km");
        assert_eq!(format_distance_km(99.996), "100 km");
    }

    #[test]
    fn test_format_distance_unknown() {
        assert_eq!(format_distance_km(f64::INFINITY), "unknown");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "stop", "stops"), "1 stop");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "stop", "stops"), "5 stops");
    }
}
