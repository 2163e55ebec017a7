//! Utility functions for unit conversion and display.

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// Convert a byte count to gibibytes.
pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GIB
}

/// Format a utilization sample, marking readings taken without a device.
pub fn format_usage(pct: f64, available: bool) -> String {
    if available {
        format!("{:5.1}%", pct)
    } else {
        format!("{:5.1}% (no data)", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gib_conversion() {
        assert_eq!(bytes_to_gib(8 * 1024 * 1024 * 1024), 8.0);
        assert_eq!(bytes_to_gib(512 * 1024 * 1024), 0.5);
        assert_eq!(bytes_to_gib(0), 0.0);
    }

    #[test]
    fn usage_without_device_is_flagged() {
        assert_eq!(format_usage(42.0, true), " 42.0%");
        assert_eq!(format_usage(0.0, false), "  0.0% (no data)");
    }
}
