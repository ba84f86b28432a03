use std::time::Duration;

fn plural(count: u128, unit: &str) -> String {
    format!("{} {}{}", count, unit, if count != 1 { "s" } else { "" })
}

/// `major`, followed by `minor` when it is nonzero.
fn with_remainder(major: u128, major_unit: &str, minor: u128, minor_unit: &str) -> String {
    if minor == 0 {
        plural(major, major_unit)
    } else {
        format!("{}, {}", plural(major, major_unit), plural(minor, minor_unit))
    }
}

/// Render a duration the way the report would: its largest whole unit plus
/// the next unit down when that is nonzero.
pub fn format_duration(d: Duration) -> String {
    let seconds = u128::from(d.as_secs());
    let nanos = d.as_nanos();
    if seconds == 0 && nanos > 0 {
        return if nanos >= 1_000_000 {
            plural(d.as_millis(), "millisecond")
        } else if nanos >= 1_000 {
            plural(d.as_micros(), "microsecond")
        } else {
            plural(nanos, "nanosecond")
        };
    }

    if seconds < 60 {
        plural(seconds, "second")
    } else if seconds < 3600 {
        with_remainder(seconds / 60, "minute", seconds % 60, "second")
    } else if seconds < 86_400 {
        with_remainder(seconds / 3600, "hour", (seconds % 3600) / 60, "minute")
    } else {
        with_remainder(seconds / 86_400, "day", (seconds % 86_400) / 3600, "hour")
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(raw_path: &str) -> std::path::PathBuf {
    let path_str = raw_path.trim();

    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    std::path::PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(Duration::from_secs(1)), "1 second");
        assert_eq!(format_duration(Duration::from_secs(45)), "45 seconds");
        assert_eq!(format_duration(Duration::from_secs(2700)), "45 minutes");
        assert_eq!(format_duration(Duration::from_secs(7200)), "2 hours");
        assert_eq!(format_duration(Duration::from_secs(5400)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::from_secs(90_000)), "1 day, 1 hour");
        assert_eq!(format_duration(Duration::from_millis(250)), "250 milliseconds");
    }

    #[test]
    fn test_format_duration_keeps_remainder() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1 minute, 30 seconds");
        assert_eq!(format_duration(Duration::from_secs(61)), "1 minute, 1 second");
        assert_eq!(format_duration(Duration::from_secs(120)), "2 minutes");
    }

    #[test]
    fn test_format_duration_below_a_millisecond() {
        assert_eq!(format_duration(Duration::from_micros(5)), "5 microseconds");
        assert_eq!(format_duration(Duration::from_micros(1)), "1 microsecond");
        assert_eq!(format_duration(Duration::from_nanos(500)), "500 nanoseconds");
        assert_eq!(format_duration(Duration::from_millis(1)), "1 millisecond");
        assert_eq!(format_duration(Duration::ZERO), "0 seconds");
    }

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/tmp/report.txt"), std::path::PathBuf::from("/tmp/report.txt"));
        assert_eq!(expand_home("report.txt"), std::path::PathBuf::from("report.txt"));
    }
}
