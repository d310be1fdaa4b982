//! ISO 8601 duration conversion for media metadata.

use std::sync::LazyLock;

use regex::Regex;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("valid duration pattern")
});

/// Convert seconds to an ISO 8601 duration (e.g., `PT5M30S`).
///
/// Zero or negative input yields `PT0S`.
#[must_use]
pub fn format_duration(seconds: i64) -> String {
    if seconds <= 0 {
        return "PT0S".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut duration = String::from("PT");
    if hours > 0 {
        duration.push_str(&format!("{hours}H"));
    }
    if minutes > 0 {
        duration.push_str(&format!("{minutes}M"));
    }
    if secs > 0 || duration == "PT" {
        duration.push_str(&format!("{secs}S"));
    }

    duration
}

/// Parse an ISO 8601 duration into seconds.
///
/// Unrecognized input yields 0.
#[must_use]
pub fn parse_duration(duration: &str) -> i64 {
    let Some(captures) = DURATION_RE.captures(duration) else {
        return 0;
    };

    let component = |index: usize| {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0)
    };

    component(1) * 3600 + component(2) * 60 + component(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(330), "PT5M30S");
        assert_eq!(format_duration(3600), "PT1H");
        assert_eq!(format_duration(3725), "PT1H2M5S");
        assert_eq!(format_duration(45), "PT45S");
        assert_eq!(format_duration(0), "PT0S");
        assert_eq!(format_duration(-5), "PT0S");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("PT5M30S"), 330);
        assert_eq!(parse_duration("PT1H"), 3600);
        assert_eq!(parse_duration("PT1H2M5S"), 3725);
        assert_eq!(parse_duration("PT0S"), 0);
        assert_eq!(parse_duration("garbage"), 0);
        assert_eq!(parse_duration(""), 0);
    }

    #[test]
    fn test_round_trip() {
        for seconds in [0, 45, 330, 3600, 3725, 86399] {
            assert_eq!(parse_duration(&format_duration(seconds)), seconds);
        }
    }
}
