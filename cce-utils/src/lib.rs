//! Shared utility functions for cooking emissions crates.

/// Timestamp utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

    /// Naive layouts accepted for creation-time strings, interpreted as UTC.
    const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    /// Parse a creation-time string into an absolute instant.
    ///
    /// Accepts RFC 3339 (`2024-03-01T12:00:00Z`), the naive layouts in
    /// [`NAIVE_FORMATS`] and a bare `YYYY-MM-DD` date (midnight UTC).
    pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(naive.and_utc());
            }
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
        date.and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .ok_or_else(|| anyhow::anyhow!("midnight out of range for {}", s))
    }

    /// Milliseconds since the Unix epoch.
    pub fn to_millis(dt: &DateTime<Utc>) -> i64 {
        dt.timestamp_millis()
    }

    /// Inverse of [`to_millis`]; `None` when out of chrono's range.
    pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(millis)
    }

    /// Format an instant as RFC 3339 with millisecond precision.
    pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

}

/// Number formatting compatible with the browser front end
pub mod numbers {
    /// Format with exactly one decimal place, the way JavaScript's
    /// `Number.prototype.toFixed(1)` does.
    ///
    /// Rust's `{:.1}` rounds exact ties to even while `toFixed` rounds them
    /// away from zero. A double sits exactly between two tenths only when it
    /// is an odd multiple of 0.25, so only that case needs special handling.
    pub fn to_fixed_1(value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }
        if value == 0.0 {
            return "0.0".to_string();
        }
        let quarters = value * 4.0;
        if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
            let tenths = (value.abs() * 10.0).ceil();
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{}{:.1}", sign, tenths / 10.0);
        }
        format!("{:.1}", value)
    }

    /// Parse a numeric text field; anything that is not a number becomes NaN.
    pub fn parse_or_nan(text: &str) -> f64 {
        text.trim().parse::<f64>().unwrap_or(f64::NAN)
    }

}

/// Text helpers for user-facing messages
pub mod text {
    /// Split a camelCase field key into lowercase words.
    ///
    /// `mealsNumber` becomes `meals number`.
    pub fn humanize_field(key: &str) -> String {
        let mut out = String::with_capacity(key.len() + 4);
        for c in key.chars() {
            if c.is_ascii_uppercase() {
                out.push(' ');
            }
            out.push(c.to_ascii_lowercase());
        }
        out
    }

}
