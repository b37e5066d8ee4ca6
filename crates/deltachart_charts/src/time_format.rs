use chrono::{DateTime, Utc};

fn to_utc(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let secs = seconds.floor();
    let nanos = ((seconds - secs) * 1e9) as u32;
    DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
}

/// `YYYY-MM-DD HH:MM` in UTC for a Unix timestamp in seconds.
pub fn format_datetime_minutes(seconds: f64) -> String {
    match to_utc(seconds) {
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        None => "---------- --:--".to_string(),
    }
}

/// `YYYY-MM-DD` in UTC for a Unix timestamp in seconds.
pub fn format_date(seconds: f64) -> String {
    match to_utc(seconds) {
        Some(t) => t.format("%Y-%m-%d").to_string(),
        None => "----------".to_string(),
    }
}
