use chrono::DateTime;

pub fn format_cost(v: f64) -> String {
    format!("{v:.6}")
}

/// UTC `YYYY-MM-DD HH:MM:SS` for a UNIX timestamp; out-of-range values fall
/// back to the raw number.
pub fn format_utc(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ts.to_string(),
    }
}
