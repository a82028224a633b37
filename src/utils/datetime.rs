use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parse the date column. Socrata exports floating timestamps with a
/// midnight time part; only the date is kept.
pub fn parse_crash_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parse the time column (`9:35`, `09:35` or `09:35:00`)
pub fn parse_crash_time(s: &str) -> Option<NaiveTime> {
    let trimmed = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

/// Combine the separate date and time columns into one timestamp
pub fn parse_crash_datetime(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(NaiveDateTime::new(
        parse_crash_date(date)?,
        parse_crash_time(time)?,
    ))
}
