use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date layouts the backend and older records are known to use.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%b %d,%Y", "%b %d, %Y"];

/// Date-time layouts without a timezone (ASP.NET serializes these).
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a record date leniently, returning `None` when nothing matches.
///
/// Accepts plain dates, naive date-times and RFC 3339 timestamps. The time
/// part is dropped; records are compared by calendar day only.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date_time.date());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date_time| date_time.date_naive())
}

/// Returns the `(year, month)` pair `delta` months away from the given one.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// Counts whole calendar months from `start` to `end`, never less than one.
///
/// A bill running from January to March spans three billing months.
pub fn billing_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32 + 1;
    months.max(1) as u32
}

/// Formats a `(year, month)` pair as the `YYYY-MM` chart label.
pub fn month_label(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}
