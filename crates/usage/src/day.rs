use chrono::{DateTime, NaiveTime, TimeZone};
use focus_core::TimeRange;

/// Midnight of the calendar day containing `now`, in `now`'s zone.
pub fn day_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start,
        // Midnight skipped by a DST jump; fall back to the elapsed wall time.
        None => now.clone() - now.time().signed_duration_since(NaiveTime::MIN),
    }
}

/// `[midnight, now)` as epoch millis.
pub fn today_range<Tz: TimeZone>(now: &DateTime<Tz>) -> TimeRange {
    TimeRange {
        start: day_start(now).timestamp_millis(),
        end: now.timestamp_millis(),
    }
}

/// `YYYY-MM-DD` of the local calendar day.
pub fn day_key<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn today_range_starts_at_local_midnight() {
        let zone = FixedOffset::east_opt(8 * 3600).expect("offset");
        let now = zone
            .with_ymd_and_hms(2026, 10, 19, 9, 30, 0)
            .single()
            .expect("time");
        let range = today_range(&now);
        assert_eq!(range.end - range.start, (9 * 60 + 30) * 60 * 1000);
        assert_eq!(day_key(&now), "2026-10-19");
    }
}
