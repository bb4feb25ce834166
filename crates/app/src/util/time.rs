use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Utc};

use crate::config::RangeParams;
use crate::error::{AppError, Result};
use focus_core::TimeRange;
use focus_usage::day_start;

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Resolves query params against the current local time.
pub fn resolve_range(params: &RangeParams) -> Result<TimeRange> {
    resolve_range_at(params, &Local::now())
}

pub fn resolve_range_at<Tz: TimeZone>(params: &RangeParams, now: &DateTime<Tz>) -> Result<TimeRange> {
    let now_ms = now.timestamp_millis();
    if let Some(start) = params.start {
        let end = params.end.unwrap_or(now_ms);
        if end < start {
            return Err(AppError::InvalidInput(format!(
                "range end {} is before start {}",
                end, start
            )));
        }
        return Ok(TimeRange { start, end });
    }
    let start = match params.range.as_deref().unwrap_or("today") {
        "today" => day_start(now).timestamp_millis(),
        "last24hours" => (now.clone() - Duration::hours(24)).timestamp_millis(),
        "last7days" => (now.clone() - Duration::days(7)).timestamp_millis(),
        "thismonth" => {
            let first = now
                .with_day(1)
                .ok_or_else(|| AppError::InvalidInput("invalid local date".to_string()))?;
            day_start(&first).timestamp_millis()
        }
        "alltime" => 0,
        value => {
            return Err(AppError::InvalidInput(format!(
                "unsupported range {}",
                value
            )));
        }
    };
    Ok(TimeRange {
        start,
        end: now_ms,
    })
}
