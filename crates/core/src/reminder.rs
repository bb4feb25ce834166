use crate::{HOUR_MS, MINUTE_MS};

/// Usage at or above this value triggers a reminder (30 minutes).
pub const DEFAULT_REMINDER_THRESHOLD_MS: i64 = 30 * MINUTE_MS;

/// Decides whether a reminder should fire for `app_name`.
///
/// Returns `false` while `now` is before `dismissed_until`. Otherwise the
/// fixed threshold applies to every app; `app_name` does not change it.
pub fn should_show_reminder(
    _app_name: &str,
    current_usage: i64,
    now: i64,
    dismissed_until: i64,
) -> bool {
    if now < dismissed_until {
        return false;
    }
    current_usage >= DEFAULT_REMINDER_THRESHOLD_MS
}

/// Human readable duration used in reminder messages, e.g. `1h 5m`.
pub fn format_duration(duration_ms: i64) -> String {
    let duration_ms = duration_ms.max(0);
    let hours = duration_ms / HOUR_MS;
    let minutes = (duration_ms % HOUR_MS) / MINUTE_MS;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        "just now".to_string()
    }
}
