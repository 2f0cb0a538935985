//! Display time labels
//!
//! Converts raw schedule timestamps into the time label shown in playlist
//! titles, applying the configured timezone and the stale-schedule
//! fallback. Streams whose schedule ended long ago are almost always
//! round-the-clock channels with leftover event metadata, so they get the
//! always-on label instead of a misleading past date.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Label for streams with no meaningful schedule window.
pub const ALWAYS_ON: &str = "24/7";

/// Label for a schedule with an end but no usable start.
pub const UNKNOWN_TIME: &str = "Unknown Time";

/// Compute the display time label for one stream.
///
/// Zero timestamps are treated the same as absent ones. `now` is the
/// wall-clock time sampled once at assembly start, so all labels in a run
/// agree on what "stale" means.
pub fn time_label(
    start_time: Option<i64>,
    end_time: Option<i64>,
    now: DateTime<Utc>,
    tz: Tz,
    stale_after: chrono::Duration,
) -> String {
    let start = start_time.filter(|&t| t > 0);
    let end = end_time.filter(|&t| t > 0);

    if start.is_none() && end.is_none() {
        return ALWAYS_ON.to_string();
    }

    if let Some(end) = end {
        if let Some(ended) = Utc.timestamp_opt(end, 0).single() {
            if now - ended > stale_after {
                return ALWAYS_ON.to_string();
            }
        }
    }

    if let Some(start) = start {
        if let Some(start_dt) = tz.timestamp_opt(start, 0).single() {
            // A same-day end renders as a range, e.g. "07:30 PM - 09:30 PM 03/02/25".
            if let Some(end_dt) = end.and_then(|e| tz.timestamp_opt(e, 0).single()) {
                if end_dt > start_dt && end_dt.date_naive() == start_dt.date_naive() {
                    return format!(
                        "{} - {}",
                        start_dt.format("%I:%M %p"),
                        end_dt.format("%I:%M %p %m/%d/%y")
                    );
                }
            }
            return start_dt.format("%I:%M %p %m/%d/%y").to_string();
        }
    }

    UNKNOWN_TIME.to_string()
}
