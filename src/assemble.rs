//! Playlist assembly
//!
//! Orchestrates per-record link resolution, title formatting and ordering
//! for one generation run. Owns the partial-failure policy: a record whose
//! link cannot be resolved is dropped, the batch is never aborted.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::api::LinkResolver;
use crate::catalog::StreamRecord;
use crate::timefmt;
use crate::title;

/// A stream record with a confirmed playback URL and computed title.
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    pub id: u64,
    pub display_title: String,
    pub poster: String,
    pub playback_url: String,
    pub start_time: Option<i64>,
}

/// Formatting policy for one assembly run.
#[derive(Debug, Clone, Copy)]
pub struct AssembleOptions {
    pub timezone: Tz,
    pub stale_after: Duration,
}

/// Resolve and format stream records into ordered playlist entries.
///
/// `now` is sampled once by the caller so all labels within a run agree.
/// Output order is `start_time` ascending with unscheduled entries last;
/// the stable sort keeps catalog order as the tie-break, so the result
/// does not depend on how individual lookups completed.
pub async fn assemble<R: LinkResolver + ?Sized>(
    records: &[StreamRecord],
    resolver: &R,
    now: DateTime<Utc>,
    opts: &AssembleOptions,
) -> Vec<ResolvedEntry> {
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        let Some(playback_url) = resolver.resolve(record.id).await else {
            tracing::info!("Skipping {} (no playback link found)", record.name);
            continue;
        };

        let label = timefmt::time_label(
            record.start_time,
            record.end_time,
            now,
            opts.timezone,
            opts.stale_after,
        );
        let display_title =
            title::display_title(&record.category, &record.name, &record.tag, &label);

        entries.push(ResolvedEntry {
            id: record.id,
            display_title,
            poster: record.poster.clone(),
            playback_url,
            start_time: record.start_time,
        });
    }

    entries.sort_by_key(|e| e.start_time.filter(|&t| t > 0).unwrap_or(i64::MAX));

    entries
}
