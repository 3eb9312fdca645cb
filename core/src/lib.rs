//! Aggregering av treningsaktivitet per dag til et ukesjustert heatmap-rutenett
//! med tilhørende statistikk (aktive dager, konsistens, streak, topp-intensitet).
//!
//! Pipeline: `normalize` → `bucketize` + `compute_stats`, farger via `color_bucket`.
//! Alt er rene funksjoner uten I/O; bare `storage` rører disk.

pub mod analyze_calendar;
pub mod color;
pub mod errors;
pub mod normalize;
pub mod stats;
pub mod storage;
pub mod types;
pub mod weeks;

#[cfg(feature = "python")]
mod py;

use log::debug;

pub use analyze_calendar::analyze_calendar_json;
pub use color::{bucket_for, color_bucket, ColorBucket};
pub use errors::{CalendarError, MalformedReason, Result};
pub use normalize::normalize;
pub use stats::{compute_stats, consistency_percent, trailing_streak};
pub use storage::{load_cfg, save_cfg};
pub use types::{
    Cfg, DailyRecord, DateRange, Heatmap, NormalizedSeries, RawRecord, Statistics, Week, WeekGrid,
};
pub use weeks::bucketize;

/// Kjører hele pipelinen på ett normalisert snapshot, så rutenett og statistikk aldri kan sprike.
pub fn build_heatmap(raw: &[RawRecord], range: DateRange, cfg: &Cfg) -> Result<Heatmap> {
    let series = normalize(raw, range, cfg)?;
    let weeks = bucketize(&series);
    let stats = compute_stats(&series);

    debug!(
        "build_heatmap: {}..{} weeks={} active={}/{} streak={}",
        range.start(),
        range.end(),
        weeks.len(),
        stats.active_days,
        stats.total_days,
        stats.current_streak
    );

    Ok(Heatmap {
        range: series.range(),
        weeks,
        stats,
    })
}
