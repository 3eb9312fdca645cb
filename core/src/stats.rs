use crate::types::{DailyRecord, NormalizedSeries, Statistics};

/// Aggregater over den normaliserte serien: ett pass forover + ett bakover.
/// Alltid definert, også for tom serie.
pub fn compute_stats(series: &NormalizedSeries) -> Statistics {
    let records = series.records();

    let mut active_days = 0usize;
    let mut max_intensity = 0u8;
    let mut total_duration_minutes = 0u64;
    let mut total_exercises = 0u64;
    let mut run = 0usize;
    let mut longest_streak = 0usize;

    for r in records {
        if r.is_active() {
            active_days += 1;
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 0;
        }
        max_intensity = max_intensity.max(r.intensity);
        total_duration_minutes += u64::from(r.duration_minutes);
        total_exercises += u64::from(r.exercise_count);
    }

    let total_days = records.len();

    Statistics {
        active_days,
        total_days,
        consistency_percent: consistency_percent(active_days, total_days),
        current_streak: trailing_streak(records),
        longest_streak,
        max_intensity,
        total_duration_minutes,
        total_exercises,
    }
}

/// round(active / total * 100), 0 når total == 0. Halvveis rundes opp.
pub fn consistency_percent(active_days: usize, total_days: usize) -> u8 {
    if total_days == 0 {
        return 0;
    }
    // heltallsaritmetikk: (200a + t) / 2t == floor(100a/t + 0.5)
    let a = active_days.min(total_days) as u64;
    let t = total_days as u64;
    ((200 * a + t) / (2 * t)) as u8
}

/// Aktive dager på rad bakover fra siste record; stopper på første hviledag.
pub fn trailing_streak(records: &[DailyRecord]) -> usize {
    records.iter().rev().take_while(|r| r.is_active()).count()
}
