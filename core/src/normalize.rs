use log::{debug, warn};

use crate::errors::{CalendarError, MalformedReason, Result};
use crate::types::{Cfg, DailyRecord, DateRange, NormalizedSeries, RawRecord, MAX_INTENSITY};

/// Validerer og fyller hull i rådata slik at det finnes nøyaktig én record per dato i `range`.
///
/// - records utenfor intervallet forkastes
/// - intensitet utenfor 0..=4 gir `MalformedRecord` (eller klemmes når `cfg.clamp_intensity`)
/// - ved duplikate datoer beholdes den FØRSTE i input-rekkefølge; senere forkastes
/// - manglende datoer fylles med hviledager (0/0/0)
///
/// Valideringen gjelder alle records innenfor intervallet, også duplikater som senere forkastes.
pub fn normalize(raw: &[RawRecord], range: DateRange, cfg: &Cfg) -> Result<NormalizedSeries> {
    let start = range.start();
    let mut slots: Vec<Option<DailyRecord>> = vec![None; range.len_days()];
    let mut outside = 0usize;
    let mut duplicates = 0usize;

    for r in raw {
        if !range.contains(r.date) {
            outside += 1;
            continue;
        }

        let intensity = resolve_intensity(r, cfg)?;
        let idx = (r.date - start).num_days() as usize;

        if slots[idx].is_some() {
            duplicates += 1;
            debug!("normalize: duplicate record for {} dropped (first wins)", r.date);
            continue;
        }

        slots[idx] = Some(DailyRecord {
            date: r.date,
            intensity,
            exercise_count: r.exercise_count.unwrap_or(0),
            duration_minutes: r.duration_minutes.unwrap_or(0),
        });
    }

    let present = slots.iter().filter(|s| s.is_some()).count();
    debug!(
        "normalize: {}..{} raw={} kept={} outside={} duplicates={} filled={}",
        start,
        range.end(),
        raw.len(),
        present,
        outside,
        duplicates,
        slots.len() - present
    );

    let records = range
        .days()
        .zip(slots)
        .map(|(date, slot)| slot.unwrap_or_else(|| DailyRecord::rest(date)))
        .collect();

    Ok(NormalizedSeries::new(range, records))
}

fn resolve_intensity(r: &RawRecord, cfg: &Cfg) -> Result<u8> {
    let max = i64::from(MAX_INTENSITY);
    if (0..=max).contains(&r.intensity) {
        return Ok(r.intensity as u8);
    }
    if cfg.clamp_intensity {
        let clamped = r.intensity.clamp(0, max) as u8;
        warn!(
            "normalize: intensity {} at {} clamped to {}",
            r.intensity, r.date, clamped
        );
        return Ok(clamped);
    }
    Err(CalendarError::MalformedRecord {
        date: r.date,
        reason: MalformedReason::OutOfRange(r.intensity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    #[test]
    fn resolve_intensity_accepts_domain_edges() {
        let cfg = Cfg::default();
        assert_eq!(resolve_intensity(&RawRecord::new(d(1, 1), 0), &cfg).unwrap(), 0);
        assert_eq!(resolve_intensity(&RawRecord::new(d(1, 1), 4), &cfg).unwrap(), 4);
    }

    #[test]
    fn resolve_intensity_clamps_both_ends_when_enabled() {
        let cfg = Cfg { clamp_intensity: true };
        assert_eq!(resolve_intensity(&RawRecord::new(d(1, 1), -3), &cfg).unwrap(), 0);
        assert_eq!(resolve_intensity(&RawRecord::new(d(1, 1), 9), &cfg).unwrap(), 4);
    }
}
