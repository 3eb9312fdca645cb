use chrono::NaiveDate;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::build_heatmap;
use crate::color::ColorBucket;
use crate::errors::{CalendarError, MalformedReason, Result};
use crate::types::{Cfg, DailyRecord, DateRange, Heatmap, RangeIn, RawRecord, Statistics, DAYS_PER_WEEK};

// Tolerant record-inngang: intensitet som vilkårlig JSON-tall, camelCase-alias fra frontend
#[derive(Debug, Deserialize)]
struct RecordInTol {
    date: NaiveDate,
    intensity: f64,
    #[serde(default, alias = "exerciseCount")]
    exercise_count: Option<u32>,
    #[serde(default, alias = "durationMinutes")]
    duration_minutes: Option<u32>,
}

#[derive(Debug, Serialize)]
struct CellOut {
    #[serde(flatten)]
    record: DailyRecord,
    bucket: ColorBucket,
}

#[derive(Debug, Serialize)]
struct WeekOut {
    week_start: NaiveDate,
    days: [Option<CellOut>; DAYS_PER_WEEK],
}

#[derive(Debug, Serialize)]
struct HeatmapOut {
    start: NaiveDate,
    end: NaiveDate,
    weeks: Vec<WeekOut>,
    stats: Statistics,
    legend: [ColorBucket; 5],
}

fn parse<T: DeserializeOwned>(what: &'static str, txt: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(txt);
    spte::deserialize(&mut de).map_err(|e| CalendarError::Parse {
        what,
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

fn to_raw(r: RecordInTol) -> Result<RawRecord> {
    let v = r.intensity;
    if !v.is_finite() || v.fract() != 0.0 {
        return Err(CalendarError::MalformedRecord {
            date: r.date,
            reason: MalformedReason::NotAnInteger(v),
        });
    }
    Ok(RawRecord {
        date: r.date,
        // saturerende cast; alt utenfor 0..=4 avvises uansett i normaliseringen
        intensity: v as i64,
        exercise_count: r.exercise_count,
        duration_minutes: r.duration_minutes,
    })
}

fn to_out(heatmap: &Heatmap) -> Result<HeatmapOut> {
    let mut weeks = Vec::with_capacity(heatmap.weeks.len());
    for w in &heatmap.weeks {
        let days = w
            .cells()?
            .map(|cell| cell.map(|(record, bucket)| CellOut { record, bucket }));
        weeks.push(WeekOut {
            week_start: w.week_start,
            days,
        });
    }
    Ok(HeatmapOut {
        start: heatmap.range.start(),
        end: heatmap.range.end(),
        weeks,
        stats: heatmap.stats,
        legend: ColorBucket::ALL,
    })
}

/// Parser records/intervall/cfg fra JSON, normaliserer og returnerer grid + statistikk som JSON.
///
/// `records_json`: `[{"date":"2024-01-01","intensity":2,"exerciseCount":3,"durationMinutes":45}, ...]`
/// `range_json`: `{"start":"2024-01-01","end":"2024-12-31"}`
/// `cfg_json`: valgfri, f.eks. `{"clamp_intensity":true}`
pub fn analyze_calendar_json(
    records_json: &str,
    range_json: &str,
    cfg_json: Option<&str>,
) -> Result<String> {
    let range_in: RangeIn = parse("range", range_json)?;
    let range = DateRange::try_from(range_in)?;

    let cfg: Cfg = match cfg_json {
        Some(txt) if !txt.trim().is_empty() => parse("cfg", txt)?,
        _ => Cfg::default(),
    };

    let records_in: Vec<RecordInTol> = parse("records", records_json)?;
    let total_in = records_in.len();

    // Records utenfor intervallet valideres ikke (samme regel som i normaliseringen)
    let raw = records_in
        .into_iter()
        .filter(|r| range.contains(r.date))
        .map(to_raw)
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "analyze_calendar_json: {} of {} records inside {}..{}",
        raw.len(),
        total_in,
        range.start(),
        range.end()
    );

    let heatmap = build_heatmap(&raw, range, &cfg)?;
    let out = to_out(&heatmap)?;

    serde_json::to_string(&out).map_err(|e| CalendarError::Parse {
        what: "heatmap",
        path: ".".to_string(),
        message: e.to_string(),
    })
}
