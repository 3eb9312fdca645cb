use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::color::{color_bucket, ColorBucket};
use crate::errors::{CalendarError, Result};

pub const MAX_INTENSITY: u8 = 4;
pub const DAYS_PER_WEEK: usize = 7;

/// Én validert dag i serien. intensity 0 = hviledag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub intensity: u8,
    pub exercise_count: u32,
    pub duration_minutes: u32,
}

impl DailyRecord {
    /// Syntetisk hviledag for datoer som mangler i rådata.
    pub fn rest(date: NaiveDate) -> Self {
        Self {
            date,
            intensity: 0,
            exercise_count: 0,
            duration_minutes: 0,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.intensity > 0
    }

    /// Kolonne i uken, man=0 .. søn=6
    #[inline]
    pub fn weekday_slot(&self) -> usize {
        self.date.weekday().num_days_from_monday() as usize
    }
}

/// Rå record slik den kommer fra datakilden (mock-generator e.l.), ikke validert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: NaiveDate,
    pub intensity: i64,
    #[serde(default)]
    pub exercise_count: Option<u32>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

impl RawRecord {
    pub fn new(date: NaiveDate, intensity: i64) -> Self {
        Self {
            date,
            intensity,
            exercise_count: None,
            duration_minutes: None,
        }
    }
}

/// Intervall slik det kommer over JSON, før validering.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RangeIn {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TryFrom<RangeIn> for DateRange {
    type Error = CalendarError;

    fn try_from(r: RangeIn) -> Result<Self> {
        DateRange::new(r.start, r.end)
    }
}

/// Inklusivt datointervall [start, end].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeIn")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(CalendarError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Hele kalenderåret 1. jan – 31. des (365 eller 366 dager).
    pub fn year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(Self { start, end })
    }

    /// De siste `days` dagene til og med `end`.
    pub fn ending_at(end: NaiveDate, days: u32) -> Result<Self> {
        if days == 0 {
            return Err(CalendarError::InvalidWindow(days));
        }
        let start = end
            .checked_sub_signed(Duration::days(i64::from(days) - 1))
            .ok_or(CalendarError::InvalidWindow(days))?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn len_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Sammenhengende, sortert serie uten duplikater. Lages kun av `normalize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSeries {
    range: DateRange,
    records: Vec<DailyRecord>,
}

impl NormalizedSeries {
    pub(crate) fn new(range: DateRange, records: Vec<DailyRecord>) -> Self {
        debug_assert_eq!(records.len(), range.len_days());
        Self { range, records }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<DailyRecord> {
        self.records
    }
}

/// Én kalenderuke, slot 0 = mandag. `None` = dato utenfor intervallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// Mandagen i uken (kan ligge før intervallets start)
    pub week_start: NaiveDate,
    pub days: [Option<DailyRecord>; DAYS_PER_WEEK],
}

impl Week {
    pub fn empty(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            days: [None; DAYS_PER_WEEK],
        }
    }

    pub fn filled(&self) -> usize {
        self.days.iter().filter(|d| d.is_some()).count()
    }

    pub fn records(&self) -> impl Iterator<Item = &DailyRecord> {
        self.days.iter().flatten()
    }

    /// Hver slot med fargebøtte ferdig satt, så visningslaget slipper egen mapping.
    pub fn cells(&self) -> Result<[Option<(DailyRecord, ColorBucket)>; DAYS_PER_WEEK]> {
        let mut out = [None; DAYS_PER_WEEK];
        for (slot, day) in out.iter_mut().zip(self.days.iter()) {
            if let Some(r) = day {
                *slot = Some((*r, color_bucket(r.intensity)?));
            }
        }
        Ok(out)
    }
}

pub type WeekGrid = Vec<Week>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Statistics {
    pub active_days: usize,
    pub total_days: usize,
    pub consistency_percent: u8,
    /// Løpende rekke bakover fra siste dag i intervallet
    pub current_streak: usize,
    /// Lengste rekke i hele intervallet
    pub longest_streak: usize,
    pub max_intensity: u8,
    pub total_duration_minutes: u64,
    pub total_exercises: u64,
}

/// Rutenett + statistikk fra samme normaliserte serie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    pub range: DateRange,
    pub weeks: WeekGrid,
    pub stats: Statistics,
}

impl Heatmap {
    /// Leser rutenettet venstre→høyre, topp→bunn og hopper over tomme slots.
    pub fn flatten(&self) -> Vec<DailyRecord> {
        self.weeks.iter().flat_map(|w| w.records().copied()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Cfg {
    /// Klem intensitet inn i 0..=4 i stedet for å avvise recorden
    pub clamp_intensity: bool,
}
