use chrono::NaiveDate;
use thiserror::Error;

/// Hvorfor en rå dagsrecord ble avvist av normaliseringen.
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedReason {
    /// Heltall utenfor 0..=4
    OutOfRange(i64),
    /// Ikke et heltall (kun mulig via JSON-fasaden)
    NotAnInteger(f64),
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::OutOfRange(v) => write!(f, "intensity {v} outside 0..=4"),
            MalformedReason::NotAnInteger(v) => write!(f, "intensity {v} is not an integer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("malformed record at {date}: {reason}")]
    MalformedRecord { date: NaiveDate, reason: MalformedReason },

    /// Skal ikke kunne nås når normaliseringen har validert input.
    #[error("invalid intensity {0} (expected 0..=4)")]
    InvalidIntensity(i64),

    #[error("window must cover at least one day (got {0})")]
    InvalidWindow(u32),

    #[error("{what} parse at {path}: {message}")]
    Parse {
        what: &'static str,
        path: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CalendarError>;
