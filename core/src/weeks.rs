use chrono::{Datelike, Duration, NaiveDate};

use crate::types::{NormalizedSeries, Week, WeekGrid, DAYS_PER_WEEK};

/// Bretter den normaliserte serien inn i kalenderuker (man=0 .. søn=6).
///
/// Første uke kan ha tomme slots foran (start ikke på mandag), siste uke tomme slots bak
/// (slutt ikke på søndag). Det legges aldri til dager utenfor intervallet.
pub fn bucketize(series: &NormalizedSeries) -> WeekGrid {
    let capacity = series.len() / DAYS_PER_WEEK + 2;

    let (mut weeks, open) = series.records().iter().fold(
        (Vec::with_capacity(capacity), None::<Week>),
        |(mut weeks, open), rec| {
            let slot = rec.weekday_slot();
            let mut week = open.unwrap_or_else(|| Week::empty(week_start_of(rec.date)));
            week.days[slot] = Some(*rec);

            // søndag lukker uken
            if slot == DAYS_PER_WEEK - 1 {
                weeks.push(week);
                (weeks, None)
            } else {
                (weeks, Some(week))
            }
        },
    );

    // halvferdig siste uke
    weeks.extend(open);
    weeks
}

/// Mandagen i uken `date` tilhører.
fn week_start_of(date: NaiveDate) -> NaiveDate {
    let back = i64::from(date.weekday().num_days_from_monday());
    date.checked_sub_signed(Duration::days(back))
        .unwrap_or(NaiveDate::MIN)
}
