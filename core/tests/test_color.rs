// core/tests/test_color.rs
use chrono::NaiveDate;
use trainingcal_core::{build_heatmap, bucket_for, color_bucket, CalendarError, Cfg, ColorBucket, DateRange, RawRecord};

#[test]
fn lookup_table_is_fixed() {
    let expected = [
        (0, ColorBucket::None, "none"),
        (1, ColorBucket::Low, "low"),
        (2, ColorBucket::Medium, "medium"),
        (3, ColorBucket::High, "high"),
        (4, ColorBucket::Peak, "peak"),
    ];
    for (i, bucket, label) in expected {
        let got = color_bucket(i).unwrap();
        assert_eq!(got, bucket);
        assert_eq!(got.label(), label);
        assert_eq!(got.to_string(), label);
    }
}

#[test]
fn out_of_domain_is_invalid_intensity_not_clamped() {
    assert_eq!(color_bucket(5).unwrap_err(), CalendarError::InvalidIntensity(5));
    assert_eq!(bucket_for(-1).unwrap_err(), CalendarError::InvalidIntensity(-1));
}

#[test]
fn buckets_are_ordered_like_intensity() {
    let mut sorted = ColorBucket::ALL;
    sorted.sort();
    assert_eq!(sorted, ColorBucket::ALL);
    assert_eq!(serde_json::to_string(&ColorBucket::Peak).unwrap(), "\"peak\"");
}

#[test]
fn week_cells_carry_bucket_per_slot() {
    // ons 2024-01-03 .. søn 2024-01-07
    let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let range = DateRange::ending_at(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(), 5).unwrap();
    assert_eq!(range.start(), start);

    let raw: Vec<_> = range
        .days()
        .enumerate()
        .map(|(i, dt)| RawRecord::new(dt, i as i64))
        .collect();
    let hm = build_heatmap(&raw, range, &Cfg::default()).unwrap();
    let cells = hm.weeks[0].cells().unwrap();

    assert!(cells[0].is_none() && cells[1].is_none());
    let buckets: Vec<ColorBucket> = cells.iter().flatten().map(|(_, b)| *b).collect();
    assert_eq!(buckets, ColorBucket::ALL.to_vec());
}
