// core/tests/test_csv_fixture.rs
use chrono::NaiveDate;
use trainingcal_core::{build_heatmap, Cfg, DateRange, RawRecord};

fn load_fixture() -> Vec<RawRecord> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/records_jan2024.csv");
    let mut rdr = csv::Reader::from_path(path).expect("open fixture");
    rdr.deserialize()
        .collect::<Result<Vec<RawRecord>, _>>()
        .expect("parse fixture")
}

#[test]
fn january_fixture_heatmap() {
    let raw = load_fixture();
    assert_eq!(raw.len(), 10);

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    )
    .unwrap();
    let hm = build_heatmap(&raw, range, &Cfg::default()).expect("heatmap");

    // 1. jan er mandag, 31. jan onsdag
    assert_eq!(hm.weeks.len(), 5);
    assert_eq!(hm.weeks[4].filled(), 3);

    let s = hm.stats;
    assert_eq!(s.total_days, 31);
    assert_eq!(s.active_days, 8);
    assert_eq!(s.consistency_percent, 26);
    assert_eq!(s.current_streak, 3);
    assert_eq!(s.longest_streak, 3);
    assert_eq!(s.max_intensity, 4);
    // duplikat 3. jan (90 min) forkastet, 2023-12-31 utenfor
    assert_eq!(s.total_duration_minutes, 285);
    assert_eq!(s.total_exercises, 21);

    let jan3 = hm.weeks[0].days[2].unwrap();
    assert_eq!(jan3.intensity, 2);
    assert_eq!(jan3.exercise_count, 3);

    let jan15 = hm.weeks[2].days[0].unwrap();
    assert_eq!((jan15.intensity, jan15.duration_minutes), (2, 0));
}
