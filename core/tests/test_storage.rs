// core/tests/test_storage.rs
use trainingcal_core::{load_cfg, save_cfg, Cfg};
use std::fs;

#[test]
fn missing_cfg_file_gives_default() {
    let path = std::env::temp_dir().join("trainingcal_missing_cfg.json");
    let _ = fs::remove_file(&path);

    let cfg = load_cfg(path.to_str().unwrap()).expect("load_cfg");
    assert_eq!(cfg, Cfg::default());
    assert!(!cfg.clamp_intensity);
}

#[test]
fn cfg_round_trips_through_disk() {
    let path = std::env::temp_dir().join("trainingcal_cfg_roundtrip.json");
    let p = path.to_str().unwrap();

    let cfg = Cfg {
        clamp_intensity: true,
    };
    save_cfg(&cfg, p).expect("save_cfg failed");
    let loaded = load_cfg(p).expect("load_cfg failed");
    assert!(loaded.clamp_intensity);

    let _ = fs::remove_file(&path);
}

#[test]
fn partial_cfg_fills_defaults_and_garbage_is_an_error() {
    let dir = std::env::temp_dir();

    let empty = dir.join("trainingcal_cfg_empty_obj.json");
    fs::write(&empty, "{}").unwrap();
    assert_eq!(load_cfg(empty.to_str().unwrap()).unwrap(), Cfg::default());

    let bad = dir.join("trainingcal_cfg_garbage.json");
    fs::write(&bad, "not json").unwrap();
    let err = load_cfg(bad.to_str().unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("parsing cfg"));

    let _ = fs::remove_file(&empty);
    let _ = fs::remove_file(&bad);
}
