//! Unit tests for the flat-file workout repository.

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use trainload::storage::repository::{StorageError, WorkoutLog};

const SAMPLE: &str = r#"[
    {"id": "w1", "date": "2024-02-01", "duration_minutes": 60,
     "distance_km": 28.4, "avg_power_watts": 190, "tss": 62,
     "workout_type": "endurance"},
    {"id": "w2", "date": "2024-02-03T06:45:00", "duration_minutes": 95,
     "distance_km": 44.0, "avg_power_watts": 215, "tss": 98,
     "workout_type": "threshold"},
    {"id": "w3", "date": "2024-02-02", "duration_minutes": 45,
     "distance_km": 18.0, "avg_power_watts": 140, "tss": 25,
     "workout_type": "recovery"}
]"#;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{SAMPLE}").unwrap();

    let log = WorkoutLog::load(file.path()).unwrap();
    assert_eq!(log.len(), 3);
    // Datetime form truncated to its calendar date.
    assert_eq!(
        log.get_by_id("w2").unwrap().date,
        NaiveDate::from_ymd_opt(2024, 2, 3).unwrap()
    );
}

#[test]
fn test_missing_file_is_not_found() {
    let err = WorkoutLog::load(std::path::Path::new("/no/such/file.json")).unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
    assert!(err.to_string().contains("file.json"));
}

#[test]
fn test_invalid_json_fails_closed() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();
    assert!(matches!(
        WorkoutLog::load(file.path()).unwrap_err(),
        StorageError::Json(_)
    ));
}

#[test]
fn test_one_bad_record_rejects_whole_load() {
    let data = r#"[
        {"id": "ok", "date": "2024-02-01", "duration_minutes": 60,
         "distance_km": 28.4, "avg_power_watts": 190, "tss": 62,
         "workout_type": "endurance"},
        {"id": "", "date": "2024-02-02", "duration_minutes": 60,
         "distance_km": 28.4, "avg_power_watts": 190, "tss": 62,
         "workout_type": "endurance"}
    ]"#;

    let err = WorkoutLog::from_json(data).unwrap_err();
    match err {
        StorageError::InvalidWorkout { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("id"));
        }
        other => panic!("expected InvalidWorkout, got {other:?}"),
    }
}

#[test]
fn test_queries_over_snapshot() {
    let log = WorkoutLog::from_json(SAMPLE).unwrap();

    let ordered: Vec<&str> = log.get_all(true).iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ordered, vec!["w2", "w3", "w1"]);

    let ranged = log.get_by_date_range(
        NaiveDate::from_ymd_opt(2024, 2, 2),
        NaiveDate::from_ymd_opt(2024, 2, 3),
    );
    assert_eq!(ranged.len(), 2);

    assert!(log.get_by_id("w9").is_none());
}

#[test]
fn test_empty_array_is_valid_empty_log() {
    let log = WorkoutLog::from_json("[]").unwrap();
    assert!(log.is_empty());
    assert!(log.get_all(true).is_empty());
}
