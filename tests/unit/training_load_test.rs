//! Unit tests for the training-load facade.

use chrono::NaiveDate;
use trainload::metrics::training_load::{round1, CTL_DAYS, ATL_DAYS};
use trainload::metrics::{MetricsError, FormStatus};
use trainload::storage::workout::Workout;
use trainload::{balance, long_term_load, short_term_load};

fn workouts_ending(target: &str, loads: &[u32]) -> Vec<Workout> {
    let end = NaiveDate::parse_from_str(target, "%Y-%m-%d").unwrap();
    loads
        .iter()
        .rev()
        .enumerate()
        .map(|(back, &tss)| Workout {
            id: format!("w{back}"),
            date: end - chrono::Duration::days(back as i64),
            duration_minutes: 60,
            distance_km: 30.0,
            avg_power_watts: 200,
            tss,
            workout_type: "endurance".to_string(),
        })
        .collect()
}

#[test]
fn test_decay_constants() {
    assert_eq!(CTL_DAYS, 42);
    assert_eq!(ATL_DAYS, 7);
}

#[test]
fn test_consecutive_days_metrics_in_load_range() {
    let workouts = workouts_ending("2024-05-10", &[100, 90, 110, 85, 95]);

    let ctl = long_term_load(&workouts, "2024-05-10").unwrap();
    let atl = short_term_load(&workouts, "2024-05-10").unwrap();

    for metric in [ctl, atl] {
        assert_eq!(metric.sample_count, 5);
        assert!(metric.value >= 80.0 && metric.value <= 120.0, "{}", metric.value);
    }
}

#[test]
fn test_spike_sequence_atl_exceeds_ctl_and_baseline() {
    let workouts = workouts_ending("2024-05-10", &[50, 50, 50, 50, 100]);

    let ctl = long_term_load(&workouts, "2024-05-10").unwrap();
    let atl = short_term_load(&workouts, "2024-05-10").unwrap();

    assert!(atl.value > ctl.value);
    assert!(atl.value > 50.0);
}

#[test]
fn test_balance_identity() {
    let workouts = workouts_ending("2024-05-10", &[80, 95, 60, 110, 70, 90]);

    let ctl = long_term_load(&workouts, "2024-05-10").unwrap();
    let atl = short_term_load(&workouts, "2024-05-10").unwrap();
    let report = balance(&workouts, "2024-05-10").unwrap();

    assert_eq!(report.tsb, round1(ctl.value - atl.value));
}

#[test]
fn test_balance_sample_count_is_max_of_components() {
    let workouts = workouts_ending("2024-05-10", &[80, 95, 60]);
    let report = balance(&workouts, "2024-05-10").unwrap();
    assert_eq!(
        report.sample_count,
        report.ctl.sample_count.max(report.atl.sample_count)
    );
}

#[test]
fn test_invalid_date_error_for_every_operation() {
    let err = long_term_load(&[], "2024-13-40").unwrap_err();
    assert!(matches!(err, MetricsError::InvalidDate { .. }));

    let err = short_term_load(&[], "yesterday").unwrap_err();
    assert!(err.to_string().contains("yesterday"));

    let err = balance(&[], "01/15/2024").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("01/15/2024") && msg.contains("YYYY-MM-DD"));
}

#[test]
fn test_empty_history_yields_no_data_sentinel() {
    let report = balance(&[], "2024-05-10").unwrap();
    assert_eq!(report.tsb, 0.0);
    assert_eq!(report.sample_count, 0);
    assert!(!report.ctl.has_data());
    assert!(!report.atl.has_data());
    assert_eq!(report.status, FormStatus::Neutral);
}

#[test]
fn test_boundary_balances_classify_neutral() {
    assert_eq!(FormStatus::from_balance(5.0), FormStatus::Neutral);
    assert_eq!(FormStatus::from_balance(-5.0), FormStatus::Neutral);
    assert_eq!(FormStatus::from_balance(5.1), FormStatus::Fresh);
    assert_eq!(FormStatus::from_balance(-5.1), FormStatus::Fatigued);
}

#[test]
fn test_interpretations_are_distinct() {
    let texts = [
        FormStatus::Fresh.interpretation(),
        FormStatus::Neutral.interpretation(),
        FormStatus::Fatigued.interpretation(),
    ];
    assert_ne!(texts[0], texts[1]);
    assert_ne!(texts[1], texts[2]);
}
