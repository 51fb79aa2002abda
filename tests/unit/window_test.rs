//! Unit tests for window selection.

use chrono::NaiveDate;
use trainload::metrics::window::select_window;
use trainload::storage::workout::Workout;

fn workout(id: &str, date: &str, tss: u32) -> Workout {
    Workout {
        id: id.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        duration_minutes: 60,
        distance_km: 30.0,
        avg_power_watts: 200,
        tss,
        workout_type: "endurance".to_string(),
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_no_future_event_ever_selected() {
    let workouts = vec![
        workout("past", "2024-05-01", 80),
        workout("today", "2024-05-10", 90),
        workout("tomorrow", "2024-05-11", 100),
        workout("next-month", "2024-06-10", 110),
    ];

    let window = select_window(&workouts, date("2024-05-10"), 42);
    let ids: Vec<&str> = window.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["past", "today"]);
}

#[test]
fn test_target_date_event_always_selected() {
    for lookback in [7, 42] {
        let workouts = vec![workout("on-date", "2024-05-10", 90)];
        let window = select_window(&workouts, date("2024-05-10"), lookback);
        assert_eq!(window.len(), 1);
    }
}

#[test]
fn test_selection_sorted_ascending_regardless_of_input_order() {
    let workouts = vec![
        workout("c", "2024-05-03", 70),
        workout("a", "2024-05-01", 80),
        workout("b", "2024-05-02", 90),
    ];

    let window = select_window(&workouts, date("2024-05-10"), 7);
    let dates: Vec<NaiveDate> = window.iter().map(|w| w.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn test_short_history_used_in_full_without_padding() {
    // Two days of history against a 42-day constant: both are used, no
    // error, no padding.
    let workouts = vec![
        workout("d1", "2024-05-09", 60),
        workout("d2", "2024-05-10", 70),
    ];

    let window = select_window(&workouts, date("2024-05-10"), 42);
    assert_eq!(window.len(), 2);
}

#[test]
fn test_history_older_than_lookback_retained() {
    let workouts = vec![
        workout("very-old", "2023-01-01", 100),
        workout("recent", "2024-05-09", 60),
    ];

    let window = select_window(&workouts, date("2024-05-10"), 7);
    assert_eq!(window.len(), 2);
    assert_eq!(window[0].id, "very-old");
}
