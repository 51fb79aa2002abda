//! Date-window selection for rolling training-load calculations.

use chrono::NaiveDate;

use crate::storage::workout::Workout;

/// Select the workouts relevant to a rolling calculation ending at
/// `target_date`, in chronological order (oldest first).
///
/// The filter is inclusive at calendar-day granularity: a workout dated
/// exactly on `target_date` is always part of the window, anything later
/// never is. The sort is stable, so same-day workouts keep their input
/// order; callers must not rely on any particular order within a day.
///
/// `lookback_days` is advisory only. It is the decay time-constant the EWMA
/// will be run with, not a hard cutoff: when fewer than `lookback_days` days
/// of history exist the whole history is used (new athletes get a
/// provisional metric), and older events are never dropped — the decay
/// constant alone decides how much they matter.
pub fn select_window(
    workouts: &[Workout],
    target_date: NaiveDate,
    lookback_days: u32,
) -> Vec<&Workout> {
    let mut window: Vec<&Workout> = workouts
        .iter()
        .filter(|w| w.date <= target_date)
        .collect();

    window.sort_by_key(|w| w.date);

    tracing::trace!(
        %target_date,
        lookback_days,
        selected = window.len(),
        "selected rolling-load window"
    );

    window
}
