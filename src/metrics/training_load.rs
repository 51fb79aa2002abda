//! Training load metrics (CTL/ATL/TSB).
//!
//! Implements the Performance Management Chart model over the workout log:
//! - CTL (Chronic Training Load, "fitness"): 42-day EWMA of TSS
//! - ATL (Acute Training Load, "fatigue"): 7-day EWMA of TSS
//! - TSB (Training Stress Balance, "form"): CTL - ATL
//!
//! All three are pure functions of an immutable workout snapshot plus a
//! target date; nothing here caches or mutates, so concurrent callers need
//! no coordination.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics::error::{MetricsError, MetricsResult};
use crate::metrics::ewma::ewma;
use crate::metrics::window::select_window;
use crate::storage::workout::Workout;

/// CTL decay time-constant in days.
pub const CTL_DAYS: u32 = 42;
/// ATL decay time-constant in days.
pub const ATL_DAYS: u32 = 7;

/// A rolling training-load value together with the window that produced it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RollingMetric {
    /// Unrounded EWMA value. `0.0` with a zero sample count means "no data",
    /// not a zero-load estimate.
    pub value: f64,
    /// Number of workouts that fed the average.
    pub sample_count: usize,
    /// Date of the oldest workout in the window, if any.
    pub earliest: Option<NaiveDate>,
    /// Date of the newest workout in the window, if any.
    pub latest: Option<NaiveDate>,
}

impl RollingMetric {
    /// Whether any workouts fed this metric. A `false` here is the only way
    /// to tell a no-data sentinel apart from a computed zero.
    pub fn has_data(&self) -> bool {
        self.sample_count > 0
    }

    /// Value rounded to one decimal place for display.
    pub fn rounded(&self) -> f64 {
        round1(self.value)
    }
}

/// Form interpretation of a TSB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    /// TSB above +5: freshness outweighs fatigue.
    Fresh,
    /// TSB within [-5, +5]: load and recovery in balance.
    Neutral,
    /// TSB below -5: fatigue outweighs fitness.
    Fatigued,
}

impl FormStatus {
    /// Classify a balance value.
    ///
    /// The comparisons are deliberately asymmetric (`> 5` then `> -5`), so
    /// both exact boundary values land in [`FormStatus::Neutral`].
    pub fn from_balance(tsb: f64) -> Self {
        if tsb > 5.0 {
            FormStatus::Fresh
        } else if tsb > -5.0 {
            FormStatus::Neutral
        } else {
            FormStatus::Fatigued
        }
    }

    /// Human-readable interpretation for tool responses.
    pub fn interpretation(&self) -> &'static str {
        match self {
            FormStatus::Fresh => "Fresh: form is positive, ready for hard efforts",
            FormStatus::Neutral => "Neutral: training load and recovery are balanced",
            FormStatus::Fatigued => "Fatigued: recent load is high, recovery recommended",
        }
    }
}

/// Training stress balance for a date, with its inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BalanceReport {
    /// TSB, rounded to one decimal place.
    pub tsb: f64,
    /// The underlying chronic load metric.
    pub ctl: RollingMetric,
    /// The underlying acute load metric.
    pub atl: RollingMetric,
    /// Form classification of the balance value.
    pub status: FormStatus,
    /// Max of the two underlying sample counts.
    pub sample_count: usize,
}

/// Parse a `YYYY-MM-DD` target date, rejecting anything else before any
/// data is touched.
pub fn parse_target_date(raw: &str) -> MetricsResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| MetricsError::InvalidDate {
        input: raw.to_string(),
    })
}

/// Rolling EWMA load ending at `target_date` with the given decay constant.
///
/// CTL and ATL are both this function; they differ only in `lookback_days`,
/// which doubles as the EWMA time-constant.
pub fn rolling_load(workouts: &[Workout], target_date: NaiveDate, lookback_days: u32) -> RollingMetric {
    let window = select_window(workouts, target_date, lookback_days);
    let values: Vec<f64> = window.iter().map(|w| f64::from(w.tss)).collect();

    RollingMetric {
        value: ewma(&values, f64::from(lookback_days)),
        sample_count: window.len(),
        earliest: window.first().map(|w| w.date),
        latest: window.last().map(|w| w.date),
    }
}

/// Long-term load (CTL, 42-day) for a `YYYY-MM-DD` target date.
pub fn long_term_load(workouts: &[Workout], target_date: &str) -> MetricsResult<RollingMetric> {
    let date = parse_target_date(target_date)?;
    Ok(rolling_load(workouts, date, CTL_DAYS))
}

/// Short-term load (ATL, 7-day) for a `YYYY-MM-DD` target date.
pub fn short_term_load(workouts: &[Workout], target_date: &str) -> MetricsResult<RollingMetric> {
    let date = parse_target_date(target_date)?;
    Ok(rolling_load(workouts, date, ATL_DAYS))
}

/// Training stress balance (TSB = CTL - ATL) for a `YYYY-MM-DD` target date.
///
/// Composes the two base metrics for the same date. If either fails, the
/// first failure wins: the long-term error is checked before the short-term
/// one and propagates unchanged.
pub fn balance(workouts: &[Workout], target_date: &str) -> MetricsResult<BalanceReport> {
    let ctl = long_term_load(workouts, target_date)?;
    let atl = short_term_load(workouts, target_date)?;

    let tsb = round1(ctl.value - atl.value);

    Ok(BalanceReport {
        tsb,
        ctl,
        atl,
        status: FormStatus::from_balance(tsb),
        sample_count: ctl.sample_count.max(atl.sample_count),
    })
}

/// Round to one decimal place. Display-layer rounding only; the EWMA fold
/// itself runs at full f64 precision.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
