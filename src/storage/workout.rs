//! Workout record model and validation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A single recorded workout, as supplied by the flat-file log.
///
/// Immutable once loaded. Non-negativity of power, distance and TSS is
/// encoded in the field types; the remaining constraints live in
/// [`Workout::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier.
    pub id: String,
    /// Calendar date of the workout. Time-of-day is ignored for windowing,
    /// so a datetime suffix on input is accepted and truncated.
    #[serde(deserialize_with = "deserialize_workout_date")]
    pub date: NaiveDate,
    /// Duration in minutes; must be positive.
    pub duration_minutes: u32,
    /// Distance in kilometres.
    pub distance_km: f64,
    /// Average power in watts.
    pub avg_power_watts: u32,
    /// Training Stress Score, the scalar load signal for the metrics engine.
    pub tss: u32,
    /// Workout type label (e.g. "endurance", "interval").
    pub workout_type: String,
}

impl Workout {
    /// Check the constraints the type system cannot encode.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.id.is_empty() {
            return Err("id must not be empty");
        }
        if self.duration_minutes == 0 {
            return Err("duration_minutes must be positive");
        }
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err("distance_km must be a non-negative number");
        }
        if self.workout_type.is_empty() {
            return Err("workout_type must not be empty");
        }
        Ok(())
    }
}

/// Parse a workout date from either `YYYY-MM-DD` or an ISO datetime.
pub fn parse_workout_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    Err(format!("invalid date format: {raw}"))
}

fn deserialize_workout_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_workout_date(&raw).map_err(serde::de::Error::custom)
}
