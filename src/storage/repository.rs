//! Flat-file workout repository.
//!
//! The workout log is loaded once from a JSON array into an immutable
//! [`WorkoutLog`] snapshot. Queries borrow from the snapshot; a reload
//! produces a new snapshot value rather than mutating a shared one, so
//! readers can never observe a half-updated set.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::storage::workout::Workout;

/// Errors that can occur while loading the workout log.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The data file does not exist.
    #[error("workout data file not found: {0}")]
    NotFound(PathBuf),

    /// The data file could not be read.
    #[error("error reading workout data file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON, or not a JSON array.
    #[error("invalid JSON in workout data file: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed to parse or validate. The whole load is rejected;
    /// bad rows are never skipped silently.
    #[error("invalid workout at index {index}: {reason}")]
    InvalidWorkout {
        /// Zero-based position of the record in the input array.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// An immutable snapshot of the workout log.
#[derive(Debug, Clone)]
pub struct WorkoutLog {
    workouts: Vec<Workout>,
}

impl WorkoutLog {
    /// Build a snapshot from already-parsed records, validating each one.
    /// Any invalid record rejects the whole set.
    pub fn new(workouts: Vec<Workout>) -> Result<Self, StorageError> {
        for (index, workout) in workouts.iter().enumerate() {
            workout
                .validate()
                .map_err(|reason| StorageError::InvalidWorkout {
                    index,
                    reason: reason.to_string(),
                })?;
        }
        Ok(Self { workouts })
    }

    /// Load and validate the log from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }

        let data = fs::read_to_string(path)?;
        let log = Self::from_json(&data)?;

        tracing::info!(
            path = %path.display(),
            count = log.len(),
            "loaded workout log"
        );

        Ok(log)
    }

    /// Parse and validate a JSON array of workout records.
    pub fn from_json(data: &str) -> Result<Self, StorageError> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(data)?;

        let mut workouts = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            let workout: Workout =
                serde_json::from_value(value).map_err(|e| StorageError::InvalidWorkout {
                    index,
                    reason: e.to_string(),
                })?;
            workouts.push(workout);
        }

        Self::new(workouts)
    }

    /// Number of workouts in the snapshot.
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the snapshot holds no workouts.
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// All workouts in input order. This is what the metrics engine consumes.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// All workouts, optionally sorted by date (newest first).
    pub fn get_all(&self, ordered: bool) -> Vec<&Workout> {
        let mut all: Vec<&Workout> = self.workouts.iter().collect();
        if ordered {
            all.sort_by(|a, b| b.date.cmp(&a.date));
        }
        all
    }

    /// Look up a workout by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Workouts within an inclusive date range, newest first. A `None` bound
    /// is unbounded on that side.
    pub fn get_by_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Vec<&Workout> {
        let mut filtered: Vec<&Workout> = self
            .workouts
            .iter()
            .filter(|w| start.map_or(true, |s| w.date >= s) && end.map_or(true, |e| w.date <= e))
            .collect();
        filtered.sort_by(|a, b| b.date.cmp(&a.date));
        filtered
    }
}
