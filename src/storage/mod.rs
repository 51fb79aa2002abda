//! Storage module: the workout model and the flat-file repository.

pub mod repository;
pub mod workout;

pub use repository::{StorageError, WorkoutLog};
pub use workout::Workout;
