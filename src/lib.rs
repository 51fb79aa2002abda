//! Trainload - Cycling Training Load Metrics Server
//!
//! A self-hosted server that loads a JSON workout log into an immutable
//! in-memory snapshot and answers training-load queries (CTL, ATL, TSB)
//! over a line-delimited JSON-RPC tool protocol on stdio.

pub mod config;
pub mod metrics;
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use metrics::training_load::{balance, long_term_load, short_term_load};
pub use metrics::{BalanceReport, FormStatus, RollingMetric};
pub use server::ToolContext;
pub use storage::{Workout, WorkoutLog};
