//! Metrics module for training-load calculations.

pub mod error;
pub mod ewma;
pub mod training_load;
pub mod window;

pub use error::{MetricsError, MetricsResult};
pub use training_load::{
    balance, long_term_load, short_term_load, BalanceReport, FormStatus, RollingMetric, ATL_DAYS,
    CTL_DAYS,
};
