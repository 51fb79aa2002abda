//! Exponentially weighted moving average over training-stress values.
//!
//! This is the numeric core of the Performance Management Chart model:
//! CTL and ATL are the same fold with different decay time-constants.

/// Compute the EWMA of `values` with the given decay time-constant in days.
///
/// `values` must be in chronological order (oldest first); the fold is
/// order-sensitive and a shuffled input produces a wrong but finite result.
///
/// The decay factor is `alpha = 1 - exp(-1/time_constant)`, so a larger
/// time-constant weighs history more heavily. The running average is seeded
/// with the first value rather than zero, which avoids a cold-start bias and
/// makes a single-element input return that element unchanged.
///
/// Returns `0.0` for an empty input. That is a "no data" sentinel, not a
/// zero-load estimate; callers distinguish the two via their sample count.
pub fn ewma(values: &[f64], time_constant: f64) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return 0.0;
    };

    let alpha = 1.0 - (-1.0 / time_constant).exp();

    let mut avg = first;
    for &value in rest {
        avg = alpha * value + (1.0 - alpha) * avg;
    }

    avg
}
