//! Mock workout data generator.
//!
//! Emits a JSON array of synthetic cycling workouts following a periodized
//! training pattern (three load weeks, one recovery week), suitable as a
//! workout log for the trainload server.
//!
//! Usage: `gen-workouts [output-path] [num-workouts]`

use std::path::PathBuf;

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use uuid::Uuid;

/// Day-level plan entries over the generated span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayPattern {
    Rest,
    RecoveryWeek,
    Build,
    Intensity,
}

/// TSS from duration, power and a per-type intensity multiplier, clamped to
/// a plausible 20..=150 range.
fn calculate_tss(duration_minutes: u32, avg_power_watts: u32, workout_type: &str) -> u32 {
    let base = (duration_minutes as f64 * avg_power_watts as f64) / 200.0;

    let multiplier = match workout_type {
        "recovery" => 0.4,
        "endurance" => 0.6,
        "tempo" => 0.8,
        "threshold" => 1.0,
        "interval" => 1.2,
        "race" => 1.3,
        _ => 0.6,
    };

    ((base * multiplier) as u32).clamp(20, 150)
}

fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

fn generate_workout(rng: &mut StdRng, date: NaiveDate, pattern: DayPattern) -> serde_json::Value {
    let (workout_type, duration_range, power_range) = match pattern {
        DayPattern::RecoveryWeek => (pick(rng, &["recovery", "endurance"]), 30..=90u32, 100..=180u32),
        DayPattern::Build => (
            pick(rng, &["endurance", "tempo", "threshold"]),
            60..=180,
            150..=250,
        ),
        DayPattern::Intensity => (
            pick(rng, &["threshold", "interval", "race"]),
            45..=120,
            200..=300,
        ),
        DayPattern::Rest => unreachable!("rest days generate no workout"),
    };

    let duration_minutes = rng.gen_range(duration_range);
    let avg_power_watts = rng.gen_range(power_range);

    let avg_speed_kmh =
        20.0 + (avg_power_watts as f64 - 150.0) / 10.0 + rng.gen_range(-3.0..3.0);
    let distance_km = ((duration_minutes as f64 / 60.0) * avg_speed_kmh * 10.0).round() / 10.0;

    json!({
        "id": Uuid::new_v4().to_string(),
        "date": date.format("%Y-%m-%d").to_string(),
        "duration_minutes": duration_minutes,
        "distance_km": distance_km.max(0.0),
        "avg_power_watts": avg_power_watts,
        "tss": calculate_tss(duration_minutes, avg_power_watts, workout_type),
        "workout_type": workout_type,
    })
}

/// Periodized plan: two build weeks, an intensity week, then a recovery
/// week, repeated.
fn training_plan(num_days: usize) -> Vec<DayPattern> {
    use DayPattern::*;

    let mut plan = Vec::with_capacity(num_days + 7);
    for week in 0.. {
        if plan.len() >= num_days {
            break;
        }
        let weekly: [DayPattern; 7] = match week % 4 {
            3 => [
                RecoveryWeek,
                RecoveryWeek,
                RecoveryWeek,
                RecoveryWeek,
                Rest,
                Rest,
                Rest,
            ],
            2 => [Intensity, RecoveryWeek, Build, Intensity, Rest, Build, Rest],
            _ => [
                Build,
                RecoveryWeek,
                Build,
                Intensity,
                Rest,
                Build,
                RecoveryWeek,
            ],
        };
        plan.extend_from_slice(&weekly);
    }
    plan.truncate(num_days);
    plan
}

fn generate_mock_workouts(num_workouts: usize) -> Vec<serde_json::Value> {
    // Fixed seed so regenerated data is stable across runs.
    let mut rng = StdRng::seed_from_u64(42);

    let days_span = 90usize;
    let end_date = Utc::now().date_naive();
    let start_date = end_date - Duration::days(days_span as i64);
    let plan = training_plan(days_span);

    let mut workouts = Vec::with_capacity(num_workouts);
    for (day, pattern) in plan.into_iter().enumerate() {
        if workouts.len() >= num_workouts {
            break;
        }
        if pattern == DayPattern::Rest {
            continue;
        }
        let date = start_date + Duration::days(day as i64);
        workouts.push(generate_workout(&mut rng, date, pattern));
    }

    workouts
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("workouts.json"));
    let num_workouts: usize = match args.next() {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("num-workouts must be an integer, got '{raw}'"))?,
        None => 50,
    };

    let workouts = generate_mock_workouts(num_workouts);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output, serde_json::to_string_pretty(&workouts)?)?;

    eprintln!("wrote {} workouts to {}", workouts.len(), output.display());
    Ok(())
}
