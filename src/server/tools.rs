//! Tool definitions and dispatch.
//!
//! Seven tools: three training-load metrics (CTL/ATL/TSB) and four
//! repository queries. Every tool returns a JSON payload; faults come back
//! as a payload with an `"error"` field rather than a protocol error, so an
//! internal fault never escapes unrepresented.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::metrics::training_load::{balance, long_term_load, parse_target_date, short_term_load, RollingMetric};
use crate::metrics::MetricsError;
use crate::server::protocol::ToolSpec;
use crate::storage::repository::{StorageError, WorkoutLog};
use crate::storage::workout::Workout;

/// Default result cap for `get_recent_workouts`.
const RECENT_LIMIT: usize = 10;

/// Shared state behind the tools: the data path and a lazily loaded
/// snapshot of the workout log.
///
/// The snapshot is cached after the first successful load; a failed load is
/// never cached, so a fixed data file starts working on the next call.
/// [`ToolContext::clear_cache`] drops the snapshot; the next call builds a
/// fresh one rather than mutating the old value in place.
pub struct ToolContext {
    data_path: PathBuf,
    cache: Mutex<Option<Arc<WorkoutLog>>>,
}

impl ToolContext {
    /// Create a context serving tools from the given data file.
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            cache: Mutex::new(None),
        }
    }

    /// Create a context over an already-built snapshot (used by tests).
    pub fn with_log(data_path: PathBuf, log: WorkoutLog) -> Self {
        Self {
            data_path,
            cache: Mutex::new(Some(Arc::new(log))),
        }
    }

    /// Get the current snapshot, loading it on first use.
    pub fn log(&self) -> Result<Arc<WorkoutLog>, StorageError> {
        let mut cache = self.cache.lock().expect("tool cache poisoned");
        if let Some(log) = cache.as_ref() {
            return Ok(Arc::clone(log));
        }

        let log = Arc::new(WorkoutLog::load(&self.data_path)?);
        *cache = Some(Arc::clone(&log));
        Ok(log)
    }

    /// Drop the cached snapshot so the next call reloads from disk.
    pub fn clear_cache(&self) {
        self.cache.lock().expect("tool cache poisoned").take();
    }
}

/// Tool catalogue for `tools/list`.
pub fn list_tools() -> Vec<ToolSpec> {
    let date_schema = |desc: &str| {
        json!({
            "type": "object",
            "properties": {
                "target_date": {
                    "type": "string",
                    "description": format!("Target date in YYYY-MM-DD format. {desc}")
                }
            },
            "required": ["target_date"]
        })
    };

    vec![
        ToolSpec {
            name: "calculate_ctl",
            description: "Calculate Chronic Training Load (fitness): 42-day exponentially weighted average of TSS.",
            input_schema: date_schema("CTL is computed from all workouts on or before this date."),
        },
        ToolSpec {
            name: "calculate_atl",
            description: "Calculate Acute Training Load (fatigue): 7-day exponentially weighted average of TSS.",
            input_schema: date_schema("ATL is computed from all workouts on or before this date."),
        },
        ToolSpec {
            name: "calculate_tsb",
            description: "Calculate Training Stress Balance (form): CTL minus ATL, with an interpretation.",
            input_schema: date_schema("TSB compares fitness and fatigue as of this date."),
        },
        ToolSpec {
            name: "get_all_workouts",
            description: "List all workouts in the log, optionally sorted by date (newest first).",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "sort_by_date": {
                        "type": "boolean",
                        "description": "Sort newest first (default true)."
                    }
                }
            }),
        },
        ToolSpec {
            name: "get_workout_by_id",
            description: "Fetch a single workout by its id.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "workout_id": { "type": "string", "description": "Workout identifier." }
                },
                "required": ["workout_id"]
            }),
        },
        ToolSpec {
            name: "get_workouts_by_date_range",
            description: "List workouts within an inclusive date range (YYYY-MM-DD bounds, both optional).",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "start_date": { "type": "string", "description": "Earliest date, inclusive." },
                    "end_date": { "type": "string", "description": "Latest date, inclusive." }
                }
            }),
        },
        ToolSpec {
            name: "get_recent_workouts",
            description: "List the most recent workouts, newest first.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "limit": { "type": "integer", "description": "Max results (default 10)." }
                }
            }),
        },
    ]
}

/// Dispatch a `tools/call` by name. Unknown names are the caller's mistake
/// and also come back as an error payload.
pub fn call_tool(ctx: &ToolContext, name: &str, args: &Value) -> Value {
    tracing::debug!(tool = name, "tool call");

    match name {
        "calculate_ctl" => calculate_ctl(ctx, args),
        "calculate_atl" => calculate_atl(ctx, args),
        "calculate_tsb" => calculate_tsb(ctx, args),
        "get_all_workouts" => get_all_workouts(ctx, args),
        "get_workout_by_id" => get_workout_by_id(ctx, args),
        "get_workouts_by_date_range" => get_workouts_by_date_range(ctx, args),
        "get_recent_workouts" => get_recent_workouts(ctx, args),
        other => error_payload(format!("unknown tool: {other}")),
    }
}

fn error_payload(message: impl Into<String>) -> Value {
    json!({ "error": message.into() })
}

fn storage_error(e: StorageError) -> Value {
    // Wrap as the generic upstream-data failure message.
    error_payload(MetricsError::from(e).to_string())
}

fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

fn require_target_date(args: &Value) -> Result<&str, Value> {
    str_arg(args, "target_date")
        .ok_or_else(|| error_payload("missing required parameter: target_date"))
}

/// Shared body of the two base metric tools; they differ only in the
/// metric function and the field label.
fn rolling_metric_tool(
    ctx: &ToolContext,
    args: &Value,
    label: &str,
    compute: fn(&[Workout], &str) -> Result<RollingMetric, MetricsError>,
) -> Value {
    let date = match require_target_date(args) {
        Ok(d) => d,
        Err(e) => return e,
    };

    // Validate the date before touching the repository.
    if let Err(e) = parse_target_date(date) {
        return error_payload(e.to_string());
    }

    let log = match ctx.log() {
        Ok(log) => log,
        Err(e) => return storage_error(e),
    };

    match compute(log.workouts(), date) {
        Ok(metric) => {
            let mut payload = json!({
                "target_date": date,
                "sample_count": metric.sample_count,
            });
            payload[label] = json!(metric.rounded());
            if metric.has_data() {
                payload["date_range"] = json!({
                    "earliest": metric.earliest,
                    "latest": metric.latest,
                });
            } else {
                payload["message"] =
                    json!("no workout data on or before this date; value is not a load estimate");
            }
            payload
        }
        Err(e) => error_payload(e.to_string()),
    }
}

fn calculate_ctl(ctx: &ToolContext, args: &Value) -> Value {
    rolling_metric_tool(ctx, args, "ctl", long_term_load)
}

fn calculate_atl(ctx: &ToolContext, args: &Value) -> Value {
    rolling_metric_tool(ctx, args, "atl", short_term_load)
}

fn calculate_tsb(ctx: &ToolContext, args: &Value) -> Value {
    let date = match require_target_date(args) {
        Ok(d) => d,
        Err(e) => return e,
    };

    if let Err(e) = parse_target_date(date) {
        return error_payload(e.to_string());
    }

    let log = match ctx.log() {
        Ok(log) => log,
        Err(e) => return storage_error(e),
    };

    match balance(log.workouts(), date) {
        Ok(report) => json!({
            "target_date": date,
            "tsb": report.tsb,
            "ctl": report.ctl.rounded(),
            "atl": report.atl.rounded(),
            "interpretation": report.status.interpretation(),
            "sample_count": report.sample_count,
        }),
        Err(e) => error_payload(e.to_string()),
    }
}

fn get_all_workouts(ctx: &ToolContext, args: &Value) -> Value {
    let sort_by_date = args
        .get("sort_by_date")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    match ctx.log() {
        Ok(log) => {
            let workouts = log.get_all(sort_by_date);
            json!({ "count": workouts.len(), "workouts": workouts })
        }
        Err(e) => storage_error(e),
    }
}

fn get_workout_by_id(ctx: &ToolContext, args: &Value) -> Value {
    let Some(id) = str_arg(args, "workout_id") else {
        return error_payload("missing required parameter: workout_id");
    };

    match ctx.log() {
        Ok(log) => match log.get_by_id(id) {
            Some(workout) => json!({ "workout": workout }),
            None => error_payload(format!("workout not found: {id}")),
        },
        Err(e) => storage_error(e),
    }
}

fn get_workouts_by_date_range(ctx: &ToolContext, args: &Value) -> Value {
    let mut bounds = [None, None];
    for (slot, key) in bounds.iter_mut().zip(["start_date", "end_date"]) {
        if let Some(raw) = str_arg(args, key) {
            match parse_target_date(raw) {
                Ok(date) => *slot = Some(date),
                Err(e) => return error_payload(e.to_string()),
            }
        }
    }

    match ctx.log() {
        Ok(log) => {
            let workouts = log.get_by_date_range(bounds[0], bounds[1]);
            json!({ "count": workouts.len(), "workouts": workouts })
        }
        Err(e) => storage_error(e),
    }
}

fn get_recent_workouts(ctx: &ToolContext, args: &Value) -> Value {
    let limit = args
        .get("limit")
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .unwrap_or(RECENT_LIMIT);

    match ctx.log() {
        Ok(log) => {
            let recent: Vec<&Workout> = log.get_all(true).into_iter().take(limit).collect();
            json!({ "count": recent.len(), "workouts": recent })
        }
        Err(e) => storage_error(e),
    }
}
