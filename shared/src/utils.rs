//! Shared utilities
//!
use std::time::Duration;

use log::info;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // Setup from the environment (RUST_LOG)
        .with_env_filter(EnvFilter::from_default_env())
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();
}

/// Builds the single JSON line a function emits when an invocation completes.
///
/// `fields` must be a JSON object; its entries are merged after the common
/// envelope, so they win on key collisions.
pub fn service_log_line(service: &str, elapsed: Duration, fields: Value) -> Value {
    let time_ms = i64::try_from(elapsed.as_millis()).ok();
    let mut log = json!({
        "service_log": true,
        "type": "service_log",
        "service": service,
        "time": time_ms,
    });
    if let (Some(log), Value::Object(fields)) = (log.as_object_mut(), fields) {
        log.extend(fields);
    }
    log
}

pub fn service_log(service: &str, elapsed: Duration, fields: Value) {
    let log = service_log_line(service, elapsed, fields);
    info!("{}", serde_json::to_string(&log).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_log_line_merges_fields() {
        let line = service_log_line(
            "employee_ingest",
            Duration::from_millis(42),
            json!({ "rows_written": 2, "service": "override" }),
        );

        assert_eq!(line["time"], 42);
        assert_eq!(line["rows_written"], 2);
        assert_eq!(line["service"], "override");
        assert_eq!(line["service_log"], true);
    }

    #[test]
    fn service_log_line_ignores_non_object_fields() {
        let line = service_log_line("svc", Duration::ZERO, json!([1, 2]));
        assert_eq!(line.as_object().unwrap().len(), 4);
    }
}
