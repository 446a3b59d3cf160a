//! Logging Infrastructure
//!
//! Console output goes to stderr so stdout stays reserved for command
//! output. With a log directory:
//! - Daily rotating application logs (deleted after 14 days)
//! - Permanent audit logs for payroll operations (never deleted)

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Application logs older than this are removed
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

/// Clean up old application log files (older than 14 days)
///
/// Only `app/app.YYYY-MM-DD` files are considered; audit logs are kept.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let cutoff = chrono::Local::now().date_naive() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);

    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // tracing-appender 的每日文件名: app.YYYY-MM-DD
        let Some(date_part) = name.strip_prefix("app.") else {
            continue;
        };
        if let Ok(date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            removed += 1;
        }
    }

    Ok(removed)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug"); `RUST_LOG` takes precedence
/// * `json_format` - JSON console output instead of the pretty format
/// * `log_dir` - Optional directory for file logging
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let json_console = json_format.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
    });
    let pretty_console = (!json_format).then(|| {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_writer(std::io::stderr)
    });

    let (app_layer, audit_layer) = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            let app_log_dir = log_dir.join("app");
            let audit_log_dir = log_dir.join("audit");
            fs::create_dir_all(&app_log_dir)?;
            fs::create_dir_all(&audit_log_dir)?;

            // Standard application logs (rotated daily, subject to 14-day cleanup)
            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
            let app_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() != "audit"
                }));

            // Permanent audit logs (never deleted)
            let audit_log = RollingFileAppender::new(Rotation::DAILY, audit_log_dir, "audit");
            let audit_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(audit_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() == "audit"
                }));

            (Some(app_layer), Some(audit_layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_console)
        .with(pretty_console)
        .with(app_layer)
        .with(audit_layer)
        .try_init()?;

    if let Some(dir) = log_dir
        && let Err(e) = cleanup_old_logs(Path::new(dir))
    {
        tracing::warn!(error = %e, "Failed to cleanup old logs");
    }

    Ok(())
}

/// Audit log helper - records payroll and other money-moving operations
///
/// Audit logs are stored in `audit/audit.YYYY-MM-DD` and never cleaned up.
///
/// # Examples
/// ```ignore
/// audit_log!("hr-admin", "generate", "payroll:2026-10");
/// audit_log!("hr-admin", "approve", "payroll:42", "approved after review");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($actor:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            actor = $actor,
            action = $action,
            resource = $resource,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($actor:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            actor = $actor,
            action = $action,
            resource = $resource,
            details = $details,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_removes_only_old_app_logs() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app");
        let audit = dir.path().join("audit");
        fs::create_dir_all(&app).unwrap();
        fs::create_dir_all(&audit).unwrap();

        let today = chrono::Local::now().date_naive();
        let old = today - chrono::Duration::days(30);
        fs::write(app.join(format!("app.{}", old.format("%Y-%m-%d"))), "x").unwrap();
        fs::write(app.join(format!("app.{}", today.format("%Y-%m-%d"))), "x").unwrap();
        fs::write(app.join("notes.txt"), "x").unwrap();
        fs::write(audit.join(format!("audit.{}", old.format("%Y-%m-%d"))), "x").unwrap();

        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 1);
        assert_eq!(fs::read_dir(&app).unwrap().count(), 2);
        assert_eq!(fs::read_dir(&audit).unwrap().count(), 1);
    }

    #[test]
    fn test_cleanup_without_app_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 0);
    }
}
