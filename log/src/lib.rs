//! Logging setup for keytrie hosts.
//!
//! Logs always go to a file at `warn` level (or whatever `KEYTRIE_LOG`/`RUST_LOG` asks for).
//! Console logging (to stderr, so it never mixes with command output) is enabled when either
//! variable is set, or in debug builds.
//!
//! ## Environment Variables
//!
//! 1. **`KEYTRIE_LOG`** (highest priority) - a bare level such as `debug` applies to every
//!    keytrie crate; anything with `=`, `:` or `,` is used as a full filter
//! 2. **`RUST_LOG`** - standard tracing filter
//! 3. **Default** - `warn` globally, `info` for keytrie crates
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/keytrie/logs/keytrie-<pid>.log`. Override with `--log-file`.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const CRATES: [&str; 4] = ["keytrie", "keytrie_config", "keytrie_bin", "keytrie_log"];

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program. Dropping it
/// flushes and stops the background file writer.
pub fn init(config: LogConfig) -> Result<LogGuard, BoxError> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_file_filter()?);

    let console_layer = if user_filter_set() || cfg!(debug_assertions) {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(create_filter()?),
        )
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Initialize logging for tests.
///
/// Output goes through the test harness writer. Calling it more than once, or after another
/// subscriber is installed, is harmless.
pub fn test() {
    let _ = test_init();
}

fn test_init() -> Result<(), BoxError> {
    fmt()
        .with_env_filter(create_filter()?)
        .with_test_writer()
        .try_init()?;
    Ok(())
}

fn user_filter_set() -> bool {
    env::var("KEYTRIE_LOG").is_ok() || env::var("RUST_LOG").is_ok()
}

/// Directory and file name for the log file.
///
/// An override with an extension is taken as a file path; without one it is a directory.
fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("keytrie-{}.log", std::process::id());

    match override_path {
        Some(path) if path.extension().is_some() => {
            let dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            (dir, name)
        },
        Some(dir) => (dir, filename),
        None => {
            let dir = dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("keytrie")
                .join("logs");
            (dir, filename)
        },
    }
}

fn create_file_filter() -> Result<EnvFilter, BoxError> {
    if user_filter_set() {
        return create_filter();
    }
    Ok(EnvFilter::new("warn"))
}

/// `KEYTRIE_LOG` > `RUST_LOG` > defaults.
fn create_filter() -> Result<EnvFilter, BoxError> {
    if let Ok(level) = env::var("KEYTRIE_LOG") {
        return Ok(EnvFilter::try_new(expand_keytrie_log(&level))?);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return Ok(EnvFilter::try_new(rust_log)?);
    }

    Ok(EnvFilter::try_new(crate_directives("info"))?)
}

/// A bare level becomes one directive per keytrie crate; anything else passes through.
fn expand_keytrie_log(value: &str) -> String {
    if value.contains('=') || value.contains(':') || value.contains(',') {
        return value.to_string();
    }
    crate_directives(value)
}

fn crate_directives(level: &str) -> String {
    let mut directives = String::from("warn");
    for name in CRATES {
        directives.push_str(&format!(",{name}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bare_level_expands_to_all_crates() {
        let filter = expand_keytrie_log("debug");
        assert!(filter.starts_with("warn,"));
        for name in CRATES {
            assert!(filter.contains(&format!("{name}=debug")));
        }
    }

    #[test]
    fn full_filter_passes_through() {
        assert_eq!(expand_keytrie_log("keytrie=trace"), "keytrie=trace");
        assert_eq!(expand_keytrie_log("warn,keytrie_bin=info"), "warn,keytrie_bin=info");
    }

    #[test]
    fn override_with_extension_is_a_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("session.log");
        let (dir, name) = resolve_log_path(Some(path));
        assert_eq!(dir, tmp.path());
        assert_eq!(name, "session.log");
    }

    #[test]
    fn override_without_extension_is_a_directory() {
        let tmp = tempdir().unwrap();
        let (dir, name) = resolve_log_path(Some(tmp.path().to_path_buf()));
        assert_eq!(dir, tmp.path());
        assert!(name.starts_with("keytrie-") && name.ends_with(".log"));
    }

    #[test]
    fn test_init_is_idempotent() {
        test();
        test();
        tracing::info!("still fine");
    }
}
