//! Diagnostic logging to a file
//!
//! The terminal is owned by the UI while the app runs, so every log line goes
//! through a non-blocking file writer instead.
//! Precedence: RUST_LOG env var > `--log-level` > "info". The flag takes a
//! bare level or a full directive list.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Turn `--log-level` into filter directives.
///
/// A bare level (`debug`) applies to this crate only; anything else is taken
/// as a full directive list (`weatherapp=debug,reqwest=info`, `hyper`).
pub fn filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.parse::<LevelFilter>().is_ok() {
        format!("weatherapp={level}")
    } else {
        level.to_string()
    }
}

/// Split a log path into the directory and file name the appender wants
pub fn split_log_path(path: &Path) -> io::Result<(PathBuf, OsString)> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path {} has no file name", path.display()),
        )
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name.to_os_string()))
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines get flushed.
pub fn init(log_file: &Path, level: &str) -> io::Result<WorkerGuard> {
    let (dir, file_name) = split_log_path(log_file)?;
    std::fs::create_dir_all(&dir)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directives(level)).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid log filter {level:?}: {e}"),
            )
        })?,
    };

    let file_appender = tracing_appender::rolling::never(&dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| io::Error::other(format!("logging already initialized: {e}")))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_is_scoped_to_the_crate() {
        assert_eq!(filter_directives("info"), "weatherapp=info");
        assert_eq!(filter_directives(" DEBUG "), "weatherapp=DEBUG");
    }

    #[test]
    fn test_directive_list_is_kept_whole() {
        assert_eq!(
            filter_directives("weatherapp=debug,reqwest=info"),
            "weatherapp=debug,reqwest=info"
        );
        assert_eq!(filter_directives("info,hyper=warn"), "info,hyper=warn");
        assert_eq!(filter_directives("hyper"), "hyper");
    }

    #[test]
    fn test_directive_lists_parse() {
        for value in ["trace", "weatherapp=debug,reqwest=info", "info,hyper=warn"] {
            assert!(
                EnvFilter::try_new(filter_directives(value)).is_ok(),
                "{value}"
            );
        }
    }

    #[test]
    fn test_split_bare_file_name() {
        let (dir, name) = split_log_path(Path::new("weatherapp.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, OsString::from("weatherapp.log"));
    }

    #[test]
    fn test_split_nested_path() {
        let (dir, name) = split_log_path(Path::new("/var/log/weather/app.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/weather"));
        assert_eq!(name, OsString::from("app.log"));
    }

    #[test]
    fn test_split_rejects_directory_only() {
        let err = split_log_path(Path::new("/")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
