use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Initialise logging at `debug` level when `debug` is set, `info` otherwise.
/// `RUST_LOG` only takes effect with debug logging enabled.
///
/// When `log_file` is given, output goes to that file through a background
/// writer instead of stdout.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_os_string())
                .unwrap_or_else(|| "radial_menu.log".into());
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            match builder.with_ansi(false).with_writer(writer).try_init() {
                Ok(()) => {
                    let _ = FILE_GUARD.set(guard);
                }
                Err(err) => tracing::warn!(
                    %err,
                    path = %path.display(),
                    "logger already initialised; log file not attached"
                ),
            }
        }
        None => {
            if let Err(err) = builder.try_init() {
                tracing::debug!(%err, "logger already initialised");
            }
        }
    }
}
