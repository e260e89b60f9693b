use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialise logging. Without debug logging the level is forced to `info`;
/// with it the default is `debug` and `RUST_LOG` may override it.
///
/// When `log_file` is given, output is appended to that file instead of
/// stderr. Calling this more than once keeps the first subscriber.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let filter = build_filter(debug);

    match log_file.as_deref().and_then(split_log_path) {
        Some((dir, file_name)) => {
            let appender = tracing_appender::rolling::never(dir, file_name);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(appender)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

fn build_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

fn split_log_path(path: &std::path::Path) -> Option<(PathBuf, std::ffi::OsString)> {
    let file_name = path.file_name()?.to_os_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((dir, file_name))
}
