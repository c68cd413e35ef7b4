use std::fs::{File, OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

pub const DEFAULT_LOG_DIR: &str = "tmp";
const LOG_BASENAME: &str = "dataviz";

pub fn log_path(dir: &Path) -> PathBuf {
    let ts_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let pid = std::process::id();
    dir.join(format!("{LOG_BASENAME}_{ts_ms}_pid{pid}.log"))
}

fn open_log_file(dir: &Path) -> Option<(PathBuf, File)> {
    if let Err(err) = create_dir_all(dir) {
        eprintln!("[log] failed to create log dir {:?}: {err}", dir);
        return None;
    }
    let path = log_path(dir);
    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
    {
        Ok(file) => Some((path, file)),
        Err(err) => {
            eprintln!("[log] failed to open log file {:?}: {err}", path);
            None
        }
    }
}

/// Installs the global subscriber, writing to stdout and to a per-process
/// file under `dir`. Returns the file path, or `None` when only stdout is
/// in use. A second call keeps the first subscriber.
pub fn init(dir: &Path, level: &str) -> Option<PathBuf> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|err| {
        eprintln!("[log] invalid log level {level:?}: {err}");
        EnvFilter::new("info")
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match open_log_file(dir) {
        Some((path, file)) => {
            let writer = std::io::stdout.and(Mutex::new(file));
            let _ = builder.with_ansi(false).with_writer(writer).try_init();
            Some(path)
        }
        None => {
            let _ = builder.try_init();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_name_carries_base_and_pid() {
        let path = log_path(Path::new("tmp"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("dataviz_"));
        assert!(name.ends_with(&format!("_pid{}.log", std::process::id())));
        assert_eq!(path.parent(), Some(Path::new("tmp")));
    }
}
