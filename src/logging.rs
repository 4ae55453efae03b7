//! File logger for TextForm
//!
//! The terminal UI owns stdout/stderr while it runs, so log records go to a
//! file instead. Installed once as the `log` facade's global logger.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Logger writing `[timestamp] [LEVEL] [target] message` lines to a file
pub struct FileLogger {
    file: Mutex<Option<File>>,
    level: LevelFilter,
}

impl FileLogger {
    /// Open (and truncate) the log file. A file that cannot be opened
    /// leaves the logger installed but silent.
    fn new(path: &Path, level: LevelFilter) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(path)
            .ok();

        Self {
            file: Mutex::new(file),
            level,
        }
    }

    /// Default log file path (same directory as executable)
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("textform.log")
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = format!(
            "[{}] [{:5}] [{}] {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );

        if let Some(ref mut file) = *self.file.lock() {
            let _ = file.write_all(entry.as_bytes());
        }
    }

    fn flush(&self) {
        if let Some(ref mut file) = *self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`)
pub fn parse_level(name: &str) -> crate::Result<LevelFilter> {
    name.parse::<LevelFilter>()
        .map_err(|_| crate::TextFormError::InvalidLogLevel(name.to_string()))
}

/// Install the global file logger
pub fn init(path: Option<&Path>, level: LevelFilter) -> crate::Result<PathBuf> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(FileLogger::default_path);

    log::set_boxed_logger(Box::new(FileLogger::new(&path, level)))
        .map_err(|_| crate::TextFormError::LoggerAlreadySet)?;
    log::set_max_level(level);

    Ok(path)
}

/// Flush the log file
pub fn flush() {
    log::logger().flush();
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    log::info!(target: "---", "========== {} ==========", label);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("OFF").unwrap(), LevelFilter::Off);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(matches!(
            parse_level("loud"),
            Err(crate::TextFormError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn writes_formatted_records() {
        let path = std::env::temp_dir().join(format!("textform-log-{}.log", std::process::id()));
        let logger = FileLogger::new(&path, LevelFilter::Info);

        logger.log(
            &Record::builder()
                .level(log::Level::Info)
                .target("form")
                .args(format_args!("appended"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(log::Level::Debug)
                .target("form")
                .args(format_args!("filtered out"))
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(contents.contains("[INFO ] [form] appended"));
        assert!(!contents.contains("filtered out"));
    }
}
