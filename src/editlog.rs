//! File-backed edit event logging.
//!
//! When enabled via `--edit-log PATH`, every applied or dropped edit event
//! is appended with a relative timestamp, for post-mortem inspection of an
//! editing session.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

static EDIT_LOGGER: LazyLock<Mutex<EditLogger>> = LazyLock::new(|| Mutex::new(EditLogger::new()));

#[derive(Debug)]
struct EditLogger {
    enabled: bool,
    start: Instant,
    writer: Option<BufWriter<File>>,
}

impl EditLogger {
    fn new() -> Self {
        Self {
            enabled: false,
            start: Instant::now(),
            writer: None,
        }
    }
}

/// Point the logger at a file, or disable it with `None`.
///
/// # Errors
///
/// Returns an I/O error when the log file cannot be created.
pub fn set_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut logger = EDIT_LOGGER.lock().expect("edit logger lock poisoned");
    if let Some(path) = path {
        let file = File::create(path)?;
        logger.enabled = true;
        logger.start = Instant::now();
        logger.writer = Some(BufWriter::new(file));
        if let Some(writer) = logger.writer.as_mut() {
            writeln!(writer, "linescope edit log start")?;
            writer.flush()?;
        }
    } else {
        logger.enabled = false;
        logger.writer = None;
    }
    Ok(())
}

pub fn is_enabled() -> bool {
    EDIT_LOGGER
        .lock()
        .expect("edit logger lock poisoned")
        .enabled
}

/// Append one event line. A no-op while the logger is disabled.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    let mut logger = EDIT_LOGGER.lock().expect("edit logger lock poisoned");
    if !logger.enabled {
        return;
    }
    let elapsed_ms = logger.start.elapsed().as_secs_f64() * 1000.0;
    if let Some(writer) = logger.writer.as_mut() {
        let _ = writeln!(
            writer,
            "[{elapsed_ms:>10.3} ms] {name}: {}",
            detail.as_ref()
        );
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    // Single test: the logger is a process-wide singleton and parallel
    // test threads would race on its enabled state.
    #[test]
    fn test_log_path_round_trip() {
        let temp_file = NamedTempFile::new().unwrap();
        set_log_path(Some(temp_file.path())).unwrap();
        assert!(is_enabled());
        log_event("edit.apply", "kind=text-edit index=0");
        set_log_path(None).unwrap();
        assert!(!is_enabled());
        log_event("edit.apply", "ignored while disabled");

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("linescope edit log start"));
        assert!(content.contains("edit.apply: kind=text-edit index=0"));
        assert!(!content.contains("ignored while disabled"));
    }
}
