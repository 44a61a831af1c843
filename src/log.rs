// src/log.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::DEFAULT_LOG_FILE;

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn log_path() -> &'static Path {
    LOG_PATH.get_or_init(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Point the logger at `path`. Only the first call wins; later calls are ignored
/// so a library caller can't redirect the log mid-run.
pub fn init(path: impl Into<PathBuf>) {
    let path = path.into();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    let _ = LOG_PATH.set(path);
    start();
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

fn format_line(level: Level, elapsed_ms: u128, msg: &str) -> String {
    format!("[{}][{}] {msg}\n", fmt_elapsed(elapsed_ms), level.tag())
}

/// Append one line to the run log. Failures to write are swallowed; a
/// scrape never aborts over its own diagnostics.
pub fn write_log(level: Level, msg: &str) {
    let line = format_line(level, start().elapsed().as_millis(), msg);

    let Ok(_guard) = LOG_LOCK.lock() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path()) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:ident, $($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::$level, &format!($($arg)*))
    };
}

/// Info: run milestones (login, pages, sheets written).
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => { $crate::__log_at!(Info, $($arg)*) };
}

/// Debug: per-row values as read off the page.
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => { $crate::__log_at!(Debug, $($arg)*) };
}

/// Warn: recovered problems (missing rows, odd shapes).
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => { $crate::__log_at!(Warn, $($arg)*) };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => { $crate::__log_at!(Error, $($arg)*) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formats_as_clock() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn line_carries_level_tag() {
        assert_eq!(
            format_line(Level::Warn, 1_500, "橘萌生 missing"),
            "[00:00:01.500][WARN] 橘萌生 missing\n"
        );
        assert!(Level::Debug < Level::Error);
    }
}
