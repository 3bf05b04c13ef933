// In-app logger behind the `log` facade.
// Keeps a bounded buffer for the Logs window, optionally mirrors to stderr,
// appends warn+ lines to gallery.log and installs a panic hook that writes there too.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::collections::VecDeque;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_LOG_LINES: usize = 5000;
const LOG_FILE_NAME: &str = "gallery.log";

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>5}] {}: {}", self.level, self.target, self.msg)
    }
}

/// Ring buffer of the most recent entries; the oldest entry is dropped at capacity.
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    cap: usize,
}

impl LogBuffer {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap: cap.max(1),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.cap {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in [start, end), clamped to what is stored.
    pub fn range(&self, start: usize, end: usize) -> impl Iterator<Item = &LogEntry> + '_ {
        let len = self.entries.len();
        let s = start.min(len);
        let e = end.min(len).max(s);
        self.entries.range(s..e)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

lazy_static! {
    static ref LOGS: Mutex<LogBuffer> = Mutex::new(LogBuffer::with_capacity(MAX_LOG_LINES));
    static ref MIRROR_STDERR: bool = {
        let v = std::env::var("GALLERY_LOG_STDERR").unwrap_or_default();
        matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
    };
    static ref LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct GuiLogger;

impl Log for GuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            msg: record.args().to_string(),
        };
        let line = format!("[{}] {}", timestamp_millis(), entry);

        if *MIRROR_STDERR {
            eprintln!("{}", line);
        }
        if matches!(record.level(), Level::Warn | Level::Error) {
            write_file_line(&line);
        }

        if let Ok(mut buf) = LOGS.lock() {
            buf.push(entry);
        }
        NEW_LOGS.store(true, Ordering::Relaxed);
    }

    fn flush(&self) {
        if let Ok(mut lf) = LOG_FILE.lock() {
            if let Some(f) = lf.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

/// Parse a RUST_LOG-style value into a single global level. Each `,`-separated
/// directive contributes its level (`target=level` or a bare `level`); module
/// targets themselves are ignored and the most verbose level mentioned wins.
fn parse_level(val: &str) -> Option<LevelFilter> {
    val.split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next()?.trim();
            level.parse::<LevelFilter>().ok()
        })
        .max()
}

/// Install the logger, open gallery.log and install the panic hook.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(GuiLogger));

    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Debug);
    log::set_max_level(level);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME)
        .ok();
    if let Ok(mut lf) = LOG_FILE.lock() {
        *lf = file;
    }

    install_panic_hook();

    log::info!("Logger initialized at level {level} (warnings persisted to {LOG_FILE_NAME})");
}

pub fn for_each_range<F: FnMut(&LogEntry)>(start: usize, end: usize, mut f: F) {
    if let Ok(buf) = LOGS.lock() {
        buf.range(start, end).for_each(|e| f(e));
    }
}

pub fn get_all() -> Vec<String> {
    LOGS.lock()
        .map(|buf| buf.range(0, usize::MAX).map(|e| e.to_string()).collect())
        .unwrap_or_default()
}

pub fn len() -> usize {
    LOGS.lock().map(|buf| buf.len()).unwrap_or(0)
}

pub fn clear() {
    if let Ok(mut buf) = LOGS.lock() {
        buf.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// Returns true if new logs arrived since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}

fn timestamp_millis() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn write_file_line(line: &str) {
    if let Ok(mut lf) = LOG_FILE.lock() {
        if let Some(f) = lf.as_mut() {
            let _ = writeln!(f, "{}", line);
            let _ = f.flush();
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };
        let loc = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let bt = Backtrace::force_capture();
        write_file_line(&format!("[{}] [ERROR] panic at {loc}: {msg}", timestamp_millis()));
        for line in format!("{bt:?}").lines() {
            write_file_line(line);
        }
        log::error!("panic at {loc}: {msg}\n{bt:?}");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> LogEntry {
        LogEntry {
            level: Level::Info,
            target: "test".to_string(),
            msg: format!("line {i}"),
        }
    }

    #[test]
    fn buffer_drops_oldest_at_capacity() {
        let mut buf = LogBuffer::with_capacity(3);
        for i in 0..5 {
            buf.push(entry(i));
        }
        assert_eq!(buf.len(), 3);
        let msgs: Vec<&str> = buf.range(0, 10).map(|e| e.msg.as_str()).collect();
        assert_eq!(msgs, ["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn range_is_clamped() {
        let mut buf = LogBuffer::with_capacity(10);
        buf.push(entry(0));
        buf.push(entry(1));
        assert_eq!(buf.range(1, 99).count(), 1);
        assert_eq!(buf.range(5, 9).count(), 0);
        assert_eq!(buf.range(2, 1).count(), 0);
    }

    #[test]
    fn level_parsing_prefers_most_verbose() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("use_case_gallery=trace,info"), Some(LevelFilter::Trace));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn level_parsing_ignores_target_names() {
        assert_eq!(parse_level("info_service=warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("offline=debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" off "), Some(LevelFilter::Off));
        assert_eq!(parse_level("gallery=error, Info"), Some(LevelFilter::Info));
        assert_eq!(parse_level("gallery_debug"), None);
    }

    #[test]
    fn entry_formats_like_the_logs_window() {
        assert_eq!(entry(3).to_string(), "[ INFO] test: line 3");
    }
}
