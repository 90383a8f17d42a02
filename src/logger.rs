// =============================================================================
// Singleton: rotating file logger
// =============================================================================
//
// Every line is `[%Y-%m-%d %H:%M:%S] [LEVEL] message`. Lines are only ever
// appended. Once the file reaches `max_size` bytes it is renamed to
// `{stem}_{unix_seconds}.{ext}` and a fresh file is started; nothing is
// truncated. One mutex serialises rotation and appends across threads.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config_file::{self, ConfigFileError};

pub const DEFAULT_CONFIG_FILE: &str = "logger_config.json";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid logger config: {0}")]
    Config(#[from] ConfigFileError),

    #[error("Failed to access {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Log file not found")]
    LogFileMissing(PathBuf),

    #[error("Unknown log level '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    fn io(path: &Path, source: io::Error) -> Self {
        LoggerError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// =============================================================================
// Levels
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "LevelRepr", into = "u8")]
#[repr(u8)]
pub enum LogLevel {
    Info = 1,
    Warning = 2,
    Error = 3,
}

/// Config files may give the level as `1`..`3` or by name.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(u8),
    Name(String),
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// `Debug` and `Trace` records have no counterpart and are not written.
    pub fn from_log_level(level: log::Level) -> Option<Self> {
        match level {
            log::Level::Error => Some(LogLevel::Error),
            log::Level::Warn => Some(LogLevel::Warning),
            log::Level::Info => Some(LogLevel::Info),
            log::Level::Debug | log::Level::Trace => None,
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        match value {
            1 => Ok(LogLevel::Info),
            2 => Ok(LogLevel::Warning),
            3 => Ok(LogLevel::Error),
            other => Err(LoggerError::InvalidLevel(other.to_string())),
        }
    }
}

impl TryFrom<LevelRepr> for LogLevel {
    type Error = LoggerError;

    fn try_from(repr: LevelRepr) -> Result<Self, LoggerError> {
        match repr {
            LevelRepr::Number(n) => LogLevel::try_from(n),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    /// Rotation threshold in bytes.
    pub max_size: u64,
    /// Echo `[LEVEL] message` to stdout.
    pub console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            log_level: LogLevel::Info,
            log_file: PathBuf::from("app.log"),
            max_size: 5000,
            console: true,
        }
    }
}

impl LoggerConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoggerError> {
        Ok(config_file::read_optional(path.as_ref())?.unwrap_or_default())
    }
}

// =============================================================================
// Logger
// =============================================================================

#[derive(Debug)]
pub struct Logger {
    min_level: AtomicU8,
    log_file: PathBuf,
    max_size: u64,
    console: bool,
    file_lock: Mutex<()>,
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Logger {
            min_level: AtomicU8::new(config.log_level.into()),
            log_file: config.log_file,
            max_size: config.max_size,
            console: config.console,
            file_lock: Mutex::new(()),
        }
    }

    /// Initialises the process-wide logger from `config_path`. Only the
    /// first successful call configures it; later calls return that instance.
    pub fn init_global(config_path: impl AsRef<Path>) -> Result<&'static Logger, LoggerError> {
        if let Some(logger) = GLOBAL.get() {
            return Ok(logger);
        }
        let config = LoggerConfig::load(config_path)?;
        Ok(GLOBAL.get_or_init(|| Logger::new(config)))
    }

    /// The process-wide logger, configured from [`DEFAULT_CONFIG_FILE`] on
    /// first use. An unreadable config falls back to the defaults.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(|| {
            let config = LoggerConfig::load(DEFAULT_CONFIG_FILE).unwrap_or_else(|err| {
                eprintln!("{err}; using default logger settings");
                LoggerConfig::default()
            });
            Logger::new(config)
        })
    }

    /// Registers this logger as the `log` facade backend.
    pub fn install(&'static self) -> Result<(), log::SetLoggerError> {
        log::set_logger(self)?;
        log::set_max_level(log::LevelFilter::Info);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.log_file
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.min_level.store(level.into(), Ordering::Relaxed);
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::try_from(self.min_level.load(Ordering::Relaxed)).unwrap_or(LogLevel::Info)
    }

    /// Appends `message` if `level` passes the current threshold.
    pub fn log(&self, message: &str, level: LogLevel) -> Result<(), LoggerError> {
        if level < self.log_level() {
            return Ok(());
        }

        let line = format_entry(Local::now(), level, message);
        let _guard = self.file_lock.lock().unwrap_or_else(PoisonError::into_inner);

        self.rotate_if_needed()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .map_err(|err| LoggerError::io(&self.log_file, err))?;
        writeln!(file, "{line}").map_err(|err| LoggerError::io(&self.log_file, err))?;

        if self.console {
            println!("[{level}] {}", sanitize(message));
        }
        Ok(())
    }

    pub fn info(&self, message: &str) -> Result<(), LoggerError> {
        self.log(message, LogLevel::Info)
    }

    pub fn warning(&self, message: &str) -> Result<(), LoggerError> {
        self.log(message, LogLevel::Warning)
    }

    pub fn error(&self, message: &str) -> Result<(), LoggerError> {
        self.log(message, LogLevel::Error)
    }

    /// Renames the current file once it reaches `max_size`. Callers must
    /// hold `file_lock`.
    fn rotate_if_needed(&self) -> Result<Option<PathBuf>, LoggerError> {
        let size = match fs::metadata(&self.log_file) {
            Ok(meta) => meta.len(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(LoggerError::io(&self.log_file, err)),
        };
        if size < self.max_size {
            return Ok(None);
        }

        let target = rotated_path(&self.log_file, Utc::now().timestamp());
        fs::rename(&self.log_file, &target).map_err(|err| LoggerError::io(&self.log_file, err))?;
        Ok(Some(target))
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        LogLevel::from_log_level(metadata.level()).is_some_and(|level| level >= self.log_level())
    }

    fn log(&self, record: &log::Record) {
        let Some(level) = LogLevel::from_log_level(record.level()) else {
            return;
        };
        let message = record.args().to_string();
        if let Err(err) = Logger::log(self, &message, level) {
            eprintln!("failed to write log record: {err}");
        }
    }

    fn flush(&self) {}
}

/// Keeps one entry per line.
fn sanitize(message: &str) -> String {
    message.replace(['\r', '\n'], "␤")
}

pub fn format_entry(at: DateTime<Local>, level: LogLevel, message: &str) -> String {
    format!(
        "[{}] [{}] {}",
        at.format(TIMESTAMP_FORMAT),
        level,
        sanitize(message)
    )
}

/// `dir/app.log` -> `dir/app_{secs}.log`, adding `_{n}` until the name is free.
pub fn rotated_path(current: &Path, unix_secs: i64) -> PathBuf {
    let stem = current
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "log".to_string());
    let ext = current.extension().map(|e| e.to_string_lossy().into_owned());
    let dir = current.parent().unwrap_or_else(|| Path::new(""));

    let name_for = |suffix: &str| match &ext {
        Some(ext) => format!("{stem}_{unix_secs}{suffix}.{ext}"),
        None => format!("{stem}_{unix_secs}{suffix}"),
    };

    let mut candidate = dir.join(name_for(""));
    let mut counter = 1;
    while candidate.exists() {
        candidate = dir.join(name_for(&format!("_{counter}")));
        counter += 1;
    }
    candidate
}

// =============================================================================
// Reading logs back
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    /// Parses `[timestamp] [LEVEL] message`; anything else is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.trim_end_matches(['\r', '\n']).strip_prefix('[')?;
        let (timestamp, rest) = rest.split_once("] [")?;
        let (level, message) = match rest.split_once("] ") {
            Some(parts) => parts,
            None => (rest.strip_suffix(']')?, ""),
        };

        Some(LogEntry {
            timestamp: NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?,
            level: level.parse().ok()?,
            message: message.to_string(),
        })
    }
}

pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LogReader { path: path.into() }
    }

    fn open(&self) -> Result<BufReader<File>, LoggerError> {
        match File::open(&self.path) {
            Ok(file) => Ok(BufReader::new(file)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(LoggerError::LogFileMissing(self.path.clone()))
            }
            Err(err) => Err(LoggerError::io(&self.path, err)),
        }
    }

    /// Parsed entries at or above `min_level`, in file order.
    pub fn entries(&self, min_level: LogLevel) -> Result<Vec<LogEntry>, LoggerError> {
        let mut entries = Vec::new();
        for line in self.open()?.lines() {
            let line = line.map_err(|err| LoggerError::io(&self.path, err))?;
            if let Some(entry) = LogEntry::parse(&line) {
                if entry.level >= min_level {
                    entries.push(entry);
                }
            }
        }
        Ok(entries)
    }

    /// Raw lines at or above `min_level`, trimmed.
    pub fn read(&self, min_level: LogLevel) -> Result<Vec<String>, LoggerError> {
        let mut lines = Vec::new();
        for line in self.open()?.lines() {
            let line = line.map_err(|err| LoggerError::io(&self.path, err))?;
            let keep = LogEntry::parse(&line).is_some_and(|entry| entry.level >= min_level);
            if keep {
                lines.push(line.trim().to_string());
            }
        }
        Ok(lines)
    }
}
