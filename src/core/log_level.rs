//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a logging event, ordered by [`LogLevel::rank`].
///
/// `All` and `Off` are thresholds only: a logger set to `All` accepts
/// everything, a logger set to `Off` accepts nothing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    All,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    #[default]
    Fatal,
    Off,
}

impl LogLevel {
    pub const ALL_RANK: i64 = i64::MIN;
    pub const TRACE_RANK: i64 = 5_000;
    pub const DEBUG_RANK: i64 = 10_000;
    pub const INFO_RANK: i64 = 20_000;
    pub const WARN_RANK: i64 = 30_000;
    pub const ERROR_RANK: i64 = 40_000;
    pub const FATAL_RANK: i64 = 50_000;
    pub const OFF_RANK: i64 = i64::MAX;

    /// Every level, lowest rank first
    pub const ALL_LEVELS: [LogLevel; 8] = [
        LogLevel::All,
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Off,
    ];

    /// Numeric rank; declaration order and rank order agree.
    pub const fn rank(&self) -> i64 {
        match self {
            LogLevel::All => Self::ALL_RANK,
            LogLevel::Trace => Self::TRACE_RANK,
            LogLevel::Debug => Self::DEBUG_RANK,
            LogLevel::Info => Self::INFO_RANK,
            LogLevel::Warn => Self::WARN_RANK,
            LogLevel::Error => Self::ERROR_RANK,
            LogLevel::Fatal => Self::FATAL_RANK,
            LogLevel::Off => Self::OFF_RANK,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::All => "ALL",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Off => "OFF",
        }
    }

    /// Resolve a level name, falling back when the token is missing or unknown.
    ///
    /// ```
    /// use rust_log_facade::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse_or(Some("warn"), LogLevel::Info), LogLevel::Warn);
    /// assert_eq!(LogLevel::parse_or(Some("bogus"), LogLevel::Info), LogLevel::Info);
    /// assert_eq!(LogLevel::parse_or(None, LogLevel::Info), LogLevel::Info);
    /// ```
    pub fn parse_or(token: Option<&str>, fallback: LogLevel) -> LogLevel {
        token
            .and_then(|s| s.trim().parse::<LogLevel>().ok())
            .unwrap_or(fallback)
    }

    /// Resolve an exact rank, falling back when it matches no level.
    pub fn from_rank_or(rank: i64, fallback: LogLevel) -> LogLevel {
        Self::ALL_LEVELS
            .iter()
            .copied()
            .find(|level| level.rank() == rank)
            .unwrap_or(fallback)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::All | LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal | LogLevel::Off => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(LogLevel::All),
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "OFF" => Ok(LogLevel::Off),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, LoggerError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_str().to_string()
    }
}
