use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::logger::LoggerError;

/// Record severity.
///
/// Levels are totally ordered (`Trace` lowest, `Fatal` highest); records
/// strictly below the configured threshold are suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoggerLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Panic,
    Fatal,
}

impl LoggerLevel {
    /// Returns the canonical lowercase name, as used by the JSON encoder.
    ///
    /// # Examples
    /// ```
    /// use structlog::LoggerLevel;
    ///
    /// assert_eq!(LoggerLevel::Warn.as_str(), "warn");
    /// ```
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            LoggerLevel::Trace => "trace",
            LoggerLevel::Debug => "debug",
            LoggerLevel::Info => "info",
            LoggerLevel::Warn => "warn",
            LoggerLevel::Error => "error",
            LoggerLevel::Panic => "panic",
            LoggerLevel::Fatal => "fatal",
        }
    }

    /// Returns the uppercase label used by the console encoder.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            LoggerLevel::Trace => "TRACE",
            LoggerLevel::Debug => "DEBUG",
            LoggerLevel::Info => "INFO",
            LoggerLevel::Warn => "WARN",
            LoggerLevel::Error => "ERROR",
            LoggerLevel::Panic => "PANIC",
            LoggerLevel::Fatal => "FATAL",
        }
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self::Debug
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LoggerLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoggerLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
