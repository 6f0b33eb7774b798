use std::{
    fmt,
    str::FromStr,
    sync::{OnceLock, RwLock},
};

use serde::{Deserialize, Serialize, Serializer};
use time::UtcOffset;

use crate::logger::error::LoggerError;

/// Global cache for the local UTC offset.
///
/// Updated by `init_local_offset()` on startup.
static LOCAL_OFFSET: RwLock<UtcOffset> = RwLock::new(UtcOffset::UTC);

/// Tracks whether local offset detection has been attempted.
static INIT_DONE: OnceLock<()> = OnceLock::new();

/// Timezone for record timestamps.
///
/// - `Utc`: all timestamps in UTC (always works, default)
/// - `Local`: uses the system timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerTimeZone {
    /// UTC timezone.
    Utc,
    /// Local system timezone.
    Local,
}

impl LoggerTimeZone {
    pub(crate) fn offset(self) -> UtcOffset {
        match self {
            Self::Utc => UtcOffset::UTC,
            Self::Local => get_or_detect_local_offset(),
        }
    }
}

impl Default for LoggerTimeZone {
    fn default() -> Self {
        Self::Utc
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        };
        f.write_str(s)
    }
}

impl Serialize for LoggerTimeZone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LoggerTimeZone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Initializes the local timezone offset early in the program.
///
/// **CRITICAL**: Call in `main()` **before spawning any threads**. Timezone
/// detection fails in multi-thread contexts on most Unix platforms.
///
/// Falls back to UTC silently if detection fails. Only relevant when the
/// logger is configured with [`LoggerTimeZone::Local`].
pub fn init_local_offset() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    if let Ok(mut guard) = LOCAL_OFFSET.write() {
        *guard = offset;
    }
    let _ = INIT_DONE.set(());
}

/// Returns the current local offset for timestamp formatting.
pub(crate) fn get_or_detect_local_offset() -> UtcOffset {
    INIT_DONE.get_or_init(|| match UtcOffset::current_local_offset() {
        Ok(detected) => {
            if let Ok(mut guard) = LOCAL_OFFSET.write() {
                *guard = detected;
            }
        }
        Err(_) => {
            eprintln!(
                "WARNING: structlog local timezone detection failed. \
                 Call init_local_offset() in main() before spawning threads. \
                 Falling back to UTC."
            );
        }
    });

    LOCAL_OFFSET.read().map(|guard| *guard).unwrap_or(UtcOffset::UTC)
}
