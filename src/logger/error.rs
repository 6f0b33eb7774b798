use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Invalid log level: {0} (expected: trace|debug|info|warn|error|panic|fatal)")]
    InvalidLevel(String),

    #[error("Invalid log format: {0} (expected: console|json)")]
    InvalidFormat(String),

    #[error("Invalid timezone: {0} (expected: utc|local)")]
    InvalidTimeZone(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
