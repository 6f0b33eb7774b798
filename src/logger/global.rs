use std::sync::RwLock;

use crate::logger::config::LoggerConfig;
use crate::logger::context::Context;
use crate::logger::error::LoggerResult;
use crate::logger::log::Logger;
use crate::logger::object::field::Field;

/// Process-wide default logger.
///
/// Written by [`init`], read by every forwarding function. The lock provides
/// data-race freedom only; callers must still order a single successful
/// `init` before the first logging call. Re-initialization concurrent with
/// logging is undefined behavior by contract.
static DEFAULT: RwLock<Option<Logger>> = RwLock::new(None);

/// Builds a logger from the configuration and installs it as the
/// process-wide default, replacing any previous one.
///
/// The logger is fully built before the slot is written, so a failed build
/// leaves a previously installed default untouched.
///
/// # Examples
/// ```
/// use structlog::{Field, LoggerConfig};
///
/// structlog::init(LoggerConfig::default()).expect("failed to initialize logger");
/// structlog::info("ready", &[Field::str("component", "main")]);
/// ```
pub fn init(config: LoggerConfig) -> LoggerResult<()> {
    let logger = Logger::build(config)?;
    let mut slot = DEFAULT.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(logger);
    Ok(())
}

/// Returns the default logger, or `None` before initialization.
pub(crate) fn try_default() -> Option<Logger> {
    DEFAULT.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Initialization-before-use is the caller's obligation; logging through the
/// façade before [`init`] crashes the process.
fn default_logger() -> Logger {
    try_default().expect("structlog: logging before init(); initialize the logger during startup")
}

/// Emit one record at debug severity through the default logger.
#[track_caller]
pub fn debug(msg: &str, fields: &[Field]) {
    default_logger().debug(msg, fields);
}

/// Emit one record at info severity through the default logger.
#[track_caller]
pub fn info(msg: &str, fields: &[Field]) {
    default_logger().info(msg, fields);
}

/// Emit one record at warn severity through the default logger.
#[track_caller]
pub fn warn(msg: &str, fields: &[Field]) {
    default_logger().warn(msg, fields);
}

/// Emit one record at error severity through the default logger, with a
/// stack trace attached.
#[track_caller]
pub fn error(msg: &str, fields: &[Field]) {
    default_logger().error(msg, fields);
}

/// Emit one record at fatal severity through the default logger, then
/// terminate the process with status 1.
#[track_caller]
pub fn fatal(msg: &str, fields: &[Field]) -> ! {
    default_logger().fatal(msg, fields)
}

/// Returns a handle derived from the default logger, carrying the fields the
/// configured `apply_fields` extracts from `ctx`. Without an extractor the
/// handle behaves exactly like the default logger.
pub fn with_context(ctx: &Context) -> Logger {
    default_logger().with_context(ctx)
}
