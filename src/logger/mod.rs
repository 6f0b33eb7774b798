mod config;
mod context;
mod core;
mod error;
mod global;
mod log;
mod object;
mod sink;

#[cfg(feature = "tracing-bridge")]
mod bridge;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::LoggerConfig;
pub use context::Context;
pub use error::{LoggerError, LoggerResult};
pub use global::{debug, error, fatal, info, init, warn, with_context};
pub use log::{DEFAULT_CONSOLE_SEPARATOR, Logger};
pub use object::field::{ApplyFields, Field};
pub use object::format::LoggerFormat;
pub use object::level::LoggerLevel;
pub use object::modifier::Modifier;
pub use object::timezone::{LoggerTimeZone, init_local_offset};
pub use sink::WriteSyncer;

#[cfg(feature = "tracing-bridge")]
pub use bridge::TracingBridge;
