use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::logger::object::field::ApplyFields;
use crate::logger::object::format::LoggerFormat;
use crate::logger::object::level::LoggerLevel;
use crate::logger::object::modifier::Modifier;
use crate::logger::object::timezone::LoggerTimeZone;
use crate::logger::sink::WriteSyncer;

/// Logger configuration.
///
/// Consumed by value exactly once, by [`Logger::build`](crate::Logger::build)
/// or [`init`](crate::init); the constructed logger is an independent
/// snapshot. The data members deserialize with `#[serde(default)]` semantics,
/// so a partial document (or `{}`) yields the documented defaults; the opaque
/// members (`options`, `syncer`, `apply_fields`) can only be set in code.
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Severity threshold; records strictly below it are suppressed.
    /// Default: `debug`.
    pub level: LoggerLevel,

    /// Output format. Default: `console`.
    pub format: LoggerFormat,

    /// Field delimiter for the console format; an empty string selects the
    /// default `" | "` at build time. Ignored by the JSON format.
    pub console_separator: String,

    /// Timezone for record timestamps. Default: `utc`.
    pub tz: LoggerTimeZone,

    /// Construction-time behavior modifiers, applied in order. Caller capture
    /// and error stack traces are appended on top and cannot be disabled.
    #[serde(skip)]
    pub options: Vec<Modifier>,

    /// Fields attached to every record of the built logger.
    pub global_fields: BTreeMap<String, Value>,

    /// Output sink; `None` selects standard output.
    #[serde(skip)]
    pub syncer: Option<Box<dyn WriteSyncer>>,

    /// Per-derivation field extractor used by
    /// [`with_context`](crate::with_context).
    #[serde(skip)]
    pub apply_fields: Option<ApplyFields>,
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("format", &self.format)
            .field("console_separator", &self.console_separator)
            .field("tz", &self.tz)
            .field("options", &self.options)
            .field("global_fields", &self.global_fields)
            .field("syncer", &self.syncer.as_ref().map(|_| "<sink>"))
            .field("apply_fields", &self.apply_fields.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
