use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::process;
use std::sync::Arc;

use crate::logger::config::LoggerConfig;
use crate::logger::context::Context;
use crate::logger::core::{Caller, Core, Encoder, Record};
use crate::logger::error::LoggerResult;
use crate::logger::object::field::{ApplyFields, Field};
use crate::logger::object::format::LoggerFormat;
use crate::logger::object::level::LoggerLevel;
use crate::logger::object::modifier::Modifier;
use crate::logger::sink;

/// Default field delimiter for the console format.
pub const DEFAULT_CONSOLE_SEPARATOR: &str = " | ";

/// A constructed logger handle.
///
/// Cheap to clone: clones share the encoder, sink, and field storage.
/// [`with`](Logger::with) and [`with_context`](Logger::with_context) derive
/// new handles without touching the one they were called on, so handles can
/// be used freely from concurrent threads.
#[derive(Clone)]
pub struct Logger {
    core: Arc<Core>,
    fields: Arc<Vec<Field>>,
    capture_caller: bool,
    stacktrace_at: Option<LoggerLevel>,
    apply_fields: Option<ApplyFields>,
}

impl Logger {
    /// Builds a logger from the configuration.
    ///
    /// Applies the documented defaults (empty separator becomes
    /// [`DEFAULT_CONSOLE_SEPARATOR`], absent sink becomes standard output),
    /// injects `global_fields`, then applies the modifier sequence with
    /// caller capture and error stack traces appended on top. Pure
    /// construction: no process-wide state is touched.
    pub fn build(config: LoggerConfig) -> LoggerResult<Self> {
        let LoggerConfig {
            level,
            format,
            console_separator,
            tz,
            options,
            global_fields,
            syncer,
            apply_fields,
        } = config;

        let encoder = match format {
            LoggerFormat::Json => Encoder::Json,
            LoggerFormat::Console => {
                let separator = if console_separator.is_empty() {
                    DEFAULT_CONSOLE_SEPARATOR.to_string()
                } else {
                    console_separator
                };
                Encoder::Console { separator }
            }
        };
        let sink = syncer.unwrap_or_else(sink::stdout);
        let core = Core::new(encoder, tz, level, sink);

        let mut logger = Logger {
            core: Arc::new(core),
            fields: Arc::new(
                global_fields
                    .into_iter()
                    .map(|(key, value)| Field::new(key, value))
                    .collect(),
            ),
            capture_caller: false,
            stacktrace_at: None,
            apply_fields,
        };

        // Appended after the configured options so they win over any caller
        // choice: call-site capture and error stack traces are always active.
        let forced = [Modifier::Caller, Modifier::StacktraceAt(LoggerLevel::Error)];
        for modifier in options.into_iter().chain(forced) {
            logger.apply(modifier);
        }
        Ok(logger)
    }

    fn apply(&mut self, modifier: Modifier) {
        match modifier {
            Modifier::Caller => self.capture_caller = true,
            Modifier::StacktraceAt(level) => self.stacktrace_at = Some(level),
            Modifier::Fields(fields) => self.append_fields(fields),
        }
    }

    fn append_fields(&mut self, fields: Vec<Field>) {
        if fields.is_empty() {
            return;
        }
        let mut combined = Vec::with_capacity(self.fields.len() + fields.len());
        combined.extend_from_slice(&self.fields);
        combined.extend(fields);
        self.fields = Arc::new(combined);
    }

    /// Returns a handle that emits the given fields on every record.
    ///
    /// An empty sequence returns a handle sharing this one's state unchanged;
    /// otherwise the field list is extended on the derived handle only.
    #[must_use]
    pub fn with(&self, fields: Vec<Field>) -> Self {
        if fields.is_empty() {
            return self.clone();
        }
        let mut derived = self.clone();
        derived.append_fields(fields);
        derived
    }

    /// Returns a handle carrying the fields extracted from `ctx` by the
    /// configured `apply_fields` function, or this handle's state unchanged
    /// when none was configured.
    #[must_use]
    pub fn with_context(&self, ctx: &Context) -> Self {
        match &self.apply_fields {
            None => self.clone(),
            Some(apply) => self.with(apply(ctx)),
        }
    }

    /// Emit one record at debug severity.
    #[track_caller]
    pub fn debug(&self, msg: &str, fields: &[Field]) {
        self.log(LoggerLevel::Debug, msg, fields);
    }

    /// Emit one record at info severity.
    #[track_caller]
    pub fn info(&self, msg: &str, fields: &[Field]) {
        self.log(LoggerLevel::Info, msg, fields);
    }

    /// Emit one record at warn severity.
    #[track_caller]
    pub fn warn(&self, msg: &str, fields: &[Field]) {
        self.log(LoggerLevel::Warn, msg, fields);
    }

    /// Emit one record at error severity, with a stack trace attached.
    #[track_caller]
    pub fn error(&self, msg: &str, fields: &[Field]) {
        self.log(LoggerLevel::Error, msg, fields);
    }

    /// Emit one record at fatal severity, sync the sink, and terminate the
    /// process with status 1.
    #[track_caller]
    pub fn fatal(&self, msg: &str, fields: &[Field]) -> ! {
        self.log(LoggerLevel::Fatal, msg, fields);
        self.core.sync();
        process::exit(1);
    }

    #[track_caller]
    fn log(&self, level: LoggerLevel, msg: &str, fields: &[Field]) {
        if !self.core.enabled(level) {
            return;
        }
        let caller = if self.capture_caller {
            Some(Caller::from_location(Location::caller()))
        } else {
            None
        };
        self.write(level, caller, msg, fields);
    }

    /// Shared emit path; the tracing bridge enters here with an explicit
    /// caller taken from event metadata.
    pub(crate) fn write(
        &self,
        level: LoggerLevel,
        caller: Option<Caller>,
        msg: &str,
        fields: &[Field],
    ) {
        if !self.core.enabled(level) {
            return;
        }
        let stacktrace = match self.stacktrace_at {
            Some(at) if level >= at => Some(Backtrace::force_capture().to_string()),
            _ => None,
        };
        let record = Record {
            timestamp: self.core.timestamp(),
            level,
            caller,
            msg,
            stacktrace,
        };
        self.core.write(&record, &self.fields, fields);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("fields", &self.fields.len())
            .field("capture_caller", &self.capture_caller)
            .field("stacktrace_at", &self.stacktrace_at)
            .field(
                "apply_fields",
                &self.apply_fields.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}
