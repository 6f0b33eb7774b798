use std::fmt;

use tracing::field::{Field as EventField, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context as LayerContext, Layer};

use crate::logger::core::Caller;
use crate::logger::global;
use crate::logger::object::field::Field;
use crate::logger::object::level::LoggerLevel;

/// Forwards `tracing` events to the process-wide default logger.
///
/// The event's `message` becomes the record message, the remaining event
/// fields become structured fields, and the event metadata supplies the
/// caller location. Events recorded before [`init`](crate::init) are
/// dropped.
///
/// # Examples
/// ```
/// use tracing_subscriber::layer::SubscriberExt;
///
/// structlog::init(structlog::LoggerConfig::default()).expect("failed to initialize logger");
///
/// let subscriber = tracing_subscriber::registry().with(structlog::TracingBridge::new());
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!(user = "alice", "login ok");
/// });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBridge;

impl TracingBridge {
    /// Create the bridge layer.
    pub fn new() -> Self {
        Self
    }
}

impl<S: Subscriber> Layer<S> for TracingBridge {
    fn on_event(&self, event: &Event<'_>, _ctx: LayerContext<'_, S>) {
        let Some(logger) = global::try_default() else {
            return;
        };

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let caller = metadata
            .file()
            .map(|file| Caller::new(file, metadata.line().unwrap_or(0)));
        let level = convert_level(*metadata.level());

        logger.write(level, caller, &visitor.message, &visitor.fields);
    }
}

fn convert_level(level: Level) -> LoggerLevel {
    if level == Level::TRACE {
        LoggerLevel::Trace
    } else if level == Level::DEBUG {
        LoggerLevel::Debug
    } else if level == Level::INFO {
        LoggerLevel::Info
    } else if level == Level::WARN {
        LoggerLevel::Warn
    } else {
        LoggerLevel::Error
    }
}

/// Collects an event's `message` and remaining fields.
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<Field>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &EventField, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(Field::str(field.name(), value));
        }
    }

    fn record_i64(&mut self, field: &EventField, value: i64) {
        self.fields.push(Field::int(field.name(), value));
    }

    fn record_u64(&mut self, field: &EventField, value: u64) {
        self.fields.push(Field::uint(field.name(), value));
    }

    fn record_f64(&mut self, field: &EventField, value: f64) {
        self.fields.push(Field::float(field.name(), value));
    }

    fn record_bool(&mut self, field: &EventField, value: bool) {
        self.fields.push(Field::bool(field.name(), value));
    }

    fn record_debug(&mut self, field: &EventField, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(Field::str(field.name(), format!("{value:?}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_all_tracing_levels() {
        assert_eq!(convert_level(Level::TRACE), LoggerLevel::Trace);
        assert_eq!(convert_level(Level::DEBUG), LoggerLevel::Debug);
        assert_eq!(convert_level(Level::INFO), LoggerLevel::Info);
        assert_eq!(convert_level(Level::WARN), LoggerLevel::Warn);
        assert_eq!(convert_level(Level::ERROR), LoggerLevel::Error);
    }
}
