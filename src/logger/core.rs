use std::io::Write;
use std::sync::Mutex;

use serde_json::Value;

use crate::logger::object::field::Field;
use crate::logger::object::level::LoggerLevel;
use crate::logger::object::timestamp;
use crate::logger::object::timezone::LoggerTimeZone;
use crate::logger::sink::WriteSyncer;

/// Call-site location attached to a record.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Caller {
    file: &'static str,
    line: u32,
}

impl Caller {
    pub(crate) fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    pub(crate) fn from_location(location: &'static std::panic::Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }

    /// Short form: the last two path components plus the line number.
    fn short(&self) -> String {
        let mut parts = self.file.rsplit(['/', '\\']);
        let file = parts.next().unwrap_or(self.file);
        match parts.next() {
            Some(dir) => format!("{dir}/{file}:{}", self.line),
            None => format!("{file}:{}", self.line),
        }
    }
}

/// One log record, ready for encoding.
pub(crate) struct Record<'a> {
    pub(crate) timestamp: String,
    pub(crate) level: LoggerLevel,
    pub(crate) caller: Option<Caller>,
    pub(crate) msg: &'a str,
    pub(crate) stacktrace: Option<String>,
}

/// Turns a record plus its field sets into one encoded line.
///
/// Field-name keys are fixed: `timestamp`, `level`, `caller`, `msg`,
/// `stacktrace`. There is no function-name key.
pub(crate) enum Encoder {
    /// Human-readable lines, segments joined by the separator, user fields
    /// rendered as one trailing JSON object.
    Console { separator: String },
    /// One JSON object per line.
    Json,
}

impl Encoder {
    fn encode(
        &self,
        record: &Record<'_>,
        base: &[Field],
        call: &[Field],
    ) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(256);
        match self {
            Encoder::Console { separator } => {
                let sep = separator.as_bytes();
                buf.extend_from_slice(record.timestamp.as_bytes());
                buf.extend_from_slice(sep);
                buf.extend_from_slice(record.level.label().as_bytes());
                if let Some(caller) = &record.caller {
                    buf.extend_from_slice(sep);
                    buf.extend_from_slice(caller.short().as_bytes());
                }
                buf.extend_from_slice(sep);
                buf.extend_from_slice(record.msg.as_bytes());
                if !(base.is_empty() && call.is_empty()) {
                    buf.extend_from_slice(sep);
                    write_fields_object(&mut buf, base, call)?;
                }
                if let Some(stacktrace) = &record.stacktrace {
                    buf.push(b'\n');
                    buf.extend_from_slice(stacktrace.trim_end().as_bytes());
                }
            }
            Encoder::Json => {
                let mut first = true;
                buf.push(b'{');
                write_str_entry(&mut buf, &mut first, "timestamp", &record.timestamp)?;
                write_str_entry(&mut buf, &mut first, "level", record.level.as_str())?;
                if let Some(caller) = &record.caller {
                    write_str_entry(&mut buf, &mut first, "caller", &caller.short())?;
                }
                write_str_entry(&mut buf, &mut first, "msg", record.msg)?;
                for field in base.iter().chain(call) {
                    write_value_entry(&mut buf, &mut first, field.key(), field.value())?;
                }
                if let Some(stacktrace) = &record.stacktrace {
                    write_str_entry(&mut buf, &mut first, "stacktrace", stacktrace)?;
                }
                buf.push(b'}');
            }
        }
        buf.push(b'\n');
        Ok(buf)
    }
}

fn write_fields_object(buf: &mut Vec<u8>, base: &[Field], call: &[Field]) -> serde_json::Result<()> {
    let mut first = true;
    buf.push(b'{');
    for field in base.iter().chain(call) {
        write_value_entry(buf, &mut first, field.key(), field.value())?;
    }
    buf.push(b'}');
    Ok(())
}

fn write_key(buf: &mut Vec<u8>, first: &mut bool, key: &str) -> serde_json::Result<()> {
    if *first {
        *first = false;
    } else {
        buf.push(b',');
    }
    serde_json::to_writer(&mut *buf, key)?;
    buf.push(b':');
    Ok(())
}

fn write_str_entry(
    buf: &mut Vec<u8>,
    first: &mut bool,
    key: &str,
    value: &str,
) -> serde_json::Result<()> {
    write_key(buf, first, key)?;
    serde_json::to_writer(&mut *buf, value)
}

fn write_value_entry(
    buf: &mut Vec<u8>,
    first: &mut bool,
    key: &str,
    value: &Value,
) -> serde_json::Result<()> {
    write_key(buf, first, key)?;
    serde_json::to_writer(&mut *buf, value)
}

/// Encoder, sink, and severity threshold behind one shared handle.
pub(crate) struct Core {
    encoder: Encoder,
    tz: LoggerTimeZone,
    threshold: LoggerLevel,
    sink: Mutex<Box<dyn WriteSyncer>>,
}

impl Core {
    pub(crate) fn new(
        encoder: Encoder,
        tz: LoggerTimeZone,
        threshold: LoggerLevel,
        sink: Box<dyn WriteSyncer>,
    ) -> Self {
        Self {
            encoder,
            tz,
            threshold,
            sink: Mutex::new(sink),
        }
    }

    pub(crate) fn enabled(&self, level: LoggerLevel) -> bool {
        level >= self.threshold
    }

    pub(crate) fn timestamp(&self) -> String {
        timestamp::format_timestamp(self.tz)
    }

    /// Encodes and writes one record. Sink failures follow the sink's own
    /// policy and are never surfaced through logging calls.
    pub(crate) fn write(&self, record: &Record<'_>, base: &[Field], call: &[Field]) {
        if !self.enabled(record.level) {
            return;
        }
        let Ok(line) = self.encoder.encode(record, base, call) else {
            return;
        };
        let mut sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        let _ = sink.write_all(&line);
    }

    pub(crate) fn sync(&self) {
        let mut sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        let _ = sink.sync();
    }
}
