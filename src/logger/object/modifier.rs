use crate::logger::object::field::Field;
use crate::logger::object::level::LoggerLevel;

/// Construction-time behavior modifier.
///
/// Modifiers are applied in order when the logger is built; a later entry
/// overrides an earlier one for the same concern. The builder always appends
/// [`Modifier::Caller`] and `Modifier::StacktraceAt(Error)` after the
/// configured sequence, so call-site capture and error stack traces cannot be
/// disabled.
#[derive(Debug, Clone)]
pub enum Modifier {
    /// Capture the call site of every record.
    Caller,
    /// Capture a stack trace on records at or above the given severity.
    StacktraceAt(LoggerLevel),
    /// Attach fields to every record of the built logger.
    Fields(Vec<Field>),
}
