use time::OffsetDateTime;
use time::macros::format_description;

use crate::logger::object::timezone::LoggerTimeZone;

/// Formats the current instant as `YYYY-MM-DD HH:MM:SS` in the given
/// timezone. Falls back to a sentinel when formatting fails.
pub(crate) fn format_timestamp(tz: LoggerTimeZone) -> String {
    let now = OffsetDateTime::now_utc().to_offset(tz.offset());

    now.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| "<invalid-time>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_fixed_shape() {
        let ts = format_timestamp(LoggerTimeZone::Utc);

        assert_eq!(ts.len(), 19, "unexpected timestamp length: {ts:?}");
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[7..8], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
        assert_eq!(&ts[16..17], ":");
        assert!(ts[..4].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn local_timezone_produces_same_shape() {
        let ts = format_timestamp(LoggerTimeZone::Local);
        assert_eq!(ts.len(), 19, "unexpected timestamp length: {ts:?}");
    }
}
