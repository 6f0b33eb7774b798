pub mod field;
pub use field::{ApplyFields, Field};

pub mod format;
pub use format::LoggerFormat;

pub mod level;
pub use level::LoggerLevel;

pub mod modifier;
pub use modifier::Modifier;

pub(crate) mod timestamp;

pub mod timezone;
pub use timezone::{LoggerTimeZone, init_local_offset};
