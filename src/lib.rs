//! Process-wide structured logging façade.
//!
//! This crate translates a [`LoggerConfig`] (severity threshold, console or
//! JSON output, field separator, timezone, global fields, output sink, and a
//! per-call field extractor) into a constructed [`Logger`], installs it as
//! the process-wide default, and exposes package-level convenience functions
//! ([`info`], [`debug`], [`warn`], [`error`], [`fatal`], [`with_context`])
//! that forward to it.
//!
//! Initialization must happen once, during single-threaded startup, before
//! the first logging call; logging through the façade beforehand crashes the
//! process. Handles derived with [`Logger::with`] and [`with_context`] are
//! independent values and safe to use from concurrent threads.
//!
//! # Examples
//! ```
//! use structlog::{Context, Field, LoggerConfig};
//!
//! let config = LoggerConfig {
//!     apply_fields: Some(std::sync::Arc::new(|ctx: &Context| {
//!         match ctx.value("request_id") {
//!             Some(id) => vec![Field::new("request_id", id.clone())],
//!             None => Vec::new(),
//!         }
//!     })),
//!     ..Default::default()
//! };
//! structlog::init(config).expect("failed to initialize logger");
//!
//! structlog::info("server started", &[Field::int("port", 8080)]);
//!
//! let ctx = Context::new().with_value("request_id", "9f31");
//! structlog::with_context(&ctx).info("request handled", &[]);
//! ```

mod logger;
pub use logger::*;
