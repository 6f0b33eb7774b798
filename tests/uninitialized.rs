//! Must stay in its own test binary: it relies on this process never having
//! initialized the default logger.

use structlog::Field;

#[test]
#[should_panic(expected = "before init")]
fn logging_before_init_crashes() {
    structlog::info("too early", &[Field::str("k", "v")]);
}
