use std::fs::File;
use std::io::{self, Write};

/// Byte sink for encoded records: a writer with a durability hook.
///
/// `sync` flushes buffered bytes to their destination; the default
/// implementation delegates to [`Write::flush`]. The façade calls it before a
/// fatal exit so the last record is not lost.
pub trait WriteSyncer: Write + Send {
    /// Flush buffered bytes to their destination.
    fn sync(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl WriteSyncer for io::Stdout {}

impl WriteSyncer for io::Stderr {}

impl WriteSyncer for Vec<u8> {}

impl WriteSyncer for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

/// Default sink: standard output.
pub(crate) fn stdout() -> Box<dyn WriteSyncer> {
    Box::new(io::stdout())
}
