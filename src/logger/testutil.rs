use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::logger::sink::WriteSyncer;

/// Clonable in-memory sink for asserting on encoded output.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contents(&self) -> String {
        let inner = self.inner.lock().expect("buffer lock");
        String::from_utf8_lossy(&inner).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .expect("buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteSyncer for SharedBuffer {}
