use std::io::{self, BufRead};

/// Splits a byte stream into lines, one at a time.
/// Reuses a read buffer across lines and grows it as far as a line needs,
/// so arbitrarily long lines come through whole.
pub struct LineReader {
    buf: Vec<u8>,
}

impl Default for LineReader {
    fn default() -> Self {
        LineReader { buf: Vec::with_capacity(16 * 1024) }
    }
}

impl LineReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the next line into the internal buffer. Returns false at end of
    /// input. The terminator (`\n` or `\r\n`) is not kept.
    pub fn read(&mut self, reader: &mut dyn BufRead) -> io::Result<bool> {
        self.buf.clear();
        let bytes = reader.read_until(b'\n', &mut self.buf)?;
        if bytes == 0 {
            return Ok(false);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(true)
    }

    /// The line most recently read.
    pub fn line(&self) -> &[u8] {
        &self.buf
    }
}
