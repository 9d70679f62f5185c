use std::io::Write;

use crate::color::color;
use crate::error::ClError;
use crate::input::Input;
use crate::tokenizer::Tokenizer;

pub const SET_FOREGROUND_PREFIX: &[u8] = b"\x1b[38;5;";
pub const SET_FOREGROUND_SUFFIX: &[u8] = b"m";
pub const CLEAR_FOREGROUND: &[u8] = b"\x1b[39m";

/// Colorizes lines into one output buffer that is reused from line to line.
pub struct Renderer {
    out: Vec<u8>,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer { out: Vec::with_capacity(16 * 1024) }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `line` (no terminator) and return it newline-terminated.
    /// The returned slice is overwritten by the next call.
    pub fn render_line(&mut self, line: &[u8]) -> &[u8] {
        self.out.clear();
        let mut tz = Tokenizer::new(line);
        loop {
            let chunk = tz.next_chunk();
            if chunk.is_empty() {
                break;
            }
            if !chunk.is_word {
                self.out.extend_from_slice(chunk.bytes);
                continue;
            }
            self.out.extend_from_slice(SET_FOREGROUND_PREFIX);
            push_decimal(&mut self.out, color(chunk.bytes));
            self.out.extend_from_slice(SET_FOREGROUND_SUFFIX);
            self.out.extend_from_slice(chunk.bytes);
            self.out.extend_from_slice(CLEAR_FOREGROUND);
        }
        self.out.push(b'\n');
        &self.out
    }
}

/// Render a single line into a fresh buffer.
pub fn render_line(line: &[u8]) -> Vec<u8> {
    let mut r = Renderer { out: Vec::with_capacity(line.len() * 2 + 1) };
    r.render_line(line);
    r.out
}

/// ASCII decimal, no leading zeros.
fn push_decimal(out: &mut Vec<u8>, n: u8) {
    if n >= 100 {
        out.push(b'0' + n / 100);
    }
    if n >= 10 {
        out.push(b'0' + n / 10 % 10);
    }
    out.push(b'0' + n % 10);
}

/// Colorize every line of `input` into `sink`, one rendered line at a time.
/// Returns the number of lines written.
pub fn colorize_stream(input: &mut Input, sink: &mut dyn Write) -> Result<u64, ClError> {
    let mut renderer = Renderer::new();
    let mut count = 0;
    while let Some(line) = input.next_line()? {
        sink.write_all(renderer.render_line(line)).map_err(ClError::Write)?;
        count += 1;
    }
    sink.flush().map_err(ClError::Write)?;
    Ok(count)
}
