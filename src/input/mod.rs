pub mod line;

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::process::{Child, ChildStdout, Command, Stdio};

use crate::error::ClError;
use line::LineReader;

/// Name used for stdin in diagnostics and on the command line.
pub const STDIN_NAME: &str = "-";

/// A unified line source over stdin or a sequence of files, concatenated in
/// order the way `cat` treats its operands.
pub struct Input {
    sources: VecDeque<Source>,
    current: Option<(String, Box<dyn BufRead>)>,
    lines: LineReader,
}

enum Source {
    Stdin,
    File(String),
    Reader(String, Box<dyn BufRead>),
}

impl Input {
    /// Create an Input from a list of file paths.
    /// If the list is empty, read from stdin.
    pub fn new(files: &[String]) -> Self {
        let sources = if files.is_empty() {
            VecDeque::from([Source::Stdin])
        } else {
            files
                .iter()
                .map(|f| {
                    if f == STDIN_NAME {
                        Source::Stdin
                    } else {
                        Source::File(f.clone())
                    }
                })
                .collect()
        };
        Self::with_sources(sources)
    }

    /// Create an Input over an already-open reader.
    pub fn from_reader(name: impl Into<String>, reader: Box<dyn BufRead>) -> Self {
        Self::with_sources(VecDeque::from([Source::Reader(name.into(), reader)]))
    }

    fn with_sources(sources: VecDeque<Source>) -> Self {
        Input { sources, current: None, lines: LineReader::new() }
    }

    /// Read the next line, without its terminator. Returns None at end of
    /// all input.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>, ClError> {
        loop {
            if self.current.is_none() {
                match self.sources.pop_front() {
                    Some(source) => self.current = Some(open(source)?),
                    None => return Ok(None),
                }
            }
            let Some((name, reader)) = self.current.as_mut() else {
                return Ok(None);
            };

            let more = self
                .lines
                .read(reader.as_mut())
                .map_err(|err| ClError::Read { source: name.clone(), err })?;
            if more {
                return Ok(Some(self.lines.line()));
            }
            // End of this source; move to the next
            self.current = None;
        }
    }
}

fn open(source: Source) -> Result<(String, Box<dyn BufRead>), ClError> {
    let (name, reader): (String, Box<dyn BufRead>) = match source {
        Source::Stdin => (STDIN_NAME.to_string(), Box::new(BufReader::new(io::stdin()))),
        Source::Reader(name, reader) => (name, reader),
        Source::File(path) => match open_maybe_compressed(&path) {
            Ok(r) => (path, Box::new(BufReader::new(r))),
            Err(err) => return Err(ClError::Open { path, err }),
        },
    };
    Ok((name, reader))
}

/// Open a file, decompressing transparently if its extension says so.
pub fn open_maybe_compressed(path: &str) -> io::Result<Box<dyn Read>> {
    let Some(cmd) = decompressor(path) else {
        return Ok(Box::new(File::open(path)?));
    };

    // Surface a missing file as NotFound instead of a decompressor complaint
    std::fs::metadata(path)?;

    let mut child = Command::new(cmd)
        .args(["-dc", path])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            io::Error::new(e.kind(), format!("cannot run '{}' to decompress: {}", cmd, e))
        })?;

    let Some(stdout) = child.stdout.take() else {
        let _ = child.kill();
        let _ = child.wait();
        return Err(io::Error::other(format!("'{}' has no stdout", cmd)));
    };
    Ok(Box::new(Decompressed { cmd, child, stdout, reaped: false }))
}

/// Output of a decompressor process. End of output only counts as end of
/// input once the process has exited successfully; a failing decompressor
/// (corrupt or truncated archive) turns into a read error.
struct Decompressed {
    cmd: &'static str,
    child: Child,
    stdout: ChildStdout,
    reaped: bool,
}

impl Read for Decompressed {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.stdout.read(buf)?;
        if n > 0 || buf.is_empty() || self.reaped {
            return Ok(n);
        }
        let status = self.child.wait()?;
        self.reaped = true;
        if status.success() {
            Ok(0)
        } else {
            Err(io::Error::other(format!("'{} -dc' failed ({})", self.cmd, status)))
        }
    }
}

impl Drop for Decompressed {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

/// Decompressor command for a compressed path, if any.
pub fn decompressor(path: &str) -> Option<&'static str> {
    if path.ends_with(".gz") || path.ends_with(".tgz") {
        Some("gzip")
    } else if path.ends_with(".zst") || path.ends_with(".zstd") {
        Some("zstd")
    } else if path.ends_with(".bz2") {
        Some("bzip2")
    } else if path.ends_with(".xz") {
        Some("xz")
    } else if path.ends_with(".lz4") {
        Some("lz4")
    } else {
        None
    }
}
