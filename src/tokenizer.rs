const QUOTE: u8 = b'"';
const BACKSLASH: u8 = b'\\';

/// Bytes that end a word. Everything else, including non-ASCII and control
/// bytes, is word content.
const SEPARATORS: &[u8] = b"\t\n\r {}[],:\"";

const WORD_BYTES: [bool; 256] = build_word_table();

const fn build_word_table() -> [bool; 256] {
    let mut table = [true; 256];
    let mut i = 0;
    while i < SEPARATORS.len() {
        table[SEPARATORS[i] as usize] = false;
        i += 1;
    }
    table
}

#[inline]
pub fn is_word_byte(b: u8) -> bool {
    WORD_BYTES[b as usize]
}

/// Where the tokenizer is relative to double-quoted strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Normal,
    InQuotedString,
}

impl State {
    fn toggled(self) -> Self {
        match self {
            State::Normal => State::InQuotedString,
            State::InQuotedString => State::Normal,
        }
    }
}

/// A contiguous slice of the line with a uniform classification. Chunks
/// cover the line losslessly, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub bytes: &'a [u8],
    pub is_word: bool,
}

impl<'a> Chunk<'a> {
    /// The terminal chunk returned once the line is exhausted.
    pub const END: Chunk<'static> = Chunk { bytes: &[], is_word: false };

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub struct Tokenizer<'a> {
    rest: &'a [u8],
    state: State,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Tokenizer { rest: line, state: State::Normal }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Take the next chunk off the front of the line.
    ///
    /// Returns [`Chunk::END`] (empty, non-word) once the line is exhausted,
    /// and keeps returning it on further calls.
    pub fn next_chunk(&mut self) -> Chunk<'a> {
        let Some(&head) = self.rest.first() else {
            return Chunk::END;
        };

        let (len, is_word) = if head == QUOTE {
            self.state = self.state.toggled();
            (1, false)
        } else if self.state == State::InQuotedString {
            (quoted_run_len(self.rest), true)
        } else if is_word_byte(head) {
            (run_len(self.rest, is_word_byte), true)
        } else {
            (run_len(self.rest, |b| b != QUOTE && !is_word_byte(b)), false)
        };

        let (bytes, rest) = self.rest.split_at(len);
        self.rest = rest;
        Chunk { bytes, is_word }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let chunk = self.next_chunk();
        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

/// Length of the quoted-string content at the start of `buf`: everything up
/// to (not including) the first unescaped `"`, or all of `buf` when the
/// string is unterminated.
///
/// A quote is escaped iff it follows an odd number of consecutive
/// backslashes. The escaped byte itself is not interpreted.
pub fn quoted_run_len(buf: &[u8]) -> usize {
    let mut escaped = false;
    for (i, &b) in buf.iter().enumerate() {
        if escaped {
            escaped = false;
        } else if b == BACKSLASH {
            escaped = true;
        } else if b == QUOTE {
            return i;
        }
    }
    buf.len()
}

fn run_len(buf: &[u8], keep: impl Fn(u8) -> bool) -> usize {
    buf.iter().position(|&b| !keep(b)).unwrap_or(buf.len())
}
