use std::hash::Hasher;

use rustc_hash::FxHasher;

/// Lowest palette index handed out (inclusive). Skips the 16 system colors,
/// whose look depends on the terminal theme, and the darkest blues.
pub const MIN_COLOR: u8 = 19;
/// Highest palette index handed out (inclusive). Stops short of the
/// grayscale ramp.
pub const MAX_COLOR: u8 = 230;

const SPAN: u64 = (MAX_COLOR - MIN_COLOR) as u64 + 1;

/// 256-color palette index for a token. Same bytes, same color, in every run.
pub fn color(bytes: &[u8]) -> u8 {
    // Modulo bias is accepted; the spread only needs to look varied.
    MIN_COLOR + (hash(bytes) % SPAN) as u8
}

fn hash(bytes: &[u8]) -> u64 {
    let mut h = FxHasher::default();
    h.write(bytes);
    h.finish()
}
