use std::io;

/// I/O failure at the edges of the pipeline, tagged with where it happened.
#[derive(Debug)]
pub enum ClError {
    /// A file operand could not be opened.
    Open { path: String, err: io::Error },
    /// Reading lines from a source failed.
    Read { source: String, err: io::Error },
    /// Writing rendered output failed.
    Write(io::Error),
}

impl std::fmt::Display for ClError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClError::Open { path, err } => write!(f, "{}: {}", path, err),
            ClError::Read { source, err } => write!(f, "{}: read error: {}", source, err),
            ClError::Write(err) => write!(f, "write error: {}", err),
        }
    }
}

impl std::error::Error for ClError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClError::Open { err, .. } | ClError::Read { err, .. } | ClError::Write(err) => {
                Some(err)
            }
        }
    }
}
