use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// text is not in the conventional representation
    Parse {
        input: String,
        source: time::error::Parse,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { input, source } => write!(f, "Failed to parse '{input}': {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse { source, .. } => Some(source),
        }
    }
}
