//! Parser error types for declmap-parser.

/// Errors that can occur while reading, parsing or decoding a Go source index.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: syntax error: {message}")]
    Syntax {
        path: String,
        line: u32,
        message: String,
    },

    #[error("{path}:1:1: expected 'package' clause")]
    MissingPackage { path: String },

    #[error("Invalid declaration record `{line}`: {reason}")]
    InvalidRecord { line: String, reason: String },
}
