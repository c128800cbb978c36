//! Error types for sender extraction

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Classified rejection of a header value
///
/// One per header value, terminal. The extractor is never run once one of
/// these has been produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderError {
    /// No line carried the field label before the first blank line
    #[error("\"From\" header missing or value is empty")]
    HeaderMissing,

    /// Literal `>>` or `<<` in the value
    #[error("nested < .. > not allowed as part of addr-spec")]
    NestedAngleBrackets,

    /// `<` present but no `@`
    #[error("missing @ domain")]
    MissingDomain,

    /// No `@` anywhere
    #[error("no addr-spec found")]
    NoAddrSpec,

    /// Local part starts or ends with `.`, or domain starts with `.`
    #[error(
        "RFC 5322 forbids the localpart (what comes before the last @ in addr-spec) from ending in a dot"
    )]
    LocalOrDomainDotBoundary,

    /// More than one bracketed addr-spec after a single quoted span
    #[error("more than one addr-spec given")]
    MultipleAddrSpecs,

    /// Odd quote or escaped-quote count after normalization
    #[error("unterminated quoted part")]
    UnterminatedQuote,
}

/// Errors surfaced by the header sources wrapped around the core
#[derive(Error, Debug)]
pub enum ParseError {
    /// The header value was located but rejected
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// Failed to open or read a message file
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read from an in-memory or streamed source
    #[error("Failed to read header lines: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to parse the raw message header block
    #[error("Failed to parse message headers: {0}")]
    Structure(String),
}

impl ParseError {
    /// Create an `Io` variant from a path and an `io::Error`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The header classification, if this error carries one
    #[must_use]
    pub const fn header_error(&self) -> Option<HeaderError> {
        match self {
            Self::Header(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Result type for sender parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
