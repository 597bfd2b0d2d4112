//! Error types for reference construction and parsing

use std::fmt;

/// Errors raised while building, combining or parsing references
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BibleRefError {
    /// A well-formed but out-of-range reference (bad chapter, bad verse, unknown book)
    InvalidReference(String),
    /// A range would span two books while multi-book ranges are disabled
    MultibookNotAllowed(String),
    /// Text could not be reduced to a valid reference
    Parsing(ParsingError),
    /// A malformed call-site argument, such as a bad separator set or list index
    InvalidArgument(String),
}

/// A parse failure with the character span of the offending text.
///
/// `start` and `end` are character offsets (not byte offsets) into the parsed
/// string, so callers can highlight the span directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    pub message: String,
    pub start: usize,
    pub end: usize,
    pub cause: Option<Box<BibleRefError>>,
}

impl ParsingError {
    pub fn new(message: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            message: message.into(),
            start,
            end,
            cause: None,
        }
    }

    /// Wrap an error raised while reducing a node, keeping its message
    pub fn wrap(cause: BibleRefError, start: usize, end: usize) -> Self {
        Self {
            message: cause.message().to_string(),
            start,
            end,
            cause: Some(Box::new(cause)),
        }
    }
}

impl BibleRefError {
    pub fn invalid_reference(message: impl Into<String>) -> Self {
        BibleRefError::InvalidReference(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BibleRefError::InvalidArgument(message.into())
    }

    /// The bare message, without the error kind prefix
    pub fn message(&self) -> &str {
        match self {
            BibleRefError::InvalidReference(msg)
            | BibleRefError::MultibookNotAllowed(msg)
            | BibleRefError::InvalidArgument(msg) => msg,
            BibleRefError::Parsing(err) => &err.message,
        }
    }

    /// The parse error, if this is one
    pub fn as_parsing(&self) -> Option<&ParsingError> {
        match self {
            BibleRefError::Parsing(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {}..{})", self.message, self.start, self.end)
    }
}

impl std::error::Error for ParsingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl fmt::Display for BibleRefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BibleRefError::InvalidReference(msg) => write!(f, "Invalid reference: {}", msg),
            BibleRefError::MultibookNotAllowed(msg) => write!(f, "{}", msg),
            BibleRefError::Parsing(err) => write!(f, "Parsing error: {}", err),
            BibleRefError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for BibleRefError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BibleRefError::Parsing(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

impl From<ParsingError> for BibleRefError {
    fn from(err: ParsingError) -> Self {
        BibleRefError::Parsing(err)
    }
}

/// Result alias used throughout the crate
pub type BibleRefResult<T> = Result<T, BibleRefError>;
