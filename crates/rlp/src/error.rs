use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RlpError {
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    #[error("Declared length {needed} exceeds the {remaining} remaining bytes")]
    Truncated { needed: usize, remaining: usize },

    #[error("Non-canonical encoding: {0}")]
    NonCanonical(&'static str),

    #[error("{count} trailing bytes after a complete item")]
    TrailingBytes { count: usize },

    #[error("Nesting deeper than the limit of {limit}")]
    LimitExceeded { limit: usize },

    #[error("Expected a byte string, found a list")]
    ExpectedBytes,

    #[error("Expected a list, found a byte string")]
    ExpectedList,

    #[error("Integer too large for the target width")]
    IntegerOverflow,

    #[error("Byte string is not valid UTF-8")]
    InvalidUtf8,

    #[error("Expected a list of {expected} items, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("Expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Field `{field}` does not match its declared codec")]
    FieldTypeMismatch { field: &'static str },
}

pub type Result<T> = std::result::Result<T, RlpError>;
