use thiserror::Error;

/// Problem found in a single field value. It is stored on the affected
/// record rather than returned, so one bad list item never hides the others.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Syntax error at position {position}: {reason}")]
    Syntax {
        position: usize,
        reason: &'static str,
    },

    #[error("Invalid value: {0}")]
    Validation(String),
}

impl ParseError {
    pub(crate) fn syntax(position: usize, reason: &'static str) -> Self {
        Self::Syntax { position, reason }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Misuse of the API: wrong value type, missing capability, bad explicit input.
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("Empty header name")]
    EmptyName,

    #[error("{0} has no header name")]
    Unnamed(&'static str),

    #[error("The value must be of type {expected}, {given} given")]
    TypeMismatch {
        expected: &'static str,
        given: &'static str,
    },

    #[error("{value_type} does not support {capability}")]
    Unsupported {
        value_type: &'static str,
        capability: &'static str,
    },

    #[error(transparent)]
    Invalid(#[from] ParseError),

    #[error("Invalid header name: {0}")]
    InvalidName(#[from] http::header::InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidValue(#[from] http::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, HeaderError>;
