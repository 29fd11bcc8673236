use std::{fmt, str::FromStr};

use crate::{error::ParseError, grammar::LexicalParser};

/// Opaque validator of an `ETag` value (RFC 7232 2.3).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityTag {
    tag: String,
    weak: bool,
}

impl EntityTag {
    pub fn new(tag: impl Into<String>, weak: bool) -> Result<Self, ParseError> {
        let tag = tag.into();
        if !LexicalParser::is_opaque_tag(&tag) {
            return Err(ParseError::validation(format!("Invalid entity tag characters: {tag:?}")));
        }

        Ok(Self { tag, weak })
    }

    pub fn strong(tag: impl Into<String>) -> Result<Self, ParseError> {
        Self::new(tag, false)
    }

    pub fn weak(tag: impl Into<String>) -> Result<Self, ParseError> {
        Self::new(tag, true)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_weak(&self) -> bool {
        self.weak
    }

    /// RFC 7232 2.3.2
    pub fn strong_eq(&self, other: &EntityTag) -> bool {
        !self.weak && !other.weak && self.tag == other.tag
    }

    pub fn weak_eq(&self, other: &EntityTag) -> bool {
        self.tag == other.tag
    }
}

impl FromStr for EntityTag {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        LexicalParser::entity_tag(input.trim())
            .map(|(weak, tag)| Self {
                tag: tag.to_owned(),
                weak,
            })
            .ok_or_else(|| ParseError::validation(format!("Invalid ETag value format: {input:?}")))
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weak {
            f.write_str("W/")?;
        }
        write!(f, "\"{}\"", self.tag)
    }
}
