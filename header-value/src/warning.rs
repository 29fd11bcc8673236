use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    date::{format_http_date, parse_http_date},
    error::ParseError,
    grammar::{LexicalParser, escape},
};

/// Parsed `Warning` value (RFC 7234 5.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    code: u16,
    agent: String,
    text: String,
    date: Option<DateTime<Utc>>,
}

impl Warning {
    pub const RESPONSE_IS_STALE: u16 = 110;
    pub const REVALIDATION_FAILED: u16 = 111;
    pub const DISCONNECTED_OPERATION: u16 = 112;
    pub const HEURISTIC_EXPIRATION: u16 = 113;
    pub const MISCELLANEOUS_WARNING: u16 = 199;
    pub const TRANSFORMATION_APPLIED: u16 = 214;
    pub const MISCELLANEOUS_PERSISTENT_WARNING: u16 = 299;

    pub fn new(code: u16, agent: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code,
            agent: agent.into(),
            text: text.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub(crate) fn validate(&self) -> Result<(), ParseError> {
        if !(100..=999).contains(&self.code) {
            return Err(ParseError::validation(format!("Incorrect warn-code {}", self.code)));
        }
        if self.agent.is_empty() || self.agent.contains(char::is_whitespace) {
            return Err(ParseError::validation(format!("Incorrect warn-agent {:?}", self.agent)));
        }

        Ok(())
    }

    pub(crate) fn parse(value: &str) -> Result<Self, ParseError> {
        let (code, rest) = split_word(value.trim());
        if !LexicalParser::is_warn_code(code) {
            return Err(ParseError::validation(format!("Incorrect warn-code {code:?}")));
        }
        let code = code
            .parse()
            .map_err(|_| ParseError::validation(format!("Incorrect warn-code {code:?}")))?;

        let (agent, rest) = split_word(rest);
        if agent.is_empty() {
            return Err(ParseError::validation("Warn-agent is not defined"));
        }
        if rest.is_empty() {
            return Err(ParseError::validation("Warn-text is not defined"));
        }

        let tail = LexicalParser::warning_tail(rest)
            .ok_or_else(|| ParseError::validation(format!("Bad quoted string format: {rest:?}")))?;
        let date = tail
            .date
            .map(|date| {
                parse_http_date(date)
                    .ok_or_else(|| ParseError::validation(format!("Incorrect warn-date {date:?}")))
            })
            .transpose()?;

        Ok(Self {
            code,
            agent: agent.to_owned(),
            text: tail.text,
            date,
        })
    }
}

/// Splits off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.code, self.agent, escape(&self.text))?;
        if let Some(date) = &self.date {
            write!(f, " \"{}\"", format_http_date(date))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_warning_without_date() {
        let warning = Warning::parse(r#"  110  anderson/1.3.37 "Response is stale" "#).unwrap();
        assert_eq!(warning.code(), Warning::RESPONSE_IS_STALE);
        assert_eq!(warning.agent(), "anderson/1.3.37");
        assert_eq!(warning.text(), "Response is stale");
        assert_eq!(warning.date(), None);
        assert_eq!(warning.to_string(), r#"110 anderson/1.3.37 "Response is stale""#);
    }

    #[test]
    fn test_parse_warning_with_date() {
        let warning =
            Warning::parse(r#"112 - "cache down" "Wed, 21 Oct 2015 07:28:00 GMT""#).unwrap();
        assert_eq!(warning.code(), Warning::DISCONNECTED_OPERATION);
        assert_eq!(warning.date(), Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).single());
    }

    #[test]
    fn test_parse_escaped_text() {
        let warning = Warning::parse(r#"199 - "say \"hi\"""#).unwrap();
        assert_eq!(warning.text(), r#"say "hi""#);
        assert_eq!(warning.to_string(), r#"199 - "say \"hi\"""#);
    }

    #[test]
    fn test_reject_malformed_warnings() {
        for input in [
            "",
            "110",
            "110 agent",
            "099 - \"text\"",
            "1000 - \"text\"",
            "abc - \"text\"",
            "110 - text",
            "110 - \"text\" now",
            "110 - \"text\" \"not a date\"",
        ] {
            assert!(Warning::parse(input).is_err(), "{input}");
        }
    }

    #[test]
    fn test_validate_dataset() {
        assert!(Warning::new(299, "-", "").validate().is_ok());
        assert!(Warning::new(42, "-", "").validate().is_err());
        assert!(Warning::new(110, "two words", "").validate().is_err());
    }
}
