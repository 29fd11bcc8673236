use std::{fmt, iter};

use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::{
    date::{format_http_date, parse_http_date},
    directive::Directive,
    entity_tag::EntityTag,
    error::{HeaderError, ParseError, Result},
    grammar::{LexicalParser, RawItem},
    params::{Params, render_param},
    traits::{HttpMessage, wire_lines, write_lines},
    value_type::{Behavior, ValueType},
    warning::Warning,
};

const DEFAULT_QUALITY: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    None,
    Directive(Directive),
    EntityTag(EntityTag),
    Warning(Warning),
}

/// One typed header value: the main token, its parameters, the quality
/// factor and the error found while reading it, if any.
///
/// Records are values; every `with_*` method returns a modified copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    value_type: &'static ValueType,
    value: String,
    params: Params,
    quality: String,
    payload: Payload,
    error: Option<ParseError>,
}

impl FieldValue {
    /// Takes `value` as the main token without splitting it.
    pub fn new(value_type: &'static ValueType, value: &str) -> Self {
        let mut record = Self::empty(value_type);
        record.set_value(value);
        record
    }

    fn empty(value_type: &'static ValueType) -> Self {
        Self {
            value_type,
            value: String::new(),
            params: Params::new(),
            quality: DEFAULT_QUALITY.to_owned(),
            payload: Payload::None,
            error: None,
        }
    }

    /// Binds one scanned list member to `value_type`. The scanner's error
    /// takes precedence over any validation error.
    pub(crate) fn from_raw(value_type: &'static ValueType, item: RawItem) -> Self {
        let RawItem {
            value,
            params,
            error,
        } = item;
        let mut record = Self::new(value_type, &value);

        if let Some(table) = value_type.directive_table() {
            if value.is_empty()
                && let Some((name, argument)) = params.first()
            {
                let (directive, mut invalid) = Directive::resolve(table, name, Some(argument.as_str()));
                if invalid.is_none() && params.len() > 1 {
                    invalid = Some(ParseError::validation(format!(
                        "{} directive should have a single argument",
                        directive.name()
                    )));
                }
                record.set_directive(directive);
                record.error = invalid;
            }
        } else if value_type.has_params()
            && let Err(invalid) = record.set_params(params)
        {
            record.error = Some(invalid);
        }

        if error.is_some() {
            record.error = error;
        }
        record
    }

    pub fn value_type(&self) -> &'static ValueType {
        self.value_type
    }

    /// The main token; the directive name for directive values.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn with_value(&self, value: &str) -> Self {
        let mut clone = self.clone();
        clone.set_value(value);
        clone
    }

    fn set_value(&mut self, value: &str) {
        match self.value_type.behavior() {
            Behavior::Directive(table) => {
                let (directive, error) = Directive::resolve(table, value, None);
                self.set_directive(directive);
                self.error = error;
            }
            Behavior::Age => {
                self.value = value.to_owned();
                self.error = (!LexicalParser::is_delta_seconds(value))
                    .then(|| ParseError::validation("The value must consist of digits only"));
            }
            Behavior::EntityTag => {
                self.value = value.trim().to_owned();
                self.payload = Payload::None;
                self.error = None;
                match self.value.parse::<EntityTag>() {
                    Ok(tag) => self.payload = Payload::EntityTag(tag),
                    Err(error) => self.error = Some(error),
                }
            }
            Behavior::Warning => {
                self.value = value.trim().to_owned();
                self.payload = Payload::None;
                self.error = None;
                match Warning::parse(&self.value) {
                    Ok(warning) => self.payload = Payload::Warning(warning),
                    Err(error) => self.error = Some(error),
                }
            }
            Behavior::Date => {
                self.value = value.trim().to_owned();
                self.error = parse_http_date(&self.value)
                    .is_none()
                    .then(|| ParseError::validation(format!("Invalid HTTP date: {:?}", self.value)));
            }
            Behavior::Simple | Behavior::WithParams | Behavior::WithQuality => {
                self.value = value.to_owned();
            }
        }
    }

    /// Parameters without the quality factor.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Replaces the parameters. On quality-aware types the `q` entry is
    /// moved into [`FieldValue::quality`]. On directive types the first
    /// pair becomes the directive.
    pub fn with_params<K, V, I>(&self, params: I) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let params = params
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_owned(), value.into()))
            .collect::<Vec<_>>();

        if self.value_type.is_directive() {
            return match params.first() {
                Some((name, argument)) => self.with_directive(name, Some(argument.as_str())),
                None => Ok(self.with_value("")),
            };
        }
        if !self.value_type.has_params() {
            return Err(self.value_type.unsupported("parameters"));
        }

        let mut clone = self.clone();
        clone.set_params(params)?;
        Ok(clone)
    }

    fn set_params(&mut self, pairs: Vec<(String, String)>) -> std::result::Result<(), ParseError> {
        self.params = pairs.into_iter().collect();
        if !self.value_type.has_quality() {
            return Ok(());
        }

        let quality = self.params.remove("q");
        let quality = quality.as_deref().unwrap_or(DEFAULT_QUALITY);
        if !self.set_quality(quality) {
            return Err(ParseError::validation(format!("Invalid quality value {quality:?}")));
        }

        Ok(())
    }

    /// Canonical quality text, `"1"` unless the value says otherwise.
    pub fn quality(&self) -> &str {
        &self.quality
    }

    /// Stores `q` in canonical form (`"0.500"` becomes `"0.5"`). Returns
    /// `false` and keeps the current quality when `q` is not a valid qvalue
    /// or the type has no quality.
    pub fn set_quality(&mut self, q: &str) -> bool {
        if !self.value_type.has_quality() || !LexicalParser::is_qvalue(q) {
            return false;
        }

        let canonical = q.trim_end_matches(['0', '.']);
        self.quality = if canonical.is_empty() {
            "0".to_owned()
        } else {
            canonical.to_owned()
        };
        true
    }

    pub fn with_quality(&self, q: &str) -> Result<Self> {
        if !self.value_type.has_quality() {
            return Err(self.value_type.unsupported("quality"));
        }

        let mut clone = self.clone();
        if !clone.set_quality(q) {
            return Err(ParseError::validation(format!("Invalid quality value {q:?}")).into());
        }
        Ok(clone)
    }

    /// Quality in thousandths.
    pub(crate) fn weight(&self) -> u16 {
        let (whole, fraction) = self
            .quality
            .split_once('.')
            .unwrap_or((self.quality.as_str(), ""));
        let whole = if whole == "1" { 1000 } else { 0 };
        let fraction = fraction
            .bytes()
            .chain(iter::repeat(b'0'))
            .take(3)
            .fold(0, |thousandths, digit| thousandths * 10 + u16::from(digit.saturating_sub(b'0')));
        whole + fraction
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn with_error(&self, error: Option<ParseError>) -> Self {
        let mut clone = self.clone();
        clone.error = error;
        clone
    }

    pub fn directive(&self) -> Option<&Directive> {
        match &self.payload {
            Payload::Directive(directive) => Some(directive),
            _ => None,
        }
    }

    /// Fails when `argument` is not what the directive accepts.
    pub fn with_directive(&self, name: &str, argument: Option<&str>) -> Result<Self> {
        let table = self
            .value_type
            .directive_table()
            .ok_or_else(|| self.value_type.unsupported("directives"))?;

        let (directive, error) = Directive::resolve(table, name, argument);
        if let Some(error) = error {
            return Err(error.into());
        }

        let mut clone = self.clone();
        clone.set_directive(directive);
        clone.error = None;
        Ok(clone)
    }

    fn set_directive(&mut self, directive: Directive) {
        self.value = directive.name().to_owned();
        self.payload = Payload::Directive(directive);
    }

    pub fn entity_tag(&self) -> Option<&EntityTag> {
        match &self.payload {
            Payload::EntityTag(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn with_entity_tag(&self, tag: EntityTag) -> Result<Self> {
        if self.value_type.behavior() != Behavior::EntityTag {
            return Err(self.value_type.unsupported("entity tags"));
        }

        let mut clone = self.clone();
        clone.value = tag.to_string();
        clone.payload = Payload::EntityTag(tag);
        clone.error = None;
        Ok(clone)
    }

    pub fn with_tag(&self, tag: &str, weak: bool) -> Result<Self> {
        self.with_entity_tag(EntityTag::new(tag, weak)?)
    }

    pub fn warning(&self) -> Option<&Warning> {
        match &self.payload {
            Payload::Warning(warning) => Some(warning),
            _ => None,
        }
    }

    pub fn with_warning(&self, warning: Warning) -> Result<Self> {
        if self.value_type.behavior() != Behavior::Warning {
            return Err(self.value_type.unsupported("warnings"));
        }
        warning.validate()?;

        let mut clone = self.clone();
        clone.value = warning.to_string();
        clone.payload = Payload::Warning(warning);
        clone.error = None;
        Ok(clone)
    }

    /// Seconds of an `Age` value.
    pub fn delta_seconds(&self) -> Option<u64> {
        match self.value_type.behavior() {
            Behavior::Age if !self.has_error() => self.value.parse().ok(),
            _ => None,
        }
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        match self.value_type.behavior() {
            Behavior::Date => parse_http_date(&self.value),
            _ => None,
        }
    }

    pub fn with_datetime(&self, date: DateTime<Utc>) -> Result<Self> {
        if self.value_type.behavior() != Behavior::Date {
            return Err(self.value_type.unsupported("dates"));
        }

        Ok(self.with_value(&format_http_date(&date)))
    }

    /// Writes this value under its type's name, dropping existing lines
    /// first when `replace` is set.
    pub fn inject<M: HttpMessage>(&self, mut message: M, replace: bool) -> Result<M> {
        let name = self
            .value_type
            .name()
            .ok_or(HeaderError::Unnamed(self.value_type.label()))?;

        let (name, values) = wire_lines(name, [self.to_string()])?;
        write_lines(&mut message, name, values, replace);

        Ok(message)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Payload::Directive(directive) = &self.payload {
            return fmt::Display::fmt(directive, f);
        }
        if !self.value_type.has_params() {
            return f.write_str(&self.value);
        }

        let quality = (self.value_type.has_quality() && self.quality != DEFAULT_QUALITY)
            .then(|| render_param("q", &self.quality));
        let rendered = iter::once(self.value.clone())
            .filter(|value| !value.is_empty())
            .chain(self.params.iter().map(|(name, value)| render_param(name, value)))
            .chain(quality)
            .join(";");

        f.write_str(&rendered)
    }
}
