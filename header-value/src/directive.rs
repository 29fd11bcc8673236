use std::fmt;

use crate::{
    error::ParseError,
    grammar::{LexicalParser, escape},
};

/// Set of argument forms a directive accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentMask(u8);

impl ArgumentMask {
    pub const EMPTY: ArgumentMask = ArgumentMask(1);
    pub const DELTA_SECONDS: ArgumentMask = ArgumentMask(2);
    pub const HEADER_LIST: ArgumentMask = ArgumentMask(4);
    pub const CUSTOM: ArgumentMask = ArgumentMask(8);

    pub const fn union(self, other: ArgumentMask) -> ArgumentMask {
        ArgumentMask(self.0 | other.0)
    }

    pub const fn contains(self, other: ArgumentMask) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Lowercased directive name to the arguments it accepts. Names that are not
/// listed take any argument.
pub type DirectiveTable = [(&'static str, ArgumentMask)];

const OPTIONAL_HEADER_LIST: ArgumentMask = ArgumentMask::EMPTY.union(ArgumentMask::HEADER_LIST);

/// RFC 7234 5.2
pub const CACHE_CONTROL_DIRECTIVES: &DirectiveTable = &[
    ("max-age", ArgumentMask::DELTA_SECONDS),
    ("max-stale", ArgumentMask::DELTA_SECONDS),
    ("min-fresh", ArgumentMask::DELTA_SECONDS),
    ("s-maxage", ArgumentMask::DELTA_SECONDS),
    ("no-cache", OPTIONAL_HEADER_LIST),
    ("private", OPTIONAL_HEADER_LIST),
    ("no-store", ArgumentMask::EMPTY),
    ("no-transform", ArgumentMask::EMPTY),
    ("only-if-cached", ArgumentMask::EMPTY),
    ("must-revalidate", ArgumentMask::EMPTY),
    ("public", ArgumentMask::EMPTY),
    ("proxy-revalidate", ArgumentMask::EMPTY),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    None,
    DeltaSeconds,
    HeaderList,
    Custom,
}

/// A named, optionally argumented token such as `max-age=600`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    name: String,
    argument: Option<String>,
    kind: ArgumentKind,
}

impl Directive {
    /// Checks `argument` against what `table` allows for `name`. The directive
    /// is returned even when validation fails, together with the reason.
    pub(crate) fn resolve(
        table: &DirectiveTable,
        name: &str,
        argument: Option<&str>,
    ) -> (Directive, Option<ParseError>) {
        let name = name.to_ascii_lowercase();
        let mask = table
            .iter()
            .find(|(known, _)| *known == name)
            .map_or(ArgumentMask::CUSTOM, |(_, mask)| *mask);

        let directive = |argument: Option<&str>, kind| Directive {
            name: name.clone(),
            argument: argument.map(str::to_owned),
            kind,
        };

        match argument {
            None if mask.contains(ArgumentMask::EMPTY) => (directive(None, ArgumentKind::None), None),
            Some(_) if mask == ArgumentMask::EMPTY => {
                let error =
                    ParseError::validation(format!("{name} directive should not have an argument"));
                (directive(None, ArgumentKind::None), Some(error))
            }
            _ if mask.contains(ArgumentMask::HEADER_LIST) => {
                let argument = argument.map(str::trim);
                let error = match argument {
                    Some(list) if LexicalParser::is_field_name_list(list) => None,
                    _ => Some(ParseError::validation(format!(
                        "{name} directive should have an argument as a comma separated headers name list"
                    ))),
                };
                (directive(argument, ArgumentKind::HeaderList), error)
            }
            _ if mask.contains(ArgumentMask::DELTA_SECONDS) => match argument {
                Some(seconds) if LexicalParser::is_delta_seconds(seconds) => {
                    (directive(Some(seconds), ArgumentKind::DeltaSeconds), None)
                }
                _ => {
                    let error =
                        ParseError::validation(format!("{name} directive should have numeric argument"));
                    (directive(Some("0"), ArgumentKind::DeltaSeconds), Some(error))
                }
            },
            _ => (directive(argument, ArgumentKind::Custom), None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    /// Header names carried by a `no-cache="..."` or `private="..."` argument.
    pub fn argument_list(&self) -> Vec<&str> {
        self.argument
            .as_deref()
            .map(|list| list.split(',').map(str::trim).collect())
            .unwrap_or_default()
    }

    /// Seconds carried by `max-age` and friends.
    pub fn delta_seconds(&self) -> Option<u64> {
        match self.kind {
            ArgumentKind::DeltaSeconds => self.argument.as_deref()?.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            return Ok(());
        }
        let Some(argument) = self.argument.as_deref() else {
            return f.write_str(&self.name);
        };

        match self.kind {
            ArgumentKind::HeaderList => write!(f, "{}=\"{argument}\"", self.name),
            ArgumentKind::Custom => {
                let escaped = escape(argument);
                if escaped.len() == argument.len() && LexicalParser::is_safe_token(argument) {
                    write!(f, "{}={argument}", self.name)
                } else {
                    write!(f, "{}=\"{escaped}\"", self.name)
                }
            }
            ArgumentKind::None | ArgumentKind::DeltaSeconds => write!(f, "{}={argument}", self.name),
        }
    }
}
