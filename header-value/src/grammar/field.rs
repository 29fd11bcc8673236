use std::mem;

use crate::{error::ParseError, value_type::Grammar};

/// RFC 2616 2.2 separators that may not appear in a token.
const DELIMITERS: &str = "\"(),/:;<=>?@[\\]{}";

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(c)
}

fn is_space_or_control(c: char) -> bool {
    u32::from(c) <= 32
}

/// One list member as read off the wire, before it is bound to a value type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub value: String,
    pub params: Vec<(String, String)>,
    pub error: Option<ParseError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Value,
    ParamName,
    ParamValue,
    ParamQuotedValue,
    None,
}

struct FieldState {
    part: Part,
    buffer: String,
    key: String,
    value: String,
    params: Vec<(String, String)>,
    error: Option<ParseError>,
}

impl FieldState {
    fn new() -> Self {
        Self {
            part: Part::Value,
            buffer: String::new(),
            key: String::new(),
            value: String::new(),
            params: Vec::new(),
            error: None,
        }
    }

    /// The first occurrence of a raw key wins.
    fn add_param_from_buffer(&mut self) {
        let key = mem::take(&mut self.key);
        let value = mem::take(&mut self.buffer);
        if !self.params.iter().any(|(existing, _)| *existing == key) {
            self.params.push((key, value));
        }
    }

    fn take_item(&mut self) -> RawItem {
        self.buffer.clear();
        self.key.clear();
        RawItem {
            value: mem::take(&mut self.value),
            params: mem::take(&mut self.params),
            error: self.error.take(),
        }
    }

    fn trimmed_buffer(&mut self) -> String {
        let value = self.buffer.trim().to_owned();
        self.buffer.clear();
        value
    }
}

/// Single-pass scanner over a raw field body.
pub struct FieldParser {
    is_list: bool,
    has_params: bool,
}

impl FieldParser {
    pub fn new(grammar: Grammar) -> Self {
        Self {
            is_list: grammar.is_list || grammar.is_directive,
            has_params: grammar.has_params || grammar.is_directive,
        }
    }

    /// Always yields at least one item.
    pub fn parse(&self, body: &str) -> Vec<RawItem> {
        if !self.is_list && !self.has_params {
            return vec![RawItem {
                value: body.trim().to_owned(),
                ..RawItem::default()
            }];
        }

        let mut state = FieldState::new();
        let mut items = Vec::new();
        if let Err(error) = self.scan(body, &mut state, &mut items) {
            tracing::trace!(%error, "Field body scan stopped");
            state.error = Some(error);
        }
        Self::finish(body.len(), &mut state);
        items.push(state.take_item());

        items
    }

    fn scan(
        &self,
        body: &str,
        state: &mut FieldState,
        items: &mut Vec<RawItem>,
    ) -> Result<(), ParseError> {
        let mut chars = body.char_indices();
        while let Some((position, c)) = chars.next() {
            match state.part {
                Part::Value => match c {
                    '=' if self.has_params => Self::split_bare_param(position, state)?,
                    ';' if self.has_params => {
                        state.value = state.trimmed_buffer();
                        state.part = Part::ParamName;
                    }
                    ',' if self.is_list => {
                        state.value = state.trimmed_buffer();
                        items.push(state.take_item());
                    }
                    c => state.buffer.push(c),
                },
                Part::ParamName => match c {
                    '=' => {
                        state.key = mem::take(&mut state.buffer);
                        state.part = Part::ParamValue;
                    }
                    c if is_delimiter(c) => {
                        return Err(ParseError::syntax(position, "delimiter char in a param name"));
                    }
                    c if is_space_or_control(c) => {
                        if !state.buffer.is_empty() {
                            return Err(ParseError::syntax(position, "space in a param name"));
                        }
                    }
                    c => state.buffer.push(c),
                },
                Part::ParamValue if state.buffer.is_empty() => match c {
                    '"' => state.part = Part::ParamQuotedValue,
                    c if is_space_or_control(c) => continue,
                    c if !is_delimiter(c) => state.buffer.push(c),
                    _ => {
                        return Err(ParseError::syntax(
                            position,
                            "delimiter char in an unquoted param value",
                        ));
                    }
                },
                Part::ParamValue => match c {
                    c if is_space_or_control(c) => {
                        state.add_param_from_buffer();
                        state.part = Part::None;
                    }
                    c if !is_delimiter(c) => state.buffer.push(c),
                    ';' => {
                        state.add_param_from_buffer();
                        state.part = Part::ParamName;
                    }
                    ',' if self.is_list => {
                        state.add_param_from_buffer();
                        items.push(state.take_item());
                        state.part = Part::Value;
                    }
                    _ => {
                        state.buffer.clear();
                        return Err(ParseError::syntax(
                            position,
                            "delimiter char in an unquoted param value",
                        ));
                    }
                },
                Part::ParamQuotedValue => match c {
                    '\\' => match chars.next() {
                        Some((_, escaped)) => state.buffer.push(escaped),
                        None => {
                            return Err(ParseError::syntax(body.len(), "incorrect quoted pair"));
                        }
                    },
                    '"' => {
                        state.add_param_from_buffer();
                        state.part = Part::None;
                    }
                    c => state.buffer.push(c),
                },
                Part::None => match c {
                    c if is_space_or_control(c) => continue,
                    ';' if self.has_params => state.part = Part::ParamName,
                    ',' if self.is_list => {
                        items.push(state.take_item());
                        state.part = Part::Value;
                    }
                    _ => return Err(ParseError::syntax(position, "expected separator")),
                },
            }
        }

        Ok(())
    }

    /// Handles `=` met while the main value is still being read. Either the
    /// buffer is a bare parameter name, or a value and a parameter name were
    /// separated by whitespace instead of `;`.
    fn split_bare_param(position: usize, state: &mut FieldState) -> Result<(), ParseError> {
        let key = state.buffer.trim_start().to_owned();
        state.buffer.clear();
        if !key.contains(char::is_whitespace) {
            state.key = key;
            state.part = Part::ParamValue;
            return Ok(());
        }

        let trailing = key.ends_with(char::is_whitespace);
        let mut chunks = key.split_whitespace().collect::<Vec<_>>();
        if let [value, name] = chunks[..]
            && !trailing
        {
            state.value = value.to_owned();
            state.key = name.to_owned();
            state.part = Part::ParamValue;
            return Ok(());
        }

        if !trailing {
            chunks.pop();
        }
        state.buffer = chunks.join(" ");

        Err(ParseError::syntax(position, "misplaced whitespace before '='"))
    }

    /// Flushes whatever the scan left behind into the pending item.
    fn finish(length: usize, state: &mut FieldState) {
        match state.part {
            Part::Value => state.value = state.trimmed_buffer(),
            Part::ParamValue | Part::ParamQuotedValue => {
                if state.part == Part::ParamQuotedValue && state.error.is_none() {
                    state.error = Some(ParseError::syntax(length, "unterminated quoted string"));
                }
                if state.buffer.is_empty() {
                    if state.error.is_none() {
                        state.error = Some(ParseError::syntax(length, "empty value should be quoted"));
                    }
                } else {
                    state.add_param_from_buffer();
                }
            }
            Part::ParamName | Part::None => {}
        }
    }
}
