use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./grammar/lexical.pest"]
pub struct LexicalParser;

/// Parts of a `Warning` value that follow the code and the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningTail<'a> {
    pub text: String,
    pub date: Option<&'a str>,
}

impl LexicalParser {
    fn matches(rule: Rule, input: &str) -> bool {
        Self::parse(rule, input).is_ok()
    }

    pub fn is_qvalue(input: &str) -> bool {
        Self::matches(Rule::qvalue, input)
    }

    pub fn is_delta_seconds(input: &str) -> bool {
        Self::matches(Rule::delta_seconds, input)
    }

    pub fn is_safe_token(input: &str) -> bool {
        Self::matches(Rule::safe_token, input)
    }

    pub fn is_field_name_list(input: &str) -> bool {
        Self::matches(Rule::field_name_list, input)
    }

    pub fn is_warn_code(input: &str) -> bool {
        Self::matches(Rule::warn_code, input)
    }

    pub fn is_opaque_tag(input: &str) -> bool {
        Self::matches(Rule::bare_tag, input)
    }

    /// Returns `(weak, tag)` for a well-formed entity tag.
    pub fn entity_tag(input: &str) -> Option<(bool, &str)> {
        let pairs = Self::parse(Rule::entity_tag, input).ok()?;
        let mut weak = false;
        let mut tag = None;
        for pair in pairs.flatten() {
            match pair.as_rule() {
                Rule::weak_prefix => weak = true,
                Rule::opaque_tag => tag = Some(pair.as_str()),
                _ => continue,
            }
        }

        tag.map(|tag| (weak, tag))
    }

    pub fn warning_tail(input: &str) -> Option<WarningTail<'_>> {
        let pairs = Self::parse(Rule::warn_tail, input).ok()?;
        let mut text = None;
        let mut date = None;
        for pair in pairs.flatten() {
            match pair.as_rule() {
                Rule::warn_text => text = Some(unescape(pair.as_str())),
                Rule::warn_date => date = Some(pair.as_str()),
                _ => continue,
            }
        }

        text.map(|text| WarningTail { text, date })
    }
}

/// Backslash-escapes `\` and `"`.
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Drops the backslash of every quoted pair.
pub fn unescape(input: &str) -> String {
    let mut unescaped = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescaped.extend(chars.next()),
            c => unescaped.push(c),
        }
    }
    unescaped
}
