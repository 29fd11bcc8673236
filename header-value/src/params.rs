use indexmap::IndexMap;

use crate::grammar::escape;

/// Parameters of a header value in insertion order. Names are
/// case-insensitive and stored lowercased; the first occurrence of a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(IndexMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the name is already taken.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> bool {
        let name = name.to_ascii_lowercase();
        if self.0.contains_key(&name) {
            return false;
        }
        self.0.insert(name, value.into());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name.as_ref(), value);
        }
        params
    }
}

/// Renders `name=value`, quoting the value when a bare token would not
/// survive a round trip.
pub(crate) fn render_param(name: &str, value: &str) -> String {
    let escaped = escape(value);
    if value.is_empty() || escaped.len() != value.len() || value.contains(needs_quotes) {
        format!("{name}=\"{escaped}\"")
    } else {
        format!("{name}={value}")
    }
}

fn needs_quotes(c: char) -> bool {
    c.is_whitespace() || ",;()/:<=>?@[\\]{}".contains(c)
}
