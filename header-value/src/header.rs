use crate::{
    catalog::{ACCEPT, DIRECTIVE, SIMPLE, SORTABLE},
    error::{HeaderError, Result},
    grammar::FieldParser,
    traits::{HttpMessage, wire_lines, write_lines},
    value::FieldValue,
    value_type::{Order, ValueType},
};

/// All values of one header, kept in the collection's order. Mutators return
/// a new collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: String,
    value_type: &'static ValueType,
    order: Order,
    items: Vec<FieldValue>,
}

impl Header {
    /// Untyped header: each field line is kept as one value, in arrival order.
    pub fn new(name: &str) -> Result<Self> {
        Self::named(name, &SIMPLE)
    }

    /// Arrival-ordered header named after `value_type`.
    pub fn of(value_type: &'static ValueType) -> Result<Self> {
        Self::build(Self::type_name(value_type)?, value_type, Order::Arrival)
    }

    pub fn named(name: &str, value_type: &'static ValueType) -> Result<Self> {
        Self::build(name, value_type, Order::Arrival)
    }

    /// Header kept in descending quality order.
    pub fn sortable(value_type: &'static ValueType) -> Result<Self> {
        if !value_type.has_quality() {
            return Err(value_type.unsupported("quality sorting"));
        }
        Self::build(Self::type_name(value_type)?, value_type, Order::Quality)
    }

    pub fn sortable_named(name: &str) -> Result<Self> {
        Self::build(name, &SORTABLE, Order::Quality)
    }

    /// Header kept in content negotiation order.
    pub fn accept(value_type: &'static ValueType) -> Result<Self> {
        let Order::Specificity(separator) = value_type.order() else {
            return Err(value_type.unsupported("content negotiation sorting"));
        };
        Self::build(Self::type_name(value_type)?, value_type, Order::Specificity(separator))
    }

    pub fn accept_named(name: &str) -> Result<Self> {
        Self::build(name, &ACCEPT, ACCEPT.order())
    }

    pub fn directives_of(value_type: &'static ValueType) -> Result<Self> {
        if !value_type.is_directive() {
            return Err(value_type.unsupported("directives"));
        }
        Self::of(value_type)
    }

    pub fn directives_named(name: &str) -> Result<Self> {
        Self::named(name, &DIRECTIVE)
    }

    fn type_name(value_type: &'static ValueType) -> Result<&'static str> {
        value_type
            .name()
            .ok_or(HeaderError::Unnamed(value_type.label()))
    }

    fn build(name: &str, value_type: &'static ValueType, order: Order) -> Result<Self> {
        if name.is_empty() {
            return Err(HeaderError::EmptyName);
        }

        Ok(Self {
            name: name.to_owned(),
            value_type,
            order,
            items: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &'static ValueType {
        self.value_type
    }

    /// Number of values, erroneous ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Error-free values.
    pub fn iter(&self) -> impl Iterator<Item = &FieldValue> {
        self.items.iter().filter(|value| !value.has_error())
    }

    pub fn values(&self, ignore_incorrect: bool) -> Vec<&FieldValue> {
        self.items
            .iter()
            .filter(|value| !(ignore_incorrect && value.has_error()))
            .collect()
    }

    pub fn strings(&self, ignore_incorrect: bool) -> Vec<String> {
        self.values(ignore_incorrect)
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Parses one field line and adds every value found in it.
    pub fn with_value(&self, body: &str) -> Self {
        let mut clone = self.clone();
        clone.add_body(body);
        clone
    }

    pub fn with_values<I, S>(&self, bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut clone = self.clone();
        for body in bodies {
            clone.add_body(body.as_ref());
        }
        clone
    }

    pub fn with_record(&self, value: FieldValue) -> Result<Self> {
        self.with_records([value])
    }

    pub fn with_records<I>(&self, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = FieldValue>,
    {
        let mut clone = self.clone();
        for value in values {
            if value.value_type() != clone.value_type {
                return Err(HeaderError::TypeMismatch {
                    expected: clone.value_type.label(),
                    given: value.value_type().label(),
                });
            }
            clone.order.insert(&mut clone.items, value);
        }
        Ok(clone)
    }

    fn add_body(&mut self, body: &str) {
        let parser = FieldParser::new(self.value_type.grammar());
        for item in parser.parse(body) {
            let value = FieldValue::from_raw(self.value_type, item);
            if let Some(error) = value.error() {
                tracing::debug!(header = %self.name, %error, "Header value parsed with error");
            }
            self.order.insert(&mut self.items, value);
        }
    }

    /// Adds a directive built from structured input; fails when the
    /// argument does not fit the directive.
    pub fn with_directive(&self, name: &str, argument: Option<&str>) -> Result<Self> {
        let value = FieldValue::new(self.value_type, "").with_directive(name, argument)?;
        self.with_record(value)
    }

    /// `(name, argument)` of every directive value.
    pub fn directives(&self, ignore_incorrect: bool) -> Vec<(&str, Option<&str>)> {
        self.values(ignore_incorrect)
            .into_iter()
            .filter_map(FieldValue::directive)
            .map(|directive| (directive.name(), directive.argument()))
            .collect()
    }

    /// Adds every line the message carries under this header's name.
    pub fn extract<M: HttpMessage>(&self, message: &M) -> Self {
        let lines = message.header_lines(&self.name);
        tracing::debug!(header = %self.name, lines = lines.len(), "Extracting header values");
        self.with_values(lines)
    }

    /// Writes one line per value, after removing existing lines when
    /// `replace` is set. The message is left untouched when any value is not
    /// a valid wire value.
    pub fn inject<M: HttpMessage>(
        &self,
        mut message: M,
        replace: bool,
        ignore_incorrect: bool,
    ) -> Result<M> {
        let values = self.strings(ignore_incorrect);
        let written = values.len();
        let (name, lines) = wire_lines(&self.name, values)?;
        write_lines(&mut message, name, lines, replace);
        tracing::debug!(
            header = %self.name,
            written,
            skipped = self.items.len() - written,
            "Injected header values"
        );

        Ok(message)
    }
}
