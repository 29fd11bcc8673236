use crate::{
    directive::DirectiveTable,
    error::{HeaderError, Result},
    header::Header,
};

/// Which sub-grammars a field body is read with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grammar {
    pub is_list: bool,
    pub has_params: bool,
    pub has_quality: bool,
    pub is_directive: bool,
}

impl Grammar {
    pub const SIMPLE: Grammar = Grammar {
        is_list: false,
        has_params: false,
        has_quality: false,
        is_directive: false,
    };

    pub const LIST: Grammar = Grammar {
        is_list: true,
        ..Self::SIMPLE
    };

    pub const PARAMS: Grammar = Grammar {
        has_params: true,
        ..Self::SIMPLE
    };

    pub const LIST_PARAMS: Grammar = Grammar {
        is_list: true,
        has_params: true,
        ..Self::SIMPLE
    };

    pub const QUALITY: Grammar = Grammar {
        has_quality: true,
        ..Self::LIST_PARAMS
    };

    pub const DIRECTIVE: Grammar = Grammar {
        is_directive: true,
        ..Self::LIST_PARAMS
    };
}

/// How a record interprets its text beyond the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Simple,
    WithParams,
    WithQuality,
    Directive(&'static DirectiveTable),
    Age,
    EntityTag,
    Warning,
    Date,
}

/// Default ordering of a collection built with [`ValueType::create_header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Arrival,
    Quality,
    /// Content negotiation; the separator splits a value into segments.
    Specificity(Option<char>),
}

/// Static descriptor of a header value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueType {
    label: &'static str,
    name: Option<&'static str>,
    grammar: Grammar,
    behavior: Behavior,
    order: Order,
}

impl ValueType {
    pub const fn simple(label: &'static str, name: Option<&'static str>) -> Self {
        Self::custom(label, name, Grammar::SIMPLE, Behavior::Simple)
    }

    pub const fn listed(label: &'static str, name: Option<&'static str>) -> Self {
        Self::custom(label, name, Grammar::LIST, Behavior::Simple)
    }

    pub const fn with_params(label: &'static str, name: Option<&'static str>, is_list: bool) -> Self {
        let grammar = if is_list {
            Grammar::LIST_PARAMS
        } else {
            Grammar::PARAMS
        };
        Self::custom(label, name, grammar, Behavior::WithParams)
    }

    pub const fn with_quality(
        label: &'static str,
        name: Option<&'static str>,
        order: Order,
    ) -> Self {
        Self {
            label,
            name,
            grammar: Grammar::QUALITY,
            behavior: Behavior::WithQuality,
            order,
        }
    }

    pub const fn directive(
        label: &'static str,
        name: Option<&'static str>,
        table: &'static DirectiveTable,
    ) -> Self {
        Self::custom(label, name, Grammar::DIRECTIVE, Behavior::Directive(table))
    }

    pub const fn custom(
        label: &'static str,
        name: Option<&'static str>,
        grammar: Grammar,
        behavior: Behavior,
    ) -> Self {
        Self {
            label,
            name,
            grammar,
            behavior,
            order: Order::Arrival,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn has_params(&self) -> bool {
        self.grammar.has_params && !self.is_directive()
    }

    pub fn has_quality(&self) -> bool {
        self.grammar.has_quality
    }

    pub fn is_directive(&self) -> bool {
        matches!(self.behavior, Behavior::Directive(_))
    }

    pub(crate) fn directive_table(&self) -> Option<&'static DirectiveTable> {
        match self.behavior {
            Behavior::Directive(table) => Some(table),
            _ => None,
        }
    }

    pub(crate) fn unsupported(&self, capability: &'static str) -> HeaderError {
        HeaderError::Unsupported {
            value_type: self.label,
            capability,
        }
    }

    /// Builds an empty collection ordered the way this type negotiates.
    pub fn create_header(&'static self) -> Result<Header> {
        match self.order {
            Order::Arrival if self.is_directive() => Header::directives_of(self),
            Order::Arrival => Header::of(self),
            Order::Quality => Header::sortable(self),
            Order::Specificity(_) => Header::accept(self),
        }
    }
}
