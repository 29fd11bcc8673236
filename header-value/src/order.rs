use std::cmp;

use crate::{value::FieldValue, value_type::Order};

impl Order {
    /// Inserts `value` after the last item that must stay ahead of it.
    pub(crate) fn insert(self, items: &mut Vec<FieldValue>, value: FieldValue) {
        let position = match self {
            Order::Arrival => items.len(),
            Order::Quality => insertion_point(items, |item| item.weight() >= value.weight()),
            Order::Specificity(separator) => {
                insertion_point(items, |item| precedes(item, &value, separator))
            }
        };

        tracing::trace!(position, len = items.len(), value = %value, "Inserting header value");
        items.insert(position, value);
    }
}

fn insertion_point(items: &[FieldValue], stays_ahead: impl Fn(&FieldValue) -> bool) -> usize {
    items.iter().rposition(stays_ahead).map_or(0, |position| position + 1)
}

/// Whether `existing` must stay ahead of `candidate` under content
/// negotiation rules (RFC 7231 5.3.2).
fn precedes(existing: &FieldValue, candidate: &FieldValue, separator: Option<char>) -> bool {
    match existing.weight().cmp(&candidate.weight()) {
        cmp::Ordering::Greater => return true,
        cmp::Ordering::Less => return false,
        cmp::Ordering::Equal => {}
    }

    let existing_segments = segments(existing.value(), separator);
    let candidate_segments = segments(candidate.value(), separator);
    if existing_segments.len() != candidate_segments.len() {
        return existing_segments.len() > candidate_segments.len();
    }

    for (ours, theirs) in existing_segments.iter().zip(&candidate_segments) {
        let (ours_wild, theirs_wild) = (*ours == "*", *theirs == "*");
        if ours_wild != theirs_wild {
            return !ours_wild;
        }
    }

    existing.params().len() >= candidate.params().len()
}

/// Most specific segment first.
fn segments(value: &str, separator: Option<char>) -> Vec<&str> {
    match separator {
        Some(separator) => value.rsplit(separator).collect(),
        None => vec![value],
    }
}
