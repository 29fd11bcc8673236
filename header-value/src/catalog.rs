//! Value types of well-known headers.

use crate::{
    directive::{CACHE_CONTROL_DIRECTIVES, DirectiveTable},
    value_type::{Behavior, Grammar, Order, ValueType},
};

const NO_DIRECTIVES: &DirectiveTable = &[];

/// Whole field body as one value. Used for headers built from a bare name.
pub static SIMPLE: ValueType = ValueType::simple("SimpleValue", None);

pub static LISTED: ValueType = ValueType::listed("ListedValue", None);

pub static SORTABLE: ValueType = ValueType::with_quality("SortableValue", None, Order::Quality);

/// Directives with free-form arguments.
pub static DIRECTIVE: ValueType = ValueType::directive("DirectiveValue", None, NO_DIRECTIVES);

pub static ACCEPT: ValueType =
    ValueType::with_quality("Accept", Some("Accept"), Order::Specificity(Some('/')));

pub static ACCEPT_CHARSET: ValueType =
    ValueType::with_quality("AcceptCharset", Some("Accept-Charset"), Order::Specificity(None));

pub static ACCEPT_ENCODING: ValueType =
    ValueType::with_quality("AcceptEncoding", Some("Accept-Encoding"), Order::Specificity(None));

pub static ACCEPT_LANGUAGE: ValueType =
    ValueType::with_quality("AcceptLanguage", Some("Accept-Language"), Order::Specificity(Some('-')));

pub static ALLOW: ValueType = ValueType::listed("Allow", Some("Allow"));

pub static CONNECTION: ValueType = ValueType::listed("Connection", Some("Connection"));

/// RFC 7239
pub static FORWARDED: ValueType = ValueType::with_params("Forwarded", Some("Forwarded"), true);

pub static CACHE_CONTROL: ValueType =
    ValueType::directive("CacheControl", Some("Cache-Control"), CACHE_CONTROL_DIRECTIVES);

pub static PRAGMA: ValueType = ValueType::directive("Pragma", Some("Pragma"), CACHE_CONTROL_DIRECTIVES);

pub static AGE: ValueType = ValueType::custom("Age", Some("Age"), Grammar::SIMPLE, Behavior::Age);

pub static ETAG: ValueType = ValueType::custom("ETag", Some("ETag"), Grammar::SIMPLE, Behavior::EntityTag);

pub static WARNING: ValueType =
    ValueType::custom("Warning", Some("Warning"), Grammar::SIMPLE, Behavior::Warning);

pub static DATE: ValueType = ValueType::custom("Date", Some("Date"), Grammar::SIMPLE, Behavior::Date);

pub static EXPIRES: ValueType =
    ValueType::custom("Expires", Some("Expires"), Grammar::SIMPLE, Behavior::Date);

pub static LAST_MODIFIED: ValueType =
    ValueType::custom("LastModified", Some("Last-Modified"), Grammar::SIMPLE, Behavior::Date);

pub static IF_MODIFIED_SINCE: ValueType =
    ValueType::custom("IfModifiedSince", Some("If-Modified-Since"), Grammar::SIMPLE, Behavior::Date);

pub static IF_UNMODIFIED_SINCE: ValueType = ValueType::custom(
    "IfUnmodifiedSince",
    Some("If-Unmodified-Since"),
    Grammar::SIMPLE,
    Behavior::Date,
);
