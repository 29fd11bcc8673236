//! HTTP header value grammar
//!
//! This crate reads raw header field bodies into typed values and writes
//! them back. A field body is split into list members, each member into a
//! main token and its parameters, and the quality factor is pulled out for
//! content negotiation headers. Problems in untrusted input are recorded on
//! the affected value instead of failing the whole header.
//!
//! # Examples
//!
//! ## Content negotiation
//!
//! ```
//! use header_value::{Header, catalog::ACCEPT};
//!
//! let accept = Header::accept(&ACCEPT)?
//!     .with_value("text/*;q=0.3, text/html, */*;q=0.001")
//!     .with_value("text/plain;q=0.5");
//!
//! // Highest quality first, then the most specific media range
//! assert_eq!(
//!     accept.strings(true),
//!     ["text/html", "text/plain;q=0.5", "text/*;q=0.3", "*/*;q=0.001"]
//! );
//! # Ok::<(), header_value::HeaderError>(())
//! ```
//!
//! ## Directives
//!
//! ```
//! use header_value::{Header, catalog::CACHE_CONTROL};
//!
//! let cache_control = Header::directives_of(&CACHE_CONTROL)?
//!     .with_value("max-age=600, no-store")
//!     .with_directive("private", Some("Content-Length, ETag"))?;
//!
//! assert_eq!(
//!     cache_control.strings(true),
//!     ["max-age=600", "no-store", "private=\"Content-Length, ETag\""]
//! );
//!
//! // Structured input is validated eagerly
//! assert!(cache_control.with_directive("max-age", Some("123test")).is_err());
//! # Ok::<(), header_value::HeaderError>(())
//! ```
//!
//! ## Error isolation
//!
//! ```
//! use header_value::{Header, catalog::FORWARDED};
//!
//! let forwarded = Header::of(&FORWARDED)?
//!     .with_value("for=192.0.2.60;proto=http, for=\"[2001:db8::1");
//!
//! assert_eq!(forwarded.len(), 2);
//! assert_eq!(forwarded.strings(true), ["for=192.0.2.60;proto=http"]);
//! assert_eq!(
//!     forwarded.strings(false),
//!     ["for=192.0.2.60;proto=http", "for=\"[2001:db8::1\""]
//! );
//! # Ok::<(), header_value::HeaderError>(())
//! ```

pub mod catalog;
mod date;
mod directive;
mod entity_tag;
mod error;
mod grammar;
mod header;
mod order;
mod params;
mod traits;
mod value;
mod value_type;
mod warning;

// Re-export public API
pub use date::{format_http_date, parse_http_date};
pub use directive::{ArgumentKind, ArgumentMask, CACHE_CONTROL_DIRECTIVES, Directive, DirectiveTable};
pub use entity_tag::EntityTag;
pub use error::{HeaderError, ParseError, Result};
pub use grammar::{FieldParser, RawItem, escape, unescape};
pub use header::Header;
pub use params::Params;
pub use traits::HttpMessage;
pub use value::FieldValue;
pub use value_type::{Behavior, Grammar, Order, ValueType};
pub use warning::Warning;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_parsing_and_serialization() {
        let accept = Header::accept(&catalog::ACCEPT)
            .unwrap()
            .with_value("text/html;level=1;q=0.7, application/json");

        let values = accept.values(true);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].value(), "application/json");
        assert_eq!(values[0].quality(), "1");
        assert_eq!(values[1].value(), "text/html");
        assert_eq!(values[1].params().get("level"), Some("1"));
        assert_eq!(values[1].quality(), "0.7");
        assert_eq!(accept.strings(true), vec!["application/json", "text/html;level=1;q=0.7"]);
    }

    #[test]
    fn test_create_header_picks_order_from_type() {
        let cases = [
            (&catalog::ACCEPT, "Accept"),
            (&catalog::ACCEPT_LANGUAGE, "Accept-Language"),
            (&catalog::CACHE_CONTROL, "Cache-Control"),
            (&catalog::ALLOW, "Allow"),
            (&catalog::ETAG, "ETag"),
        ];
        for (value_type, name) in cases {
            let header = value_type.create_header().unwrap();
            assert_eq!(header.name(), name);
            assert_eq!(header.value_type(), value_type);
            assert!(header.is_empty());
        }

        assert!(matches!(
            catalog::SIMPLE.create_header(),
            Err(HeaderError::Unnamed("SimpleValue"))
        ));
    }

    #[test]
    fn test_erroneous_value_is_kept_but_hidden() {
        let header = Header::of(&catalog::AGE).unwrap().with_values(["12", "-1"]);

        assert_eq!(header.len(), 2);
        assert_eq!(header.strings(true), vec!["12"]);
        assert_eq!(header.strings(false), vec!["12", "-1"]);
        assert_eq!(header.iter().count(), 1);
    }

    #[test]
    fn test_directive_roundtrip() {
        let cache_control = Header::directives_of(&catalog::CACHE_CONTROL)
            .unwrap()
            .with_value("no-cache=\"Set-Cookie\", max-age=0, must-revalidate");

        assert_eq!(
            cache_control.directives(true),
            vec![
                ("no-cache", Some("Set-Cookie")),
                ("max-age", Some("0")),
                ("must-revalidate", None),
            ]
        );
        assert_eq!(
            cache_control.strings(true),
            vec!["no-cache=\"Set-Cookie\"", "max-age=0", "must-revalidate"]
        );
    }
}
