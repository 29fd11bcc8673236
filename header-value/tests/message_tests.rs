use header_value::{
    FieldValue, Header, HeaderError, HttpMessage,
    catalog::{ACCEPT, AGE, CACHE_CONTROL, ETAG, SIMPLE},
};
use http::HeaderMap;
use shared::{request_with_headers, response_with_headers};

#[test]
fn test_extract_from_request() {
    shared::init_test_logging();

    let request = request_with_headers(&[
        ("Accept", "text/*;q=0.3, text/html"),
        ("Host", "example.com"),
        ("accept", "*/*;q=0.001"),
    ])
    .unwrap();

    let accept = Header::accept(&ACCEPT).unwrap().extract(&request);

    assert_eq!(
        accept.strings(true),
        vec!["text/html", "text/*;q=0.3", "*/*;q=0.001"]
    );
}

#[test]
fn test_extract_missing_header_is_empty() {
    let request = request_with_headers(&[("Host", "example.com")]).unwrap();

    let header = Header::of(&ETAG).unwrap().extract(&request);

    assert!(header.is_empty());
}

#[test]
fn test_inject_replaces_existing_lines() {
    let response = response_with_headers(&[
        ("Cache-Control", "no-cache"),
        ("Content-Type", "text/plain"),
    ])
    .unwrap();

    let header = Header::directives_of(&CACHE_CONTROL)
        .unwrap()
        .with_value("max-age=600, must-revalidate");
    let response = header.inject(response, true, true).unwrap();

    assert_eq!(
        response.header_lines("Cache-Control"),
        vec!["max-age=600", "must-revalidate"]
    );
    assert_eq!(response.header_lines("Content-Type"), vec!["text/plain"]);
}

#[test]
fn test_inject_appends_without_replace() {
    let mut headers = HeaderMap::new();
    headers.insert("age", "5".parse().unwrap());

    let header = Header::of(&AGE).unwrap().with_value("7");
    header.inject(&mut headers, false, true).unwrap();

    assert_eq!(headers.header_lines("Age"), vec!["5", "7"]);
}

#[test]
fn test_inject_skips_incorrect_values_on_request() {
    let header = Header::of(&AGE).unwrap().with_values(["1", "soon"]);

    let headers = header.inject(HeaderMap::new(), true, true).unwrap();
    assert_eq!(headers.header_lines("Age"), vec!["1"]);

    let headers = header.inject(HeaderMap::new(), true, false).unwrap();
    assert_eq!(headers.header_lines("Age"), vec!["1", "soon"]);
}

#[test]
fn test_inject_reports_invalid_wire_values() {
    let header = Header::new("X-Custom").unwrap().with_value("line\nbreak");

    let result = header.inject(HeaderMap::new(), true, true);
    assert!(matches!(result, Err(HeaderError::InvalidValue(_))));

    let header = Header::new("Bad Name").unwrap().with_value("x");
    let result = header.inject(HeaderMap::new(), true, true);
    assert!(matches!(result, Err(HeaderError::InvalidName(_))));
}

#[test]
fn test_failed_inject_leaves_message_untouched() {
    let mut headers = HeaderMap::new();
    headers.insert("x-p", "old".parse().unwrap());

    let header = Header::new("X-P")
        .unwrap()
        .with_values(["a", "b;k=\"x\u{1}y\""]);
    let result = header.inject(&mut headers, true, true);

    assert!(matches!(result, Err(HeaderError::InvalidValue(_))));
    assert_eq!(headers.header_lines("X-P"), vec!["old"]);

    let value = FieldValue::new(&ETAG, "\"a\u{1}\"");
    let mut headers = HeaderMap::new();
    headers.insert("etag", "\"old\"".parse().unwrap());
    let result = value.inject(&mut headers, true);

    assert!(matches!(result, Err(HeaderError::InvalidValue(_))));
    assert_eq!(headers.header_lines("ETag"), vec!["\"old\""]);
}

#[test]
fn test_single_value_inject() {
    let request = request_with_headers(&[("ETag", "\"old\"")]).unwrap();

    let value = FieldValue::new(&ETAG, "").with_tag("new", true).unwrap();
    let request = value.inject(request, true).unwrap();
    assert_eq!(request.header_lines("ETag"), vec!["W/\"new\""]);

    let result = FieldValue::new(&SIMPLE, "x").inject(HeaderMap::new(), true);
    assert!(matches!(result, Err(HeaderError::Unnamed("SimpleValue"))));
}

#[test]
fn test_roundtrip_through_response() {
    let header = Header::of(&CACHE_CONTROL)
        .unwrap()
        .with_value("private=\"Set-Cookie\", max-age=0");
    let response = header
        .inject(response_with_headers(&[]).unwrap(), true, true)
        .unwrap();

    let extracted = Header::of(&CACHE_CONTROL).unwrap().extract(&response);

    assert_eq!(extracted, header);
}
