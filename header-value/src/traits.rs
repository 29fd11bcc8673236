use http::{HeaderMap, HeaderName, HeaderValue, Request, Response};

use crate::error::Result;

/// Header storage of an HTTP message.
pub trait HttpMessage {
    /// Every line stored under `name`, in arrival order. Lines that are not
    /// valid UTF-8 are skipped.
    fn header_lines(&self, name: &str) -> Vec<String>;

    fn remove_header(&mut self, name: &HeaderName);

    fn append_header(&mut self, name: HeaderName, value: HeaderValue);
}

/// Converts a name and its serialized values to wire form. Nothing is
/// written unless every line converts.
pub(crate) fn wire_lines<I, S>(name: &str, values: I) -> Result<(HeaderName, Vec<HeaderValue>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let name = HeaderName::from_bytes(name.as_bytes())?;
    let values = values
        .into_iter()
        .map(|value| HeaderValue::from_str(value.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok((name, values))
}

/// Writes converted lines, dropping existing ones first when `replace` is set.
pub(crate) fn write_lines<M: HttpMessage>(
    message: &mut M,
    name: HeaderName,
    values: Vec<HeaderValue>,
    replace: bool,
) {
    if replace {
        message.remove_header(&name);
    }
    for value in values {
        message.append_header(name.clone(), value);
    }
}

impl HttpMessage for HeaderMap {
    fn header_lines(&self, name: &str) -> Vec<String> {
        self.get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_owned)
            .collect()
    }

    fn remove_header(&mut self, name: &HeaderName) {
        self.remove(name);
    }

    fn append_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.append(name, value);
    }
}

impl<B> HttpMessage for Request<B> {
    fn header_lines(&self, name: &str) -> Vec<String> {
        self.headers().header_lines(name)
    }

    fn remove_header(&mut self, name: &HeaderName) {
        self.headers_mut().remove_header(name);
    }

    fn append_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().append_header(name, value);
    }
}

impl<B> HttpMessage for Response<B> {
    fn header_lines(&self, name: &str) -> Vec<String> {
        self.headers().header_lines(name)
    }

    fn remove_header(&mut self, name: &HeaderName) {
        self.headers_mut().remove_header(name);
    }

    fn append_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().append_header(name, value);
    }
}

impl<M: HttpMessage + ?Sized> HttpMessage for &mut M {
    fn header_lines(&self, name: &str) -> Vec<String> {
        (**self).header_lines(name)
    }

    fn remove_header(&mut self, name: &HeaderName) {
        (**self).remove_header(name);
    }

    fn append_header(&mut self, name: HeaderName, value: HeaderValue) {
        (**self).append_header(name, value);
    }
}
