use http::{Request, Response, StatusCode};

use crate::errors::SharedError;

/// `GET /` carrying `headers` in the given order.
pub fn request_with_headers(headers: &[(&str, &str)]) -> Result<Request<()>, SharedError> {
    let builder = headers
        .iter()
        .fold(Request::builder().uri("/"), |builder, (name, value)| {
            builder.header(*name, *value)
        });

    Ok(builder.body(())?)
}

/// `200 OK` carrying `headers` in the given order.
pub fn response_with_headers(headers: &[(&str, &str)]) -> Result<Response<()>, SharedError> {
    let builder = headers
        .iter()
        .fold(Response::builder().status(StatusCode::OK), |builder, (name, value)| {
            builder.header(*name, *value)
        });

    Ok(builder.body(())?)
}
