use header_value::{
    Header,
    catalog::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL},
};
use shared::{init_logging, request_with_headers, response_with_headers};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("info")?;

    let request = request_with_headers(&[
        ("Accept", "text/*;q=0.3, text/html;q=0.7, text/html;level=1"),
        ("Accept", "text/html;level=2;q=0.4, */*;q=0.5"),
        ("Accept-Language", "da, en-gb;q=0.8, en;q=0.7, *;q=0.1"),
    ])?;

    let accept = Header::accept(&ACCEPT)?.extract(&request);
    for value in accept.iter() {
        tracing::info!(media_range = %value, quality = value.quality(), "Accept");
    }

    let language = Header::accept(&ACCEPT_LANGUAGE)?.extract(&request);
    tracing::info!(preferred = ?language.strings(true), "Accept-Language");

    let cache_control = Header::directives_of(&CACHE_CONTROL)?
        .with_directive("max-age", Some("600"))?
        .with_directive("private", Some("Set-Cookie"))?;
    let response = cache_control.inject(response_with_headers(&[])?, true, true)?;

    for (name, value) in response.headers() {
        tracing::info!(%name, value = ?value, "Response header");
    }

    Ok(())
}
