use chrono::{DateTime, NaiveDateTime, Utc};

/// RFC 7231 7.1.1.1 preferred format.
const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";
const RFC_850: &str = "%A, %d-%b-%y %H:%M:%S GMT";
const ASCTIME: &str = "%a %b %e %H:%M:%S %Y";

/// Parses any of the three HTTP-date formats a recipient must accept.
pub fn parse_http_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    [IMF_FIXDATE, RFC_850, ASCTIME]
        .into_iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|date| date.and_utc())
}

pub fn format_http_date(date: &DateTime<Utc>) -> String {
    date.format(IMF_FIXDATE).to_string()
}
