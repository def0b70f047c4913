//! Request parsing: which zip code, which output format.

use crate::error::ServerError;
use axum::http::{header, HeaderMap};
use hourcast_weather::Format;

pub const ZIP_PARAM: &str = "zip";

/// Browsers ask for `text/html`; anything else (curl, wget) gets terminal text.
pub fn format_from_headers(headers: &HeaderMap) -> Format {
    let wants_html = headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.to_ascii_lowercase().contains("text/html"));

    if wants_html {
        Format::Html
    } else {
        Format::Tty
    }
}

/// The single `zip` query value.
pub fn single_zip(params: &[(String, String)]) -> Result<&str, ServerError> {
    let mut zips = params
        .iter()
        .filter(|(key, _)| key == ZIP_PARAM)
        .map(|(_, value)| value.as_str());

    match (zips.next(), zips.count()) {
        (None, _) => Err(ServerError::MissingZip),
        (Some(zip), 0) => Ok(zip),
        (Some(_), rest) => Err(ServerError::MultipleZips(rest + 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_browser_accept_selects_html() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
        );
        assert_eq!(format_from_headers(&headers), Format::Html);
    }

    #[test]
    fn test_other_accepts_select_tty() {
        let mut headers = HeaderMap::new();
        assert_eq!(format_from_headers(&headers), Format::Tty);

        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        assert_eq!(format_from_headers(&headers), Format::Tty);
    }

    #[test]
    fn test_accept_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("Text/HTML"));
        assert_eq!(format_from_headers(&headers), Format::Html);
    }

    #[test]
    fn test_single_zip() {
        assert_eq!(single_zip(&params(&[("zip", "10001")])).unwrap(), "10001");
        assert_eq!(
            single_zip(&params(&[("units", "us"), ("zip", "10001")])).unwrap(),
            "10001"
        );
    }

    #[test]
    fn test_missing_or_repeated_zip() {
        assert!(matches!(
            single_zip(&params(&[("units", "us")])),
            Err(ServerError::MissingZip)
        ));
        assert!(matches!(
            single_zip(&params(&[("zip", "10001"), ("zip", "94103"), ("zip", "60601")])),
            Err(ServerError::MultipleZips(3))
        ));
    }
}
