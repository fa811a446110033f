//! Response body decoding
//!
//! The encoding of a page is chosen in this order:
//! - a byte order mark, which is stripped
//! - the `charset` parameter of the Content-Type header
//! - a `<meta charset>` or `http-equiv` declaration in the first 1024 bytes
//! - UTF-8, with windows-1252 as the fallback for undeclared bytes that are
//!   not valid UTF-8

use crate::inspector::fetcher::FetchError;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Number of leading bytes scanned for a `<meta>` charset declaration
const PRESCAN_LIMIT: usize = 1024;

/// Decodes a response body to text
///
/// # Errors
///
/// `FetchError::Decode` when the body is not valid in the encoding its BOM,
/// header or `<meta>` declares.
pub fn decode_body(bytes: &[u8], content_type: &str) -> Result<String, FetchError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_strict(encoding, &bytes[bom_len..]);
    }

    let declared = charset_from_content_type(content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| prescan_meta_charset(bytes));

    if let Some(encoding) = declared {
        return decode_strict(encoding, bytes);
    }

    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => Ok(text.into_owned()),
        None => {
            tracing::debug!("Undeclared body is not UTF-8, decoding as windows-1252");
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            Ok(text.into_owned())
        }
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Result<String, FetchError> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| FetchError::Decode {
            encoding: encoding.name().to_string(),
        })
}

/// Extracts the `charset` parameter of a Content-Type value
fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches('"').trim_matches('\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Looks for a charset declared by a `<meta>` tag near the start of the body
///
/// Both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">` are
/// recognised. A declared UTF-16 variant is read as UTF-8, since the bytes
/// scanned so far were ASCII compatible.
fn prescan_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(PRESCAN_LIMIT)];
    let head = head.to_ascii_lowercase();

    let mut rest = head.as_slice();
    while let Some(start) = find(rest, b"<meta") {
        let tag = &rest[start..];
        let end = tag.iter().position(|&b| b == b'>').unwrap_or(tag.len());
        let tag = &tag[..end];

        if let Some(label) = charset_label(tag) {
            if let Some(encoding) = Encoding::for_label(label) {
                return Some(encoding.output_encoding());
            }
        }
        rest = &rest[start + end..];
    }
    None
}

/// The value following `charset=` inside one tag
fn charset_label(tag: &[u8]) -> Option<&[u8]> {
    let pos = find(tag, b"charset")?;
    let mut value = skip_whitespace(&tag[pos + b"charset".len()..]);
    value = skip_whitespace(value.strip_prefix(b"=")?);
    if let Some(quoted) = value.strip_prefix(b"\"").or_else(|| value.strip_prefix(b"'")) {
        value = quoted;
    }

    let end = value
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'/' | b'>') || b.is_ascii_whitespace())
        .unwrap_or(value.len());
    let label = &value[..end];
    (!label.is_empty()).then_some(label)
}

fn skip_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        let body = "<title>Café</title>".as_bytes();
        assert_eq!(decode_body(body, "text/html").unwrap(), "<title>Café</title>");
    }

    #[test]
    fn test_header_charset() {
        let body = b"<title>Caf\xe9</title>";
        assert_eq!(
            decode_body(body, "text/html; charset=ISO-8859-1").unwrap(),
            "<title>Café</title>"
        );
    }

    #[test]
    fn test_header_charset_quoted() {
        assert_eq!(
            charset_from_content_type("text/html; Charset=\"windows-1252\""),
            Some("windows-1252".to_string())
        );
        assert_eq!(charset_from_content_type("text/html"), None);
    }

    #[test]
    fn test_meta_charset() {
        let body = b"<html><head><meta charset=\"windows-1252\"><title>Caf\xe9</title>";
        assert!(decode_body(body, "text/html").unwrap().contains("Café"));
    }

    #[test]
    fn test_meta_http_equiv() {
        let body = b"<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=iso-8859-1\">\xe9";
        assert!(decode_body(body, "").unwrap().ends_with('é'));
    }

    #[test]
    fn test_header_wins_over_meta() {
        let body = "<meta charset=\"windows-1252\"><p>é</p>".as_bytes();
        assert_eq!(
            decode_body(body, "text/html; charset=utf-8").unwrap(),
            "<meta charset=\"windows-1252\"><p>é</p>"
        );
    }

    #[test]
    fn test_bom_wins_over_header() {
        let mut body = vec![0xEF, 0xBB, 0xBF];
        body.extend_from_slice("<p>é</p>".as_bytes());
        assert_eq!(
            decode_body(&body, "text/html; charset=iso-8859-1").unwrap(),
            "<p>é</p>"
        );
    }

    #[test]
    fn test_meta_utf16_read_as_utf8() {
        assert_eq!(prescan_meta_charset(b"<meta charset=utf-16le>"), Some(UTF_8));
    }

    #[test]
    fn test_meta_beyond_prescan_limit_is_ignored() {
        let mut body = vec![b' '; PRESCAN_LIMIT];
        body.extend_from_slice(b"<meta charset=\"windows-1252\">");
        assert_eq!(prescan_meta_charset(&body), None);
    }

    #[test]
    fn test_unknown_label_is_ignored() {
        let body = "<p>é</p>".as_bytes();
        assert_eq!(
            decode_body(body, "text/html; charset=no-such-charset").unwrap(),
            "<p>é</p>"
        );
    }

    #[test]
    fn test_undeclared_non_utf8_falls_back_to_windows_1252() {
        assert_eq!(decode_body(b"Caf\xe9", "text/html").unwrap(), "Café");
    }

    #[test]
    fn test_declared_utf8_with_invalid_bytes_is_malformed() {
        match decode_body(b"Caf\xe9", "text/html; charset=utf-8") {
            Err(FetchError::Decode { encoding }) => assert_eq!(encoding, "UTF-8"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
