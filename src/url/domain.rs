use crate::{UrlError, UrlResult};
use url::{ParseError, Url};

/// Characters besides ASCII alphanumerics allowed unescaped in a URI
const URI_SYMBOLS: &str = "-._~:/?#[]@!$&'()*+,;=";

/// Parses a URI reference
///
/// Returns `Ok(None)` for a relative reference (no scheme), which is valid
/// URI syntax but has no meaning without a base. A relative reference with a
/// character outside the URI character set, or a `%` not followed by two hex
/// digits, is invalid. Non-ASCII characters are accepted as IRI text.
pub(crate) fn parse_reference(url: &str) -> UrlResult<Option<Url>> {
    match Url::parse(url) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(ParseError::RelativeUrlWithoutBase) if is_reference_syntax(url) => Ok(None),
        Err(_) => Err(UrlError::InvalidUrl(url.to_string())),
    }
}

fn is_reference_syntax(reference: &str) -> bool {
    let bytes = reference.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let escaped = bytes.get(i + 1..i + 3).map_or(false, |hex| {
                hex.iter().all(u8::is_ascii_hexdigit)
            });
            if !escaped {
                return false;
            }
            i += 3;
            continue;
        }
        if b.is_ascii() && !b.is_ascii_alphanumeric() && !URI_SYMBOLS.contains(char::from(b)) {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if the text after the scheme starts with an authority
fn has_authority(url: &str, parsed: &Url) -> bool {
    url.trim_start()
        .get(parsed.scheme().len() + 1..)
        .map_or(false, |rest| rest.starts_with("//"))
}

/// Extracts the normalized domain of a URL
///
/// The host is returned with a leading `www.` removed. The prefix match is
/// literal: hosts of `http(s)` URLs are already lowercased by the parser, but
/// an opaque host such as `foo://WWW.example.com` keeps its `WWW.` prefix.
/// No public-suffix awareness is applied, so `blog.example.com` and
/// `example.com` are different domains.
///
/// # Errors
///
/// * `UrlError::InvalidUrl` - the string is not valid URI syntax
/// * `UrlError::MissingHost` - the URI has no authority or an empty host,
///   as in `mailto:` links or `http:/example.com`
///
/// # Examples
///
/// ```
/// use html_insight::url::domain_of;
///
/// assert_eq!(domain_of("https://www.example.com/path").unwrap(), "example.com");
/// assert_eq!(domain_of("https://example.com/").unwrap(), "example.com");
/// assert!(domain_of("mailto:someone@example.com").is_err());
/// ```
pub fn domain_of(url: &str) -> UrlResult<String> {
    let parsed = match parse_reference(url)? {
        Some(parsed) if has_authority(url, &parsed) => parsed,
        Some(_) => return Err(UrlError::MissingHost(url.to_string())),
        // Network-path reference: "//host/path" carries an authority
        None if url.starts_with("//") => Url::parse(&format!("http:{}", url))
            .map_err(|_| UrlError::InvalidUrl(url.to_string()))?,
        None => return Err(UrlError::MissingHost(url.to_string())),
    };

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| UrlError::MissingHost(url.to_string()))?;

    Ok(host.strip_prefix("www.").unwrap_or(host).to_string())
}
