//! Query-string encoding and decoding.
//!
//! The invitation "protocol" is a query string: guest identity and seat
//! allotment travel as `?n=<name>&c=<seats>`, and confirmation text travels
//! inside a `?text=` parameter of a messaging deep link. Encoding must
//! round-trip through any standards-compliant decoder, including names
//! containing spaces, `&` and `#`.

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Characters left unencoded when serializing a query component.
///
/// RFC 3986 unreserved set: alphanumerics plus `-`, `_`, `.`, `~`. Spaces
/// become `%20`, matching `encodeURIComponent` output closely enough that
/// either decoder accepts both.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a single query-string component.
pub fn encode_component(value: &str) -> String {
    percent_encode(value.as_bytes(), COMPONENT).to_string()
}

/// Parses a raw query string (without the leading `?`) into key/value pairs.
///
/// Both `%20` and `+` decode to a space, so links produced by this crate and
/// links hand-built with form encoding resolve identically. Keys without a
/// `=` yield an empty value, the same as `URLSearchParams`.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Returns the first value for `name` in a raw query string, if present.
///
/// Presence is distinct from emptiness: `?n=` yields `Some("")`.
pub fn get_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
