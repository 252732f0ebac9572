//! Page-location capability.
//!
//! The resolver and the link generator both need to know "where the page
//! lives" (origin, path, query). In a browser that would be ambient
//! `window.location` state; here it is an injected capability so both units
//! are unit-testable without a runtime context.

/// Provides the current page URL, split the way the resolver and the link
/// generator consume it.
pub trait PageLocation {
    /// Scheme plus authority, without a trailing slash (`https://example.com`).
    fn origin(&self) -> &str;

    /// Path component, starting with `/` (or empty for the root).
    fn path(&self) -> &str;

    /// Raw query string without the leading `?`, or `None` when the URL has
    /// no query component.
    fn query(&self) -> Option<&str>;
}

/// A fixed, pre-split location value.
///
/// This is the only implementation the service needs: the API layer builds
/// one from the request (or from configuration) and hands it down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocation {
    origin: String,
    path: String,
    query: Option<String>,
}

impl FixedLocation {
    /// Creates a location from pre-split parts.
    pub fn new(
        origin: impl Into<String>,
        path: impl Into<String>,
        query: Option<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            path: path.into(),
            query,
        }
    }

    /// Splits a full URL string into origin, path and query.
    ///
    /// Accepts anything of the form `scheme://authority[/path][?query]`;
    /// fragments are discarded. Returns `None` when no authority can be
    /// found, since a link without an origin cannot be shared.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.split('#').next().unwrap_or(url);
        let scheme_end = url.find("://")?;
        let after_scheme = &url[scheme_end + 3..];
        if after_scheme.is_empty() {
            return None;
        }

        let (rest, query) = match after_scheme.split_once('?') {
            Some((rest, query)) => (rest, Some(query.to_string())),
            None => (after_scheme, None),
        };

        let (authority, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], rest[idx..].to_string()),
            None => (rest, String::new()),
        };
        if authority.is_empty() {
            return None;
        }

        Some(Self {
            origin: format!("{}://{}", &url[..scheme_end], authority),
            path,
            query,
        })
    }
}

impl PageLocation for FixedLocation {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}
