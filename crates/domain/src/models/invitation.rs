//! Guest invitation context resolved from the shared link.
//!
//! Personalized links carry two query parameters: `n` (guest or family
//! display name) and `c` (reserved seat count, 1-9). Links are hand-shared
//! over chat apps, so malformed input is an expected case and resolution
//! never fails; it falls back to defaults instead.

use serde::{Deserialize, Serialize};

use crate::location::PageLocation;

/// Query parameter carrying the guest display name.
pub const GUEST_NAME_PARAM: &str = "n";

/// Query parameter carrying the reserved seat count.
pub const SEAT_COUNT_PARAM: &str = "c";

/// Smallest seat allotment a link can grant.
pub const MIN_SEATS: u8 = 1;

/// Largest seat allotment a link can grant.
pub const MAX_SEATS: u8 = 9;

/// Seat allotment used when `c` is absent or unparsable.
pub const DEFAULT_SEATS: u8 = 1;

/// Guest identity and seat allotment derived from the invitation URL.
///
/// Read-mostly and scoped to a single page load; nothing here survives a
/// reload except through the URL itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GuestInvitationContext {
    /// Decoded guest display name. `None` when the `n` parameter is missing
    /// or present but blank.
    pub guest_name: Option<String>,

    /// Seat allotment, always within [`MIN_SEATS`, `MAX_SEATS`].
    pub max_seats: u8,

    /// True once query parsing has completed. Dependents use this to tell
    /// "not yet resolved" apart from "resolved with defaults".
    pub resolved: bool,
}

impl GuestInvitationContext {
    /// The context before any resolution has run.
    pub fn unresolved() -> Self {
        Self {
            guest_name: None,
            max_seats: DEFAULT_SEATS,
            resolved: false,
        }
    }

    /// Resolves the context from a raw query string (no leading `?`).
    ///
    /// `None` means the URL carried no query component at all; both cases
    /// resolve to defaults.
    pub fn resolve_query(query: Option<&str>) -> Self {
        let query = query.unwrap_or("");

        let guest_name = shared::query::get_param(query, GUEST_NAME_PARAM)
            .filter(|name| !name.is_empty());
        let max_seats = parse_seat_count(shared::query::get_param(query, SEAT_COUNT_PARAM));

        Self {
            guest_name,
            max_seats,
            resolved: true,
        }
    }

    /// Resolves the context from a page location.
    pub fn resolve(location: &impl PageLocation) -> Self {
        Self::resolve_query(location.query())
    }
}

/// Parses and clamps the `c` parameter.
///
/// Absent or unparsable input falls back to [`DEFAULT_SEATS`]; parseable
/// values outside [1, 9] clamp to the nearest bound.
pub fn parse_seat_count(raw: Option<String>) -> u8 {
    match raw {
        Some(value) => match value.trim().parse::<i64>() {
            Ok(parsed) => parsed.clamp(MIN_SEATS as i64, MAX_SEATS as i64) as u8,
            Err(_) => DEFAULT_SEATS,
        },
        None => DEFAULT_SEATS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::FixedLocation;

    #[test]
    fn test_parse_seat_count_in_range() {
        for v in 1..=9 {
            assert_eq!(parse_seat_count(Some(v.to_string())), v as u8);
        }
    }

    #[test]
    fn test_parse_seat_count_absent() {
        assert_eq!(parse_seat_count(None), 1);
    }

    #[test]
    fn test_parse_seat_count_unparsable() {
        assert_eq!(parse_seat_count(Some("abc".to_string())), 1);
        assert_eq!(parse_seat_count(Some("".to_string())), 1);
        assert_eq!(parse_seat_count(Some("3.5".to_string())), 1);
    }

    #[test]
    fn test_parse_seat_count_clamps_low() {
        assert_eq!(parse_seat_count(Some("0".to_string())), 1);
        assert_eq!(parse_seat_count(Some("-4".to_string())), 1);
    }

    #[test]
    fn test_parse_seat_count_clamps_high() {
        assert_eq!(parse_seat_count(Some("10".to_string())), 9);
        assert_eq!(parse_seat_count(Some("250".to_string())), 9);
    }

    #[test]
    fn test_parse_seat_count_trims_whitespace() {
        assert_eq!(parse_seat_count(Some(" 5 ".to_string())), 5);
    }

    #[test]
    fn test_resolve_query_full() {
        let ctx = GuestInvitationContext::resolve_query(Some("n=Familia%20Rivera&c=5"));
        assert_eq!(ctx.guest_name.as_deref(), Some("Familia Rivera"));
        assert_eq!(ctx.max_seats, 5);
        assert!(ctx.resolved);
    }

    #[test]
    fn test_resolve_query_missing_name() {
        let ctx = GuestInvitationContext::resolve_query(Some("c=3"));
        assert_eq!(ctx.guest_name, None);
        assert_eq!(ctx.max_seats, 3);
    }

    #[test]
    fn test_resolve_query_empty_name_treated_as_absent() {
        let ctx = GuestInvitationContext::resolve_query(Some("n=&c=3"));
        assert_eq!(ctx.guest_name, None);
    }

    #[test]
    fn test_resolve_query_no_query() {
        let ctx = GuestInvitationContext::resolve_query(None);
        assert_eq!(ctx.guest_name, None);
        assert_eq!(ctx.max_seats, 1);
        assert!(ctx.resolved);
    }

    #[test]
    fn test_resolve_query_name_kept_verbatim() {
        let ctx = GuestInvitationContext::resolve_query(Some("n=%20Ana%20&c=2"));
        // Names are not trimmed at resolution time
        assert_eq!(ctx.guest_name.as_deref(), Some(" Ana "));
    }

    #[test]
    fn test_resolve_from_location() {
        let loc =
            FixedLocation::parse("https://example.com/?n=Familia%20Rivera&c=7").unwrap();
        let ctx = GuestInvitationContext::resolve(&loc);
        assert_eq!(ctx.guest_name.as_deref(), Some("Familia Rivera"));
        assert_eq!(ctx.max_seats, 7);
    }

    #[test]
    fn test_context_serialization() {
        let ctx = GuestInvitationContext::resolve_query(Some("n=Ana&c=4"));
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("\"guest_name\":\"Ana\""));
        assert!(json.contains("\"max_seats\":4"));
        assert!(json.contains("\"resolved\":true"));
    }

    #[test]
    fn test_unresolved_defaults() {
        let ctx = GuestInvitationContext::unresolved();
        assert!(!ctx.resolved);
        assert_eq!(ctx.max_seats, DEFAULT_SEATS);
        assert_eq!(ctx.guest_name, None);
    }
}
