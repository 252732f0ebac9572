//! Invitation resolution endpoint handlers.

use axum::{extract::RawQuery, Json};

use domain::models::GuestInvitationContext;

/// Resolve a guest invitation context from the link's query string.
///
/// GET /api/v1/invitation?n=<name>&c=<seats>
///
/// Resolution never fails: malformed or missing parameters fall back to
/// defaults, mirroring what a hand-edited link would produce.
pub async fn resolve_invitation(RawQuery(query): RawQuery) -> Json<GuestInvitationContext> {
    Json(GuestInvitationContext::resolve_query(query.as_deref()))
}
