//! RSVP confirmation endpoint handlers.

use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{AttendeeRoster, GuestInvitationContext};
use domain::services::{ConfirmationComposer, ConfirmationMessage};

/// Request body for confirming attendance.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct ConfirmRsvpRequest {
    /// Guest display name from the invitation link, if any.
    pub guest_name: Option<String>,

    /// Seat allotment granted by the link.
    #[validate(custom(function = "shared::validation::validate_seat_count"))]
    pub max_seats: u8,

    /// How many seats the guest is confirming.
    #[validate(custom(function = "shared::validation::validate_seat_count"))]
    pub selected_seats: u8,

    /// One name per confirmed seat, in slot order.
    pub names: Vec<String>,
}

/// Confirm attendance and compose the WhatsApp message.
///
/// POST /api/v1/rsvp/confirmation
pub async fn confirm_rsvp(
    State(state): State<AppState>,
    Json(request): Json<ConfirmRsvpRequest>,
) -> Result<Json<ConfirmationMessage>, ApiError> {
    request.validate()?;

    if request.names.len() != request.selected_seats as usize {
        return Err(ApiError::Validation(format!(
            "names must contain exactly {} entries, got {}",
            request.selected_seats,
            request.names.len()
        )));
    }

    let mut roster = AttendeeRoster::new(request.max_seats);
    roster.set_selected_seats(request.selected_seats)?;
    for (index, name) in request.names.iter().enumerate() {
        roster.set_name(index, name.clone())?;
    }
    roster.confirm()?;

    let context = GuestInvitationContext {
        guest_name: request.guest_name.filter(|name| !name.trim().is_empty()),
        max_seats: roster.max_seats(),
        resolved: true,
    };

    let composer = ConfirmationComposer::new(state.config.event.host_phone.clone());
    let message = composer.compose(&context, &roster)?;

    Ok(Json(message))
}
