//! Event information endpoint handlers.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use domain::services::{time_remaining, TimeRemaining};

/// Public event details plus the live countdown.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EventResponse {
    pub celebrant_name: String,
    pub event_title: String,
    pub event_date: String,
    pub rsvp_deadline_label: String,
    pub countdown: TimeRemaining,
}

/// Get event details and the time remaining until the celebration.
///
/// GET /api/v1/event
pub async fn get_event(State(state): State<AppState>) -> Result<Json<EventResponse>, ApiError> {
    let event = &state.config.event;

    // The date is validated at startup; a failure here means the config
    // changed underneath us.
    let target = event
        .event_date_utc()
        .map_err(|e| ApiError::Internal(format!("event date is not RFC 3339: {e}")))?;

    Ok(Json(EventResponse {
        celebrant_name: event.celebrant_name.clone(),
        event_title: event.event_title.clone(),
        event_date: event.event_date.clone(),
        rsvp_deadline_label: event.rsvp_deadline_label.clone(),
        countdown: time_remaining(target, Utc::now()),
    }))
}
