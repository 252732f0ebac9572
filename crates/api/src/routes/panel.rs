//! Host panel endpoint handlers for personalized link generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::location::FixedLocation;
use domain::services::LinkGenerator;

/// Request body for generating a personalized invitation link.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct GenerateLinkRequest {
    /// Guest or family display name to embed in the link.
    #[validate(custom(function = "shared::validation::validate_guest_name"))]
    pub guest_name: String,

    /// Seats to reserve for this guest.
    #[validate(custom(function = "shared::validation::validate_seat_count"))]
    pub seats: u8,

    /// URL of the page the panel is served from. When omitted, the
    /// configured public base URL is used instead.
    pub page_url: Option<String>,
}

/// Response carrying the generated link and its share payloads.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GenerateLinkResponse {
    pub url: String,
    pub guest_name: String,
    pub seats: u8,
    pub share_message: String,
    pub share_url: String,
}

/// Generate a personalized invitation link for a guest.
///
/// POST /api/v1/panel/invitation-links
pub async fn generate_invitation_link(
    State(state): State<AppState>,
    Json(request): Json<GenerateLinkRequest>,
) -> Result<Json<GenerateLinkResponse>, ApiError> {
    request.validate()?;

    let location = match &request.page_url {
        Some(url) => FixedLocation::parse(url)
            .ok_or_else(|| ApiError::Validation(format!("page_url is not an absolute URL: {url}")))?,
        None => FixedLocation::parse(&state.config.event.public_base_url).ok_or_else(|| {
            ApiError::Internal("configured public base URL is not parseable".to_string())
        })?,
    };

    let generator = LinkGenerator::new(
        state.config.event.event_title.clone(),
        &state.config.event.panel_segment,
    );
    let link = generator.generate(&location, &request.guest_name, request.seats)?;
    let share_message = generator.share_message(&link);
    let share_url = generator.share_url(&link);

    Ok(Json(GenerateLinkResponse {
        url: link.url,
        guest_name: link.guest_name,
        seats: link.seats,
        share_message,
        share_url,
    }))
}
