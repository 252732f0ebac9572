//! Confirmation message composition.
//!
//! Turns a validated attendee roster into the structured WhatsApp message a
//! visitor sends back to the host. Composition is pure: it renders text and
//! a deep link, and the caller decides if and when to open the link.

use serde::Serialize;

use crate::models::invitation::GuestInvitationContext;
use crate::models::roster::{AttendeeRoster, RosterError};

/// Base URI for WhatsApp deep links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Placeholder used when a link carried no guest name. A missing name must
/// never block confirmation.
pub const FALLBACK_GUEST_NAME: &str = "Invitado";

/// A rendered confirmation, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfirmationMessage {
    /// Human-readable message body.
    pub body: String,

    /// WhatsApp deep link addressed to the host, with the body URL-encoded
    /// into the `text` parameter.
    pub deep_link: String,
}

/// Renders confirmation messages addressed to a fixed host phone number.
#[derive(Debug, Clone)]
pub struct ConfirmationComposer {
    host_phone: String,
}

impl ConfirmationComposer {
    /// Creates a composer for the given host phone number (digits only, with
    /// country code, as WhatsApp expects it).
    pub fn new(host_phone: impl Into<String>) -> Self {
        Self {
            host_phone: host_phone.into(),
        }
    }

    /// Composes the confirmation for a roster.
    ///
    /// Refuses with [`RosterError::NamesIncomplete`] unless every attendee
    /// slot is filled; no partial message is ever produced. A missing guest
    /// name falls back to [`FALLBACK_GUEST_NAME`].
    pub fn compose(
        &self,
        context: &GuestInvitationContext,
        roster: &AttendeeRoster,
    ) -> Result<ConfirmationMessage, RosterError> {
        roster.validate()?;

        let guest_name = context.guest_name.as_deref().unwrap_or(FALLBACK_GUEST_NAME);
        let attendee_list = roster
            .names()
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{}. {}", index + 1, name))
            .collect::<Vec<_>>()
            .join("\n");

        let body = format!(
            "✨ 🏰 *CONFIRMACIÓN REAL* 🏰 ✨\n\
             📜 *_Decreto de Asistencia_*\n\
             \n\
             👑 *Invitado de Honor:* {guest_name}\n\
             🎟 *Asientos Reservados:* {selected} de {max}\n\
             \n\
             ⚜️ *Corte Real (Asistentes):*\n\
             {attendee_list}\n\
             \n\
             🥂 _\"Su presencia es el honor de nuestra corte.\"_\n\
             ✨ ¡Nos vemos en la celebración! ✨",
            selected = roster.selected_seats(),
            max = roster.max_seats(),
        );

        let deep_link = format!(
            "{WHATSAPP_BASE_URL}/{}?text={}",
            self.host_phone,
            shared::query::encode_component(&body)
        );

        Ok(ConfirmationMessage { body, deep_link })
    }
}
