//! Personalized invitation link generation (administrative surface).
//!
//! The host mints links of the form `{base}/?n=<name>&c=<seats>`; the
//! resolver on the receiving end consumes exactly this query string. The
//! generator also renders a ready-to-send WhatsApp message carrying the
//! link, addressed to no fixed recipient so the host picks one when sharing.

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::confirmation::WHATSAPP_BASE_URL;
use crate::location::PageLocation;
use crate::models::invitation::{MAX_SEATS, MIN_SEATS};

/// Errors raised by link generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Blank guest names produce no link at all rather than a broken one.
    #[error("Guest name must not be blank")]
    EmptyGuestName,

    #[error("Seats must be between {min} and {max}")]
    SeatsOutOfRange { min: u8, max: u8 },
}

/// A generated personalized link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InvitationLink {
    /// Scheme plus authority of the invitation site.
    pub origin: String,

    /// Base path with any administrative-panel segment stripped. Empty for
    /// a site served from the root.
    pub path: String,

    /// Trimmed guest display name embedded in the link.
    pub guest_name: String,

    /// Reserved seat count, within [1, 9].
    pub seats: u8,

    /// The full shareable URL.
    pub url: String,
}

/// Builds personalized invitation links from the admin panel's location.
#[derive(Debug, Clone)]
pub struct LinkGenerator {
    event_title: String,
    panel_path: Regex,
}

impl LinkGenerator {
    /// Creates a generator.
    ///
    /// `event_title` is interpolated into the share message ("15 años de
    /// Eury" on the original site). `panel_segment` is the administrative
    /// path segment to strip from the panel's own location so generated
    /// links point at the public invitation root.
    pub fn new(event_title: impl Into<String>, panel_segment: &str) -> Self {
        let segment = regex::escape(panel_segment);
        let pattern = format!(r"(?i)/(?:public/)?{segment}(?:\.html)?/?$");
        Self {
            event_title: event_title.into(),
            panel_path: Regex::new(&pattern).expect("panel path pattern"),
        }
    }

    /// Generates a personalized link for a guest.
    ///
    /// Refuses blank names (after trimming) and out-of-range seat counts.
    /// Idempotent and side-effect-free.
    pub fn generate(
        &self,
        location: &impl PageLocation,
        guest_name: &str,
        seats: u8,
    ) -> Result<InvitationLink, LinkError> {
        let guest_name = guest_name.trim();
        if guest_name.is_empty() {
            return Err(LinkError::EmptyGuestName);
        }
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(LinkError::SeatsOutOfRange {
                min: MIN_SEATS,
                max: MAX_SEATS,
            });
        }

        let path = self.strip_panel_path(location.path());
        let url = format!(
            "{}{}/?n={}&c={}",
            location.origin(),
            path,
            shared::query::encode_component(guest_name),
            seats
        );

        Ok(InvitationLink {
            origin: location.origin().to_string(),
            path,
            guest_name: guest_name.to_string(),
            seats,
            url,
        })
    }

    /// Renders the host-to-guest share message for a generated link.
    pub fn share_message(&self, link: &InvitationLink) -> String {
        format!(
            "¡Hola {guest}! 👑\n\
             \n\
             Es un honor invitarles a celebrar los *{title}*. Queremos que formen parte \
             de nuestra Corte Real en este día tan especial.\n\
             \n\
             Hemos reservado *{seats}* lugares para ustedes. Por favor, confirmen \
             cuántos de ustedes asistirán y sus nombres en el siguiente enlace:\n\
             \n\
             🔗 {url}\n\
             \n\
             ¡Esperamos verlos pronto!",
            guest = link.guest_name,
            title = self.event_title,
            seats = link.seats,
            url = link.url,
        )
    }

    /// Wraps the share message into a recipient-less WhatsApp deep link.
    pub fn share_url(&self, link: &InvitationLink) -> String {
        format!(
            "{WHATSAPP_BASE_URL}/?text={}",
            shared::query::encode_component(&self.share_message(link))
        )
    }

    /// Removes the administrative-panel suffix from a path, normalizing the
    /// bare root to the empty string (the serialized form appends `/?`).
    fn strip_panel_path(&self, path: &str) -> String {
        let stripped = self.panel_path.replace(path, "");
        if stripped.is_empty() || stripped == "/" {
            String::new()
        } else {
            stripped.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::FixedLocation;
    use crate::models::invitation::GuestInvitationContext;

    fn generator() -> LinkGenerator {
        LinkGenerator::new("15 años de Eury", "panel-nancy")
    }

    fn at(url: &str) -> FixedLocation {
        FixedLocation::parse(url).unwrap()
    }

    #[test]
    fn test_generate_from_root() {
        let link = generator()
            .generate(&at("https://example.com/"), "Familia Rivera", 5)
            .unwrap();
        assert_eq!(link.url, "https://example.com/?n=Familia%20Rivera&c=5");
        assert_eq!(link.origin, "https://example.com");
        assert_eq!(link.path, "");
        assert_eq!(link.seats, 5);
    }

    #[test]
    fn test_generate_refuses_blank_name() {
        let result = generator().generate(&at("https://example.com/"), "", 5);
        assert_eq!(result, Err(LinkError::EmptyGuestName));

        let result = generator().generate(&at("https://example.com/"), "   ", 5);
        assert_eq!(result, Err(LinkError::EmptyGuestName));
    }

    #[test]
    fn test_generate_refuses_out_of_range_seats() {
        let result = generator().generate(&at("https://example.com/"), "Ana", 0);
        assert_eq!(result, Err(LinkError::SeatsOutOfRange { min: 1, max: 9 }));

        let result = generator().generate(&at("https://example.com/"), "Ana", 10);
        assert_eq!(result, Err(LinkError::SeatsOutOfRange { min: 1, max: 9 }));
    }

    #[test]
    fn test_generate_trims_guest_name() {
        let link = generator()
            .generate(&at("https://example.com/"), "  Ana  ", 2)
            .unwrap();
        assert_eq!(link.guest_name, "Ana");
        assert_eq!(link.url, "https://example.com/?n=Ana&c=2");
    }

    #[test]
    fn test_generate_strips_panel_path() {
        let link = generator()
            .generate(&at("https://example.com/panel-nancy/"), "Ana", 3)
            .unwrap();
        assert_eq!(link.url, "https://example.com/?n=Ana&c=3");
    }

    #[test]
    fn test_generate_strips_panel_path_variants() {
        let cases = [
            "https://example.com/panel-nancy",
            "https://example.com/panel-nancy.html",
            "https://example.com/PANEL-NANCY/",
            "https://example.com/public/panel-nancy/",
            "https://example.com/public/panel-nancy.html",
        ];
        for url in cases {
            let link = generator().generate(&at(url), "Ana", 3).unwrap();
            assert_eq!(link.url, "https://example.com/?n=Ana&c=3", "from {url}");
        }
    }

    #[test]
    fn test_generate_keeps_unrelated_path() {
        let link = generator()
            .generate(&at("https://example.com/invite/panel-nancy/"), "Ana", 3)
            .unwrap();
        assert_eq!(link.url, "https://example.com/invite/?n=Ana&c=3");

        let link = generator()
            .generate(&at("https://example.com/fiesta"), "Ana", 3)
            .unwrap();
        assert_eq!(link.url, "https://example.com/fiesta/?n=Ana&c=3");
    }

    #[test]
    fn test_generated_link_round_trips_through_resolver() {
        let names = ["Familia Rivera", "Pérez & Gómez", "Mesa #4"];
        for name in names {
            for seats in 1..=9u8 {
                let link = generator()
                    .generate(&at("https://example.com/"), name, seats)
                    .unwrap();
                let location = FixedLocation::parse(&link.url).unwrap();
                let ctx = GuestInvitationContext::resolve(&location);
                assert_eq!(ctx.guest_name.as_deref(), Some(name));
                assert_eq!(ctx.max_seats, seats);
            }
        }
    }

    #[test]
    fn test_share_message_contents() {
        let link = generator()
            .generate(&at("https://example.com/"), "Familia Rivera", 5)
            .unwrap();
        let message = generator().share_message(&link);

        assert!(message.contains("¡Hola Familia Rivera!"));
        assert!(message.contains("*15 años de Eury*"));
        assert!(message.contains("*5* lugares"));
        assert!(message.contains(&link.url));
    }

    #[test]
    fn test_share_url_has_no_recipient() {
        let generator = generator();
        let link = generator
            .generate(&at("https://example.com/"), "Ana", 2)
            .unwrap();
        let share = generator.share_url(&link);

        assert!(share.starts_with("https://wa.me/?text="));
        let (_, query) = share.split_once('?').unwrap();
        let decoded = shared::query::get_param(query, "text").unwrap();
        assert_eq!(decoded, generator.share_message(&link));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let generator = generator();
        let location = at("https://example.com/panel-nancy/");
        let a = generator.generate(&location, "Ana", 4).unwrap();
        let b = generator.generate(&location, "Ana", 4).unwrap();
        assert_eq!(a, b);
    }
}
