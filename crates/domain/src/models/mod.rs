//! Domain models for the invitation service.

pub mod invitation;
pub mod roster;

pub use invitation::GuestInvitationContext;
pub use roster::{AttendeeRoster, RosterError, RosterState};
