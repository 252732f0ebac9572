//! Domain services for the invitation flow.
//!
//! Services contain business logic that operates on domain models.

pub mod confirmation;
pub mod countdown;
pub mod link_generator;

pub use confirmation::{ConfirmationComposer, ConfirmationMessage};
pub use countdown::{time_remaining, TimeRemaining};
pub use link_generator::{InvitationLink, LinkError, LinkGenerator};
