//! HTTP route handlers.

pub mod event;
pub mod health;
pub mod invitation;
pub mod panel;
pub mod rsvp;
