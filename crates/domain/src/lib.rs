//! Domain layer for the invitation service.
//!
//! This crate contains:
//! - Domain models (guest invitation context, attendee roster)
//! - Business logic services (confirmation composer, link generator, countdown)
//! - The page-location capability used to keep the core free of ambient state

pub mod location;
pub mod models;
pub mod services;
