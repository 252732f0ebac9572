//! Shared utilities and common types for the invitation service.
//!
//! This crate provides common functionality used across all other crates:
//! - Query-string encoding and decoding
//! - Common validation logic

pub mod query;
pub mod validation;
