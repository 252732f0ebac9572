//! Common validation utilities.

use validator::ValidationError;

/// Minimum number of reservable seats on an invitation.
pub const MIN_SEATS: u8 = 1;

/// Maximum number of reservable seats on an invitation.
pub const MAX_SEATS: u8 = 9;

/// Validates that a seat count is within the invitation range (1 to 9).
pub fn validate_seat_count(seats: u8) -> Result<(), ValidationError> {
    if (MIN_SEATS..=MAX_SEATS).contains(&seats) {
        Ok(())
    } else {
        let mut err = ValidationError::new("seat_count_range");
        err.message = Some("Seat count must be between 1 and 9".into());
        Err(err)
    }
}

/// Validates that a guest name is non-empty after trimming whitespace.
pub fn validate_guest_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("guest_name_blank");
        err.message = Some("Guest name must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}
