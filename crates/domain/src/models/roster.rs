//! Attendee roster: per-seat name slots with completeness validation.
//!
//! The roster is live for the whole page lifetime. It starts with a single
//! empty slot, grows or shrinks when the visitor changes how many seats they
//! are confirming, and is checked for completeness only when they attempt to
//! confirm. `names.len() == selected_seats` holds after every mutation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::invitation::{MAX_SEATS, MIN_SEATS};

/// Errors raised by roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Selected seats must be between {min} and {max}")]
    SeatCountOutOfRange { min: u8, max: u8 },

    #[error("Attendee index {index} is out of range (roster has {len} slots)")]
    SeatIndexOutOfRange { index: usize, len: usize },

    #[error("Por favor, completa todos los nombres de los asistentes.")]
    NamesIncomplete,
}

/// Where the roster sits in its edit/confirm cycle.
///
/// `ValidationFailed` is entered only by a failed confirmation attempt and
/// left again by any subsequent edit; the view layer reads this value
/// instead of keeping its own error flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterState {
    Editing,
    ValidationFailed,
}

/// Attendee name slots for a confirmed seat selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeRoster {
    max_seats: u8,
    selected_seats: u8,
    names: Vec<String>,
    state: RosterState,
}

impl AttendeeRoster {
    /// Creates a roster bounded by the invitation's seat allotment.
    ///
    /// Starts with one selected seat and one empty name slot.
    pub fn new(max_seats: u8) -> Self {
        Self {
            max_seats: max_seats.clamp(MIN_SEATS, MAX_SEATS),
            selected_seats: 1,
            names: vec![String::new()],
            state: RosterState::Editing,
        }
    }

    pub fn max_seats(&self) -> u8 {
        self.max_seats
    }

    pub fn selected_seats(&self) -> u8 {
        self.selected_seats
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn state(&self) -> RosterState {
        self.state
    }

    /// Changes how many seats are being confirmed, resizing the name slots.
    ///
    /// Shrinking truncates from the tail; growing pads with empty strings.
    /// Entries at surviving indices are untouched. Any pending validation
    /// failure is cleared.
    pub fn set_selected_seats(&mut self, seats: u8) -> Result<(), RosterError> {
        if !(MIN_SEATS..=self.max_seats).contains(&seats) {
            return Err(RosterError::SeatCountOutOfRange {
                min: MIN_SEATS,
                max: self.max_seats,
            });
        }

        self.selected_seats = seats;
        self.names.resize(seats as usize, String::new());
        self.state = RosterState::Editing;
        Ok(())
    }

    /// Replaces the name at `index` verbatim.
    ///
    /// No trimming happens at write time; trimming is a validation concern.
    pub fn set_name(&mut self, index: usize, value: impl Into<String>) -> Result<(), RosterError> {
        if index >= self.names.len() {
            return Err(RosterError::SeatIndexOutOfRange {
                index,
                len: self.names.len(),
            });
        }

        self.names[index] = value.into();
        self.state = RosterState::Editing;
        Ok(())
    }

    /// Checks completeness without mutating state.
    ///
    /// Fails with [`RosterError::NamesIncomplete`] when any slot is empty
    /// after trimming.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.names.iter().any(|name| name.trim().is_empty()) {
            Err(RosterError::NamesIncomplete)
        } else {
            Ok(())
        }
    }

    /// A confirmation attempt: validates and records the outcome.
    ///
    /// On failure the roster enters `ValidationFailed` but keeps all input;
    /// on success it stays in `Editing` (the roster has no terminal state).
    pub fn confirm(&mut self) -> Result<(), RosterError> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(err) => {
                self.state = RosterState::ValidationFailed;
                Err(err)
            }
        }
    }
}
