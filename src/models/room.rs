//! Exam room entity.

use serde::{Deserialize, Serialize};

/// A room that can host exam sessions.
///
/// Capacity is a static attribute of the room; availability at any point
/// in time is always computed from the sessions occupying it, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of seats.
    pub capacity: u32,
}

impl Room {
    /// Creates a single-seat room.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity: 1,
        }
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}
