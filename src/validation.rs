//! Input validation for the assignment engine.
//!
//! Checks structural integrity of the room topology and the scheduler
//! configuration before any assignment runs. Detects:
//! - Empty topology and duplicate room IDs
//! - Rooms with no seats
//! - An empty slot table, inverted windows, duplicate window starts
//! - A zero-day search horizon
//!
//! The engine refuses to invent topology or search bounds on its own;
//! running these checks at wiring time turns silent misconfiguration into
//! a loud one.

use std::collections::HashSet;

use crate::config::SchedulerConfig;
use crate::models::Room;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two rooms share the same ID.
    DuplicateRoomId,
    /// The room topology is empty.
    EmptyTopology,
    /// A room has zero seats.
    NoSeats,
    /// The slot table is empty.
    EmptySlotTable,
    /// A slot window ends at or before its start.
    InvertedSlotWindow,
    /// Two slot windows share a start time.
    DuplicateSlotStart,
    /// The search horizon is zero days.
    ZeroHorizon,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the room topology.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_topology(rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();

    if rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTopology,
            "no rooms configured",
        ));
    }

    let mut room_ids = HashSet::new();
    for room in rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRoomId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoSeats,
                format!("Room '{}' has no seats", room.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the scheduler configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &SchedulerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.horizon_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroHorizon,
            "search horizon is zero days; synthesis can never run",
        ));
    }

    if config.slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySlotTable,
            "slot table is empty",
        ));
    }

    let mut starts = HashSet::new();
    for window in &config.slots {
        if window.end <= window.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedSlotWindow,
                format!(
                    "Slot window {}-{} ends before it starts",
                    window.start, window.end
                ),
            ));
        }
        if !starts.insert(window.start) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlotStart,
                format!("Duplicate slot start: {}", window.start),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlotWindow;
    use chrono::NaiveTime;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn sample_rooms() -> Vec<Room> {
        vec![
            Room::new("hall", "Main Hall").with_capacity(30),
            Room::new("r1", "Room 101").with_capacity(10),
        ]
    }

    #[test]
    fn test_valid_topology() {
        assert!(validate_topology(&sample_rooms()).is_ok());
    }

    #[test]
    fn test_empty_topology() {
        let errors = validate_topology(&[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTopology));
    }

    #[test]
    fn test_duplicate_room_id() {
        let rooms = vec![
            Room::new("r1", "Room 101").with_capacity(10),
            Room::new("r1", "Room 101 again").with_capacity(10),
        ];
        let errors = validate_topology(&rooms).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateRoomId));
    }

    #[test]
    fn test_zero_capacity_room() {
        let rooms = vec![Room::new("closet", "Closet").with_capacity(0)];
        let errors = validate_topology(&rooms).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::NoSeats));
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&SchedulerConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_horizon() {
        let config = SchedulerConfig::default().with_horizon_days(0);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroHorizon));
    }

    #[test]
    fn test_empty_slot_table() {
        let config = SchedulerConfig::default().with_slots(vec![]);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptySlotTable));
    }

    #[test]
    fn test_inverted_slot_window() {
        let config = SchedulerConfig::default().with_slots(vec![SlotWindow::new(t(11), t(9))]);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvertedSlotWindow));
    }

    #[test]
    fn test_duplicate_slot_start() {
        let config = SchedulerConfig::default().with_slots(vec![
            SlotWindow::new(t(9), t(11)),
            SlotWindow::new(t(9), t(12)),
        ]);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSlotStart));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let rooms = vec![
            Room::new("r1", "Room 101").with_capacity(0),
            Room::new("r1", "Room 101 again").with_capacity(10),
        ];
        let errors = validate_topology(&rooms).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
