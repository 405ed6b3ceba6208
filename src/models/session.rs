//! Exam session entity (source schema: "exam schedule").
//!
//! A session is one scheduled occurrence of an exam: a room, a day, a
//! start time, and a seat budget. Sessions are born empty, gain and lose
//! enrollments as students register and cancel, and are never deleted by
//! the engine.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A scheduled occurrence of an exam.
///
/// Invariant: `enrolled <= capacity` at all times. The engine mutates only
/// the enrolled count (through the store's seat primitives), never the
/// session's placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: String,
    /// Exam this session sits.
    pub exam_id: String,
    /// Room hosting the session.
    pub room_id: String,
    /// Calendar day.
    pub date: NaiveDate,
    /// Start time.
    pub start_time: NaiveTime,
    /// Seat capacity snapshot taken from the room at creation time.
    pub capacity: u32,
    /// Seats consumed by enrollments.
    pub enrolled: u32,
}

impl Session {
    /// Creates a session born empty.
    pub fn new(
        id: impl Into<String>,
        exam_id: impl Into<String>,
        room_id: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            exam_id: exam_id.into(),
            room_id: room_id.into(),
            date,
            start_time,
            capacity,
            enrolled: 0,
        }
    }

    /// Seats still available.
    #[inline]
    pub fn remaining_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled)
    }

    /// Whether at least one seat is free.
    #[inline]
    pub fn has_free_seat(&self) -> bool {
        self.enrolled < self.capacity
    }

    /// Derives the interval this session occupies, given its exam's
    /// duration in minutes.
    pub fn slot(&self, duration_minutes: i64) -> TimeSlot {
        TimeSlot::from_start(self.date, self.start_time, duration_minutes)
            .with_room(self.room_id.as_str())
            .with_owner(self.exam_id.as_str())
    }
}
