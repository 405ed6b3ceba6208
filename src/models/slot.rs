//! Occupied-interval value model and overlap detection.
//!
//! A [`TimeSlot`] is the engine's ephemeral view of one occupied interval:
//! a calendar day, a start/end clock time, the room it occupies, and a
//! label for the owning exam. Slots are derived from persisted sessions
//! plus the exam duration and are never stored.
//!
//! Overlap detection on slots is the correctness primitive behind every
//! scheduling decision, so it lives here, away from all scheduling logic,
//! with its own tests.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One occupied interval [start, end) on a calendar day.
///
/// Half-open: includes start, excludes end. Back-to-back slots (one ending
/// exactly when the next starts) do not conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Calendar day of the interval.
    pub date: NaiveDate,
    /// Start of the interval (inclusive).
    pub start: NaiveTime,
    /// End of the interval (exclusive).
    pub end: NaiveTime,
    /// Room the interval occupies. Empty for candidate intervals that have
    /// no room yet.
    pub room: String,
    /// Label of the owning exam (diagnostics only).
    pub owner: String,
}

impl TimeSlot {
    /// Creates a slot with no room or owner attached.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            date,
            start,
            end,
            room: String::new(),
            owner: String::new(),
        }
    }

    /// Creates a slot from a start time and a length in minutes.
    pub fn from_start(date: NaiveDate, start: NaiveTime, duration_minutes: i64) -> Self {
        Self::new(date, start, start + Duration::minutes(duration_minutes))
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the owner label.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Interval length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether two slots overlap.
    ///
    /// Slots on different dates never overlap. Same-date intervals conflict
    /// iff `a.start < b.end && b.start < a.end`; touching endpoints do not.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.date == other.date && self.start < other.end && other.start < self.end
    }

    /// Whether this slot overlaps any slot in `others`.
    pub fn overlaps_any(&self, others: &[TimeSlot]) -> bool {
        others.iter().any(|s| self.overlaps(s))
    }
}
