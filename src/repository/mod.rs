//! Repository boundary.
//!
//! The engine reads and writes persisted entities through the narrow
//! [`ScheduleStore`] trait; the surrounding application owns the actual
//! storage. [`InMemoryStore`] is the reference implementation and the
//! engine's own test harness.
//!
//! # Atomicity
//!
//! [`ScheduleStore::reserve_seat`] is the concurrency-sensitive primitive:
//! it must consume a seat if and only if one is free, atomically with
//! respect to concurrent callers. The coordinator sequences the rest of
//! the assignment unit of work around it, releasing the seat again if a
//! later step fails.

mod memory;

pub use memory::InMemoryStore;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::{Enrollment, Room, Session};

/// Errors surfaced by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No exam with the given ID.
    #[error("exam not found: {0}")]
    ExamNotFound(String),

    /// No room with the given ID.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// No session with the given ID.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// The (student, session) pair already exists.
    #[error("student {student_id} is already enrolled in session {session_id}")]
    DuplicateEnrollment {
        student_id: String,
        session_id: String,
    },

    /// Backend read/write failure.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Store result alias.
pub type StoreResult<T> = Result<T, StoreError>;

/// Insert payload for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    /// Exam the session sits.
    pub exam_id: String,
    /// Room hosting the session.
    pub room_id: String,
    /// Calendar day.
    pub date: NaiveDate,
    /// Start time.
    pub start_time: NaiveTime,
    /// Seat capacity snapshot (room capacity at creation time).
    pub capacity: u32,
}

impl NewSession {
    /// Creates a session insert payload.
    pub fn new(
        exam_id: impl Into<String>,
        room_id: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        capacity: u32,
    ) -> Self {
        Self {
            exam_id: exam_id.into(),
            room_id: room_id.into(),
            date,
            start_time,
            capacity,
        }
    }
}

/// Narrow read/write boundary against persisted scheduling entities.
///
/// Methods take `&self`; implementations that are shared across threads
/// synchronize internally (a database handle or, for [`InMemoryStore`],
/// an in-process lock). The engine never caches store state across calls.
pub trait ScheduleStore {
    /// All sessions created for an exam.
    fn sessions_for_exam(&self, exam_id: &str) -> StoreResult<Vec<Session>>;

    /// Sessions the student holds an active (non-cancelled) enrollment in.
    fn sessions_for_student(&self, student_id: &str) -> StoreResult<Vec<Session>>;

    /// All sessions on a calendar day, across exams and rooms.
    fn sessions_on_date(&self, date: NaiveDate) -> StoreResult<Vec<Session>>;

    /// Sitting length of an exam in minutes.
    fn exam_duration_minutes(&self, exam_id: &str) -> StoreResult<i64>;

    /// Room topology, ordered by descending seat capacity.
    fn rooms_by_capacity(&self) -> StoreResult<Vec<Room>>;

    /// Whether the student holds a non-cancelled enrollment for the exam.
    fn has_active_enrollment(&self, student_id: &str, exam_id: &str) -> StoreResult<bool>;

    /// Persists a new session, born empty. Returns it with its assigned ID.
    fn create_session(&self, session: NewSession) -> StoreResult<Session>;

    /// Persists a new enrollment in the enrolled state. Fails with
    /// [`StoreError::DuplicateEnrollment`] if an active enrollment for the
    /// (student, session) pair already exists.
    fn create_enrollment(&self, student_id: &str, session_id: &str) -> StoreResult<Enrollment>;

    /// Consumes one seat iff one is free; returns whether a seat was taken.
    ///
    /// Must be atomic with respect to concurrent callers: two calls may
    /// never both consume the last seat.
    fn reserve_seat(&self, session_id: &str) -> StoreResult<bool>;

    /// Returns a previously reserved seat (rollback compensation).
    fn release_seat(&self, session_id: &str) -> StoreResult<()>;
}
