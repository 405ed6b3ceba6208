//! In-memory store.
//!
//! Reference implementation of [`ScheduleStore`]: plain maps behind a
//! single `parking_lot::RwLock`. Seat reservation is a conditional
//! increment under the write guard, which makes it atomic across threads
//! sharing the store.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use parking_lot::RwLock;

use super::{NewSession, ScheduleStore, StoreError, StoreResult};
use crate::models::{Enrollment, EnrollmentStatus, Exam, Room, Session};

#[derive(Debug, Default)]
struct State {
    exams: HashMap<String, Exam>,
    rooms: Vec<Room>,
    sessions: Vec<Session>,
    enrollments: Vec<Enrollment>,
    next_session_id: u64,
    next_enrollment_id: u64,
}

/// In-memory [`ScheduleStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an exam in the catalog.
    pub fn add_exam(&self, exam: Exam) {
        self.state.write().exams.insert(exam.id.clone(), exam);
    }

    /// Registers a room in the topology.
    pub fn add_room(&self, room: Room) {
        self.state.write().rooms.push(room);
    }

    /// Snapshot of a session by ID.
    pub fn session(&self, session_id: &str) -> Option<Session> {
        self.state
            .read()
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
    }

    /// Snapshot of all sessions.
    pub fn sessions(&self) -> Vec<Session> {
        self.state.read().sessions.clone()
    }

    /// Snapshot of all enrollments.
    pub fn enrollments(&self) -> Vec<Enrollment> {
        self.state.read().enrollments.clone()
    }

    /// Number of sessions in the store.
    pub fn session_count(&self) -> usize {
        self.state.read().sessions.len()
    }

    /// Cancels an enrollment (administrative path), returning its seat.
    pub fn cancel_enrollment(&self, enrollment_id: &str) -> StoreResult<()> {
        let mut state = self.state.write();
        let enrollment = state
            .enrollments
            .iter_mut()
            .find(|e| e.id == enrollment_id)
            .ok_or_else(|| StoreError::Backend(format!("enrollment not found: {enrollment_id}")))?;
        if !enrollment.is_active() {
            return Ok(());
        }
        enrollment.status = EnrollmentStatus::Cancelled;
        let session_id = enrollment.session_id.clone();
        if let Some(session) = state.sessions.iter_mut().find(|s| s.id == session_id) {
            session.enrolled = session.enrolled.saturating_sub(1);
        }
        Ok(())
    }
}

impl ScheduleStore for InMemoryStore {
    fn sessions_for_exam(&self, exam_id: &str) -> StoreResult<Vec<Session>> {
        Ok(self
            .state
            .read()
            .sessions
            .iter()
            .filter(|s| s.exam_id == exam_id)
            .cloned()
            .collect())
    }

    fn sessions_for_student(&self, student_id: &str) -> StoreResult<Vec<Session>> {
        let state = self.state.read();
        let session_ids: HashSet<&str> = state
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id && e.is_active())
            .map(|e| e.session_id.as_str())
            .collect();
        Ok(state
            .sessions
            .iter()
            .filter(|s| session_ids.contains(s.id.as_str()))
            .cloned()
            .collect())
    }

    fn sessions_on_date(&self, date: NaiveDate) -> StoreResult<Vec<Session>> {
        Ok(self
            .state
            .read()
            .sessions
            .iter()
            .filter(|s| s.date == date)
            .cloned()
            .collect())
    }

    fn exam_duration_minutes(&self, exam_id: &str) -> StoreResult<i64> {
        self.state
            .read()
            .exams
            .get(exam_id)
            .map(|e| e.duration_minutes)
            .ok_or_else(|| StoreError::ExamNotFound(exam_id.to_string()))
    }

    fn rooms_by_capacity(&self) -> StoreResult<Vec<Room>> {
        let mut rooms = self.state.read().rooms.clone();
        rooms.sort_by(|a, b| b.capacity.cmp(&a.capacity));
        Ok(rooms)
    }

    fn has_active_enrollment(&self, student_id: &str, exam_id: &str) -> StoreResult<bool> {
        let state = self.state.read();
        Ok(state
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id && e.is_active())
            .any(|e| {
                state
                    .sessions
                    .iter()
                    .any(|s| s.id == e.session_id && s.exam_id == exam_id)
            }))
    }

    fn create_session(&self, session: NewSession) -> StoreResult<Session> {
        let mut state = self.state.write();
        if !state.exams.contains_key(&session.exam_id) {
            return Err(StoreError::ExamNotFound(session.exam_id));
        }
        if !state.rooms.iter().any(|r| r.id == session.room_id) {
            return Err(StoreError::RoomNotFound(session.room_id));
        }
        state.next_session_id += 1;
        let created = Session::new(
            format!("sess-{}", state.next_session_id),
            session.exam_id,
            session.room_id,
            session.date,
            session.start_time,
            session.capacity,
        );
        state.sessions.push(created.clone());
        Ok(created)
    }

    fn create_enrollment(&self, student_id: &str, session_id: &str) -> StoreResult<Enrollment> {
        let mut state = self.state.write();
        if !state.sessions.iter().any(|s| s.id == session_id) {
            return Err(StoreError::SessionNotFound(session_id.to_string()));
        }
        if state
            .enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.session_id == session_id && e.is_active())
        {
            return Err(StoreError::DuplicateEnrollment {
                student_id: student_id.to_string(),
                session_id: session_id.to_string(),
            });
        }
        state.next_enrollment_id += 1;
        let created = Enrollment::new(
            format!("enr-{}", state.next_enrollment_id),
            student_id,
            session_id,
        );
        state.enrollments.push(created.clone());
        Ok(created)
    }

    fn reserve_seat(&self, session_id: &str) -> StoreResult<bool> {
        let mut state = self.state.write();
        let session = state
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))?;
        if session.enrolled < session.capacity {
            session.enrolled += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn release_seat(&self, session_id: &str) -> StoreResult<()> {
        let mut state = self.state.write();
        let session = state
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))?;
        session.enrolled = session.enrolled.saturating_sub(1);
        Ok(())
    }
}
