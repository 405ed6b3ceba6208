//! Enrollment coordination.
//!
//! [`EnrollmentCoordinator`] is the engine's entry point. One
//! [`assign`](EnrollmentCoordinator::assign) call is one unit of work:
//! duplicate guard, reuse search, synthesis fallback, then the
//! seat-reserve/enroll commit. The reserved seat is the atomic commit
//! point: if the enrollment insert fails afterwards the seat is released
//! again, so an enrollment without a consumed seat (or the reverse) never
//! persists.

use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{student_schedule, SessionFinder, SessionSynthesizer};
use crate::config::SchedulerConfig;
use crate::models::Session;
use crate::repository::{ScheduleStore, StoreError};

/// Outcome of a committed assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    /// Created enrollment row.
    pub enrollment_id: String,
    /// Session the student was placed in.
    pub session_id: String,
    /// Session day.
    pub date: NaiveDate,
    /// Session start time.
    pub start_time: NaiveTime,
    /// Display name of the hosting room.
    pub room: String,
}

/// Errors surfaced by [`EnrollmentCoordinator::assign`].
///
/// None of these are retried inside the engine; retry policy belongs to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The student already holds a non-cancelled enrollment for the exam.
    /// A no-op notice, not a fault.
    #[error("student {student_id} is already enrolled in exam {exam_id}")]
    AlreadyEnrolled {
        student_id: String,
        exam_id: String,
    },

    /// No reusable or creatable session within the search horizon. Hard
    /// failure requiring administrative action (wider horizon, more
    /// rooms).
    #[error("no seat available for exam {exam_id} within {horizon_days} days")]
    NoCapacityInHorizon {
        exam_id: String,
        horizon_days: u32,
    },

    /// The room topology is empty; nothing can ever be scheduled. The
    /// engine refuses to fabricate rooms.
    #[error("no rooms configured")]
    NoRooms,

    /// The store failed; the unit of work was rolled back.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Assigns exam registrations to concrete (date, time, room) sessions.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use examsched::models::{Exam, Room};
/// use examsched::repository::InMemoryStore;
/// use examsched::scheduler::EnrollmentCoordinator;
///
/// let store = InMemoryStore::new();
/// store.add_exam(Exam::new("algo", "Algorithms").with_duration_minutes(120));
/// store.add_room(Room::new("hall", "Main Hall").with_capacity(30));
///
/// let coordinator = EnrollmentCoordinator::new(store);
/// let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let outcome = coordinator.assign_from("stu-1", "algo", today).unwrap();
/// assert_eq!(outcome.room, "Main Hall");
/// ```
#[derive(Debug)]
pub struct EnrollmentCoordinator<S> {
    store: S,
    config: SchedulerConfig,
}

impl<S: ScheduleStore> EnrollmentCoordinator<S> {
    /// Creates a coordinator with the default configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: SchedulerConfig::default(),
        }
    }

    /// Sets the scheduling configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Assigns the student to a session of the exam, resolving "today"
    /// from the local clock.
    pub fn assign(
        &self,
        student_id: &str,
        exam_id: &str,
    ) -> Result<AssignmentOutcome, AssignError> {
        self.assign_from(student_id, exam_id, Local::now().date_naive())
    }

    /// Assigns with an explicit "today", the deterministic seam for tests
    /// and replays. The synthesis horizon starts the day after `today`.
    pub fn assign_from(
        &self,
        student_id: &str,
        exam_id: &str,
        today: NaiveDate,
    ) -> Result<AssignmentOutcome, AssignError> {
        if self.store.has_active_enrollment(student_id, exam_id)? {
            return Err(AssignError::AlreadyEnrolled {
                student_id: student_id.to_string(),
                exam_id: exam_id.to_string(),
            });
        }

        let rooms = self.store.rooms_by_capacity()?;
        if rooms.is_empty() {
            return Err(AssignError::NoRooms);
        }

        let student_slots = student_schedule(&self.store, student_id)?;
        let duration_minutes = self.store.exam_duration_minutes(exam_id)?;

        // Reuse before create. Reserving the seat is the commit point; if
        // a concurrent caller drains the candidate between find and
        // reserve, fall through to synthesis in this same pass rather
        // than re-running the search.
        let finder = SessionFinder::new(&self.store);
        let mut session: Option<Session> = None;
        if let Some(candidate) = finder.find(exam_id, duration_minutes, &student_slots)? {
            if self.store.reserve_seat(&candidate.id)? {
                session = Some(candidate);
            } else {
                debug!(
                    session_id = %candidate.id,
                    "reuse candidate drained concurrently, falling through to synthesis"
                );
            }
        }

        let session = match session {
            Some(existing) => existing,
            None => {
                let synthesizer = SessionSynthesizer::new(&self.store, &self.config);
                let created = synthesizer.synthesize(
                    exam_id,
                    duration_minutes,
                    &student_slots,
                    &rooms,
                    today,
                )?;
                let created = match created {
                    Some(s) => s,
                    None => {
                        return Err(AssignError::NoCapacityInHorizon {
                            exam_id: exam_id.to_string(),
                            horizon_days: self.config.horizon_days,
                        })
                    }
                };
                if !self.store.reserve_seat(&created.id)? {
                    return Err(AssignError::Store(StoreError::Backend(format!(
                        "new session {} lost its seats before reservation",
                        created.id
                    ))));
                }
                created
            }
        };

        let enrollment = match self.store.create_enrollment(student_id, &session.id) {
            Ok(enrollment) => enrollment,
            Err(err) => {
                if let Err(release_err) = self.store.release_seat(&session.id) {
                    warn!(
                        session_id = %session.id,
                        error = %release_err,
                        "seat release failed during rollback"
                    );
                }
                return Err(match err {
                    StoreError::DuplicateEnrollment { .. } => AssignError::AlreadyEnrolled {
                        student_id: student_id.to_string(),
                        exam_id: exam_id.to_string(),
                    },
                    other => AssignError::Store(other),
                });
            }
        };

        let room = rooms
            .iter()
            .find(|r| r.id == session.room_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| session.room_id.clone());

        info!(
            enrollment_id = %enrollment.id,
            session_id = %session.id,
            date = %session.date,
            start = %session.start_time,
            room = %room,
            "assignment committed"
        );

        Ok(AssignmentOutcome {
            enrollment_id: enrollment.id,
            session_id: session.id,
            date: session.date,
            start_time: session.start_time,
            room,
        })
    }
}
