//! Enrollment entity (source schema: "student exam").

use serde::{Deserialize, Serialize};

/// A student's registration into a specific session.
///
/// Invariants: at most one active enrollment per (student, exam), and at
/// most one enrollment per (student, session). The engine creates
/// enrollments only in the [`EnrollmentStatus::Enrolled`] state; later
/// transitions are administrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique enrollment identifier.
    pub id: String,
    /// Enrolled student.
    pub student_id: String,
    /// Session the student sits.
    pub session_id: String,
    /// Lifecycle state.
    pub status: EnrollmentStatus,
    /// Whether the sitting fee is settled.
    pub paid: bool,
}

/// Enrollment lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    /// Registered but not yet confirmed.
    Pending,
    /// Confirmed and holding a seat.
    Enrolled,
    /// Exam has been sat.
    Completed,
    /// Registration withdrawn; the seat is returned.
    Cancelled,
}

impl EnrollmentStatus {
    /// Whether this status still counts against the one-active-enrollment
    /// rule and the session's seat budget.
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl Enrollment {
    /// Creates an enrollment as the engine commits it: enrolled and paid.
    pub fn new(
        id: impl Into<String>,
        student_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            student_id: student_id.into(),
            session_id: session_id.into(),
            status: EnrollmentStatus::Enrolled,
            paid: true,
        }
    }

    /// Sets the lifecycle state (administrative edits).
    pub fn with_status(mut self, status: EnrollmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this enrollment is still active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_created_state() {
        let e = Enrollment::new("enr-1", "stu-1", "sess-1");
        assert_eq!(e.status, EnrollmentStatus::Enrolled);
        assert!(e.paid);
        assert!(e.is_active());
    }

    #[test]
    fn test_only_cancelled_is_inactive() {
        assert!(EnrollmentStatus::Pending.is_active());
        assert!(EnrollmentStatus::Enrolled.is_active());
        assert!(EnrollmentStatus::Completed.is_active());
        assert!(!EnrollmentStatus::Cancelled.is_active());
    }

    #[test]
    fn test_with_status() {
        let e = Enrollment::new("enr-1", "stu-1", "sess-1")
            .with_status(EnrollmentStatus::Cancelled);
        assert!(!e.is_active());
    }
}
