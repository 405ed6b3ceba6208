//! The assignment engine.
//!
//! Three collaborators implement the find-or-create-then-enroll pipeline:
//!
//! - [`SessionFinder`]: reuse search over already-created sessions.
//! - [`SessionSynthesizer`]: bounded-horizon search that creates a session
//!   when none can be reused.
//! - [`EnrollmentCoordinator`]: the entry point — runs the duplicate
//!   guard, the two searches, and the seat-reserve/enroll commit as one
//!   unit of work.
//!
//! # Algorithm
//!
//! Reuse before create: an existing conflict-free session with a free seat
//! always wins over synthesizing a new one. Synthesis is greedy (largest
//! rooms first, earliest slot first) and bounded by the configured
//! horizon; exhaustion is a hard failure, not a retry.
//!
//! # Reference
//! - Carter & Laporte (1996), "Examination Timetabling: Algorithmic
//!   Strategies and Applications"

mod coordinator;
mod finder;
mod synthesizer;

pub use coordinator::{AssignError, AssignmentOutcome, EnrollmentCoordinator};
pub use finder::SessionFinder;
pub use synthesizer::SessionSynthesizer;

use std::collections::HashMap;

use crate::models::TimeSlot;
use crate::repository::{ScheduleStore, StoreResult};

/// Loads a student's personal schedule as occupied intervals.
///
/// Enumerates the student's active sessions and derives each end time from
/// the owning exam's duration. Durations are memoized per exam so a
/// student sitting several sessions of the same exam family costs one
/// lookup each.
pub fn student_schedule<S: ScheduleStore>(
    store: &S,
    student_id: &str,
) -> StoreResult<Vec<TimeSlot>> {
    let sessions = store.sessions_for_student(student_id)?;
    let mut durations: HashMap<String, i64> = HashMap::new();
    let mut slots = Vec::with_capacity(sessions.len());
    for session in &sessions {
        let minutes = match durations.get(session.exam_id.as_str()) {
            Some(&m) => m,
            None => {
                let m = store.exam_duration_minutes(&session.exam_id)?;
                durations.insert(session.exam_id.clone(), m);
                m
            }
        };
        slots.push(session.slot(minutes));
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exam, Room};
    use crate::repository::{InMemoryStore, NewSession};
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_student_schedule_derives_end_times() {
        let store = InMemoryStore::new();
        store.add_exam(Exam::new("algo", "Algorithms").with_duration_minutes(90));
        store.add_room(Room::new("r1", "Room 101").with_capacity(10));

        let date = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let session = store
            .create_session(NewSession::new("algo", "r1", date, start, 10))
            .unwrap();
        store.reserve_seat(&session.id).unwrap();
        store.create_enrollment("stu-1", &session.id).unwrap();

        let slots = student_schedule(&store, "stu-1").unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, start);
        assert_eq!(slots[0].end, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(slots[0].room, "r1");

        assert!(student_schedule(&store, "stu-2").unwrap().is_empty());
    }
}
