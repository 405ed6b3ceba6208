//! Existing-session reuse search.
//!
//! Before any new session is synthesized, the finder looks for an
//! already-created session of the same exam that still has a free seat and
//! collides with nothing on the student's personal schedule. Among
//! qualifying candidates the least-enrolled one wins, which spreads
//! students across duplicate sessions of the same exam.

use tracing::debug;

use crate::models::{Session, TimeSlot};
use crate::repository::{ScheduleStore, StoreResult};

/// Searches existing sessions for one that can absorb an enrollment.
#[derive(Debug)]
pub struct SessionFinder<'a, S> {
    store: &'a S,
}

impl<'a, S: ScheduleStore> SessionFinder<'a, S> {
    /// Creates a finder over a store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Returns the best reusable session for the exam, or `None`.
    ///
    /// A session qualifies when it has at least one free seat and its
    /// interval (start plus the exam's duration) overlaps nothing in
    /// `student_slots`. Full sessions are excluded before the load
    /// comparison, so a full session is never offered regardless of fit.
    /// Among qualifiers the lowest enrolled count wins; ties fall to
    /// whichever the store listed first.
    ///
    /// `None` is not an error; it signals fallthrough to synthesis.
    pub fn find(
        &self,
        exam_id: &str,
        duration_minutes: i64,
        student_slots: &[TimeSlot],
    ) -> StoreResult<Option<Session>> {
        let sessions = self.store.sessions_for_exam(exam_id)?;
        let best = sessions
            .into_iter()
            .filter(Session::has_free_seat)
            .filter(|s| !s.slot(duration_minutes).overlaps_any(student_slots))
            .min_by_key(|s| s.enrolled);

        if let Some(ref session) = best {
            debug!(
                session_id = %session.id,
                enrolled = session.enrolled,
                capacity = session.capacity,
                "found reusable session"
            );
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exam, Room};
    use crate::repository::{InMemoryStore, NewSession};
    use chrono::{NaiveDate, NaiveTime};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.add_exam(Exam::new("algo", "Algorithms").with_duration_minutes(120));
        store.add_room(Room::new("r1", "Room 101").with_capacity(10));
        store
    }

    fn make_session(store: &InMemoryStore, start: NaiveTime, enrolled: u32) -> Session {
        let session = store
            .create_session(NewSession::new("algo", "r1", day(), start, 10))
            .unwrap();
        for _ in 0..enrolled {
            assert!(store.reserve_seat(&session.id).unwrap());
        }
        store.session(&session.id).unwrap()
    }

    #[test]
    fn test_no_sessions_means_none() {
        let store = seeded_store();
        let finder = SessionFinder::new(&store);
        assert!(finder.find("algo", 120, &[]).unwrap().is_none());
    }

    #[test]
    fn test_picks_lowest_enrollment() {
        let store = seeded_store();
        make_session(&store, t(9), 3);
        let light = make_session(&store, t(11), 1);
        make_session(&store, t(13), 2);

        let finder = SessionFinder::new(&store);
        let found = finder.find("algo", 120, &[]).unwrap().unwrap();
        assert_eq!(found.id, light.id);
    }

    #[test]
    fn test_full_sessions_excluded() {
        let store = seeded_store();
        let session = store
            .create_session(NewSession::new("algo", "r1", day(), t(9), 1))
            .unwrap();
        assert!(store.reserve_seat(&session.id).unwrap());

        let finder = SessionFinder::new(&store);
        assert!(finder.find("algo", 120, &[]).unwrap().is_none());
    }

    #[test]
    fn test_conflicting_sessions_excluded() {
        let store = seeded_store();
        make_session(&store, t(9), 0);
        let late = make_session(&store, t(13), 5);

        // Student is busy 08:00–11:00, so only the 13:00 session fits even
        // though it carries more load.
        let busy = vec![TimeSlot::new(day(), t(8), t(11))];
        let finder = SessionFinder::new(&store);
        let found = finder.find("algo", 120, &busy).unwrap().unwrap();
        assert_eq!(found.id, late.id);
    }

    #[test]
    fn test_back_to_back_session_is_reusable() {
        let store = seeded_store();
        let session = make_session(&store, t(11), 0);

        // Student finishes at exactly 11:00; the 11:00 session qualifies.
        let busy = vec![TimeSlot::new(day(), t(9), t(11))];
        let finder = SessionFinder::new(&store);
        let found = finder.find("algo", 120, &busy).unwrap().unwrap();
        assert_eq!(found.id, session.id);
    }

    #[test]
    fn test_all_conflicting_means_none() {
        let store = seeded_store();
        make_session(&store, t(9), 0);
        make_session(&store, t(10), 0);

        let busy = vec![TimeSlot::new(day(), t(9), t(12))];
        let finder = SessionFinder::new(&store);
        assert!(finder.find("algo", 120, &busy).unwrap().is_none());
    }
}
