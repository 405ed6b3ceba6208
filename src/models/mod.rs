//! Exam-scheduling domain models.
//!
//! Persisted entities ([`Exam`], [`Room`], [`Session`], [`Enrollment`])
//! mirror the rows the surrounding application stores; [`TimeSlot`] is the
//! engine-internal interval view derived from a session plus its exam's
//! duration, never persisted.

mod enrollment;
mod exam;
mod room;
mod session;
mod slot;

pub use enrollment::{Enrollment, EnrollmentStatus};
pub use exam::Exam;
pub use room::Room;
pub use session::Session;
pub use slot::TimeSlot;
