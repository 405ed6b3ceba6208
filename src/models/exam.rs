//! Exam catalog entity.

use serde::{Deserialize, Serialize};

use crate::duration;

/// An exam offered by a course.
///
/// Immutable from the engine's point of view; only administrative edits
/// change it. Duration is stored in minutes; legacy free-text values pass
/// through [`duration::parse_minutes`] on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// Unique exam identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning course identifier.
    pub course_id: String,
    /// Sitting length in minutes.
    pub duration_minutes: i64,
}

impl Exam {
    /// Creates an exam with the default two-hour duration.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            course_id: String::new(),
            duration_minutes: duration::DEFAULT_DURATION_MINUTES,
        }
    }

    /// Sets the owning course.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = course_id.into();
        self
    }

    /// Sets the duration in minutes.
    pub fn with_duration_minutes(mut self, minutes: i64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the duration from legacy free text (migration shim).
    pub fn with_duration_text(self, text: &str) -> Self {
        let minutes = duration::parse_minutes(text);
        self.with_duration_minutes(minutes)
    }
}
