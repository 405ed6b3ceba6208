//! Engine configuration.
//!
//! [`SchedulerConfig`] is immutable and injected at construction. It
//! carries everything that tunes the search (the forward horizon and the
//! canonical slot table) so no scheduling behavior depends on process
//! globals or environment probes.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Default number of future days searched before giving up.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// A canonical time window considered during session synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    /// Window start.
    pub start: NaiveTime,
    /// Window end.
    pub end: NaiveTime,
}

impl SlotWindow {
    /// Creates a new slot window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Window length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Immutable scheduling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Number of future days searched before failing, starting tomorrow.
    pub horizon_days: u32,
    /// Canonical slot table, kept ascending by start time.
    pub slots: Vec<SlotWindow>,
}

impl SchedulerConfig {
    /// Creates the default configuration: 30-day horizon and the four
    /// canonical two-hour windows.
    pub fn new() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            slots: default_slots(),
        }
    }

    /// Sets the search horizon in days.
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Replaces the slot table. Windows are sorted by start time.
    pub fn with_slots(mut self, mut slots: Vec<SlotWindow>) -> Self {
        slots.sort_by_key(|w| w.start);
        self.slots = slots;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The four canonical two-hour windows: 09:00, 11:00, 13:00, 15:00.
pub fn default_slots() -> Vec<SlotWindow> {
    (0..4)
        .map(|i| {
            let start = NaiveTime::from_hms_opt(9 + 2 * i, 0, 0)
                .expect("canonical slot start is a valid clock time");
            SlotWindow::new(start, start + Duration::hours(2))
        })
        .collect()
}
