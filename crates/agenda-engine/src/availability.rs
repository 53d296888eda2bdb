//! Weekly work schedule: which weekdays are workable and the daily work window.
//!
//! [`WorkSchedule`] is a pure value type — construct a new one to change
//! settings. The `start_time < end_time` invariant is enforced at
//! construction, so downstream code never has to re-validate the window.

use chrono::{NaiveTime, Weekday};
use serde::Serialize;

use crate::error::{Result, ScheduleError};

/// A professional's recurring weekly availability.
///
/// Work days are a fixed array of exactly 7 booleans indexed by weekday
/// (0 = Sunday .. 6 = Saturday), so every weekday has an explicit setting —
/// there is no "missing key" state. The daily work window `[start, end)` is
/// the same wall-clock interval on every work day.
///
/// # Examples
///
/// ```
/// use agenda_engine::WorkSchedule;
/// use chrono::{NaiveTime, Weekday};
///
/// // Monday through Friday, 09:00–18:00
/// let schedule = WorkSchedule::new(
///     [false, true, true, true, true, true, false],
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// assert!(schedule.is_work_day(Weekday::Mon));
/// assert!(!schedule.is_work_day(Weekday::Sun));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkSchedule {
    work_days: [bool; 7],
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl WorkSchedule {
    /// Create a schedule from per-weekday flags and a daily work window.
    ///
    /// `work_days` is indexed Sunday-first: `work_days[0]` is Sunday,
    /// `work_days[6]` is Saturday.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidWorkWindow`] if `start_time` is not
    /// strictly before `end_time`.
    pub fn new(work_days: [bool; 7], start_time: NaiveTime, end_time: NaiveTime) -> Result<Self> {
        if start_time >= end_time {
            return Err(ScheduleError::InvalidWorkWindow {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            work_days,
            start_time,
            end_time,
        })
    }

    /// Whether appointments may be scheduled on the given weekday.
    pub fn is_work_day(&self, weekday: Weekday) -> bool {
        self.work_days[weekday.num_days_from_sunday() as usize]
    }

    /// Start of the daily work window.
    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// End of the daily work window.
    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
