//! Time-preference resolution: narrow a search-start instant from an optional
//! date hint and an optional coarse time-of-day token.
//!
//! The token set is a closed, enumerated heuristic — substring matches for a
//! small number of recognized words, not a natural-language time parser.
//! Anything richer belongs to the extraction step upstream of this crate.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::availability::WorkSchedule;

/// Fixed wall-clock threshold for the "afternoon" preference.
///
/// Deliberately independent of the schedule's work window (a noon-based
/// convention), while the "morning" preference uses the schedule's own
/// start time.
const AFTERNOON_START: NaiveTime = match NaiveTime::from_hms_opt(14, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// A recognized coarse time-of-day preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayPart {
    Morning,
    Afternoon,
}

/// Classify a free-form preference token, case-insensitively by substring.
///
/// Recognizes the Spanish tokens the assistant's extraction step emits
/// ("tarde", "mañana") plus their English equivalents. Unrecognized tokens
/// classify as `None` and leave the candidate instant untouched.
fn classify(token: &str) -> Option<DayPart> {
    let token = token.to_lowercase();
    if token.contains("tarde") || token.contains("afternoon") {
        Some(DayPart::Afternoon)
    } else if token.contains("mañana") || token.contains("manana") || token.contains("morning") {
        Some(DayPart::Morning)
    } else {
        None
    }
}

/// Resolve the instant at which the slot search should begin.
///
/// # Arguments
///
/// * `now` — The caller's current wall-clock instant
/// * `date_hint` — Optional explicit calendar date from the extraction step
/// * `time_preference` — Optional coarse token (e.g. "tarde", "por la mañana")
/// * `schedule` — The work schedule, consulted only for its start time
///
/// # Resolution rules
///
/// - With a date hint, the candidate is that date at local midnight;
///   otherwise it is `now`.
/// - An afternoon token advances a candidate earlier than 14:00 to 14:00.
/// - A morning token advances a candidate earlier than the schedule's start
///   time to that start time.
/// - No token, or an unrecognized one, leaves the candidate unchanged.
///
/// The result is **not** validated against work days or the work window —
/// the slot finder handles a candidate on a non-work day or outside work
/// hours by advancing to the next valid slot.
///
/// # Examples
///
/// ```
/// use agenda_engine::{resolve_search_start, WorkSchedule};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let schedule = WorkSchedule::new(
///     [false, true, true, true, true, true, false],
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// let now = NaiveDate::from_ymd_opt(2026, 8, 26)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
///
/// let start = resolve_search_start(now, None, Some("tarde"), &schedule);
/// assert_eq!(start, now.date().and_hms_opt(14, 0, 0).unwrap());
/// ```
pub fn resolve_search_start(
    now: NaiveDateTime,
    date_hint: Option<NaiveDate>,
    time_preference: Option<&str>,
    schedule: &WorkSchedule,
) -> NaiveDateTime {
    let candidate = match date_hint {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => now,
    };

    match time_preference.and_then(classify) {
        Some(DayPart::Afternoon) if candidate.time() < AFTERNOON_START => {
            candidate.date().and_time(AFTERNOON_START)
        }
        Some(DayPart::Morning) if candidate.time() < schedule.start_time() => {
            candidate.date().and_time(schedule.start_time())
        }
        _ => candidate,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
