//! Earliest-fit slot search over a weekly work schedule and existing bookings.
//!
//! The search is deterministic and greedy: days are scanned forward from the
//! search start, each day's bookings are walked in chronological order, and
//! the first gap wide enough for the requested duration wins. The cursor is
//! monotonically non-decreasing within a day — once advanced past a conflict
//! it is never retracted — so no earlier gap can be missed and no overlapping
//! interval can be proposed.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::availability::WorkSchedule;
use crate::error::{Result, ScheduleError};

/// Hard search horizon: no slot is ever proposed more than this many calendar
/// days after the search start. Exhausting the horizon is a normal outcome
/// ([`find_slot`] returns `Ok(None)`), not an error.
pub const SEARCH_HORIZON_DAYS: i64 = 30;

/// An already-booked interval, read-only input to the search.
///
/// Invariant (caller-supplied): `start < end`. A booking belongs to the
/// calendar day its `start` falls on; an interval spanning midnight is
/// attributed to its start day only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A proposed appointment interval.
///
/// `end - start` equals the requested duration exactly, and both instants lie
/// within a single day's work window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Round an instant **up** to the next quarter-hour boundary.
///
/// An instant exactly on a boundary is returned unchanged; 10:07 becomes
/// 10:15. Rolls over midnight when rounding within the last quarter hour of
/// a day.
fn ceil_to_quarter_hour(t: NaiveDateTime) -> NaiveDateTime {
    let seconds = i64::from(t.time().num_seconds_from_midnight());
    let floored =
        t.date().and_time(NaiveTime::MIN) + Duration::seconds(seconds - seconds % (15 * 60));
    if floored == t {
        t
    } else {
        floored + Duration::minutes(15)
    }
}

/// Find the earliest open interval of `duration_minutes` minutes.
///
/// Scans forward day by day from `search_start`'s date, up to and including
/// the day [`SEARCH_HORIZON_DAYS`] days later. Non-work days are skipped.
/// On each work day the candidate cursor begins at the work-window start;
/// when the day under examination is `now`'s own date, the cursor is first
/// trimmed to `now` rounded up to the next quarter hour, so no slot in the
/// past is ever suggested.
///
/// # Arguments
///
/// * `search_start` — Where the scan begins (see
///   [`resolve_search_start`](crate::resolve_search_start)); only its date
///   selects the first candidate day
/// * `now` — The current wall-clock instant, injected so tests can pin it
/// * `bookings` — Existing bookings; order does not matter, inputs are never
///   mutated
/// * `schedule` — The weekly work schedule
/// * `duration_minutes` — Requested appointment length, must be positive
///
/// # Returns
///
/// `Ok(Some(slot))` with the earliest fit, or `Ok(None)` when every day
/// within the horizon is non-working or fully booked — "no availability" is
/// an expected outcome, not an error.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidDuration`] if `duration_minutes` is not
/// positive. (An inverted work window is unrepresentable: [`WorkSchedule`]
/// rejects it at construction.)
///
/// # Examples
///
/// ```
/// use agenda_engine::{find_slot, WorkSchedule};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let schedule = WorkSchedule::new(
///     [false, true, true, true, true, true, false],
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// // Monday 08:00, nothing booked yet
/// let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
/// let start = monday.and_hms_opt(8, 0, 0).unwrap();
///
/// let slot = find_slot(start, start, &[], &schedule, 60).unwrap().unwrap();
/// assert_eq!(slot.start, monday.and_hms_opt(9, 0, 0).unwrap());
/// assert_eq!(slot.end, monday.and_hms_opt(10, 0, 0).unwrap());
/// ```
pub fn find_slot(
    search_start: NaiveDateTime,
    now: NaiveDateTime,
    bookings: &[Booking],
    schedule: &WorkSchedule,
    duration_minutes: i64,
) -> Result<Option<Slot>> {
    if duration_minutes <= 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }
    let duration = Duration::minutes(duration_minutes);

    let horizon = search_start + Duration::days(SEARCH_HORIZON_DAYS);
    let mut day = search_start.date();

    while day <= horizon.date() {
        if schedule.is_work_day(day.weekday()) {
            let window_end = day.and_time(schedule.end_time());
            let mut cursor = day.and_time(schedule.start_time());

            // Searching today: never suggest a slot in the past.
            if day == now.date() && cursor < now {
                cursor = ceil_to_quarter_hour(now);
            }

            let mut day_bookings: Vec<&Booking> =
                bookings.iter().filter(|b| b.start.date() == day).collect();
            day_bookings.sort_by_key(|b| b.start);

            for booking in day_bookings {
                let candidate_end = cursor + duration;
                // Gap before this booking, still inside the work window?
                if candidate_end <= booking.start && candidate_end <= window_end {
                    return Ok(Some(Slot {
                        start: cursor,
                        end: candidate_end,
                    }));
                }
                if cursor < booking.end {
                    cursor = booking.end;
                }
            }

            // Trailing gap after the day's last booking.
            let candidate_end = cursor + duration;
            if candidate_end <= window_end {
                return Ok(Some(Slot {
                    start: cursor,
                    end: candidate_end,
                }));
            }
        }

        day += Duration::days(1);
    }

    Ok(None)
}

// ── Tests ───────────────────────────────────────────────────────────────────
