//! Booking intake: turn the extraction collaborator's structured request into
//! a concrete appointment proposal.
//!
//! The upstream extraction step (out of scope here) reduces a free-text
//! request to structured fields. This module consumes that output, resolves
//! the search start from the request's hints, runs the slot finder, and
//! combines the result with the request's metadata so the caller can
//! materialize a booking record.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::availability::WorkSchedule;
use crate::error::Result;
use crate::finder::{find_slot, Booking, Slot};
use crate::preference::resolve_search_start;

/// Structured output of the extraction step, treated as already validated
/// apart from the duration.
///
/// Deserializes from the extraction schema's camelCase JSON; a `date` that is
/// not a well-formed `YYYY-MM-DD` is rejected at the serde boundary rather
/// than corrected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub client_name: String,
    /// Requested appointment length in minutes, must be positive.
    pub duration: i64,
    /// Reason for the appointment (e.g. "consulta", "corte de pelo").
    pub task: String,
    /// Preferred calendar date; search begins from the current date if absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Coarse time-of-day hint (e.g. "tarde", "por la mañana").
    #[serde(default)]
    pub time_preference: Option<String>,
}

/// A found slot combined with the request's metadata, ready for the caller to
/// materialize a booking record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub client_name: String,
    pub task: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Resolve the search start from the request's hints and find the earliest
/// open slot.
///
/// # Returns
///
/// `Ok(Some(proposal))` with the earliest fit, or `Ok(None)` when no slot
/// exists within the search horizon — the caller-facing "no availability"
/// signal.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidDuration`](crate::ScheduleError::InvalidDuration)
/// if the request's duration is not positive.
pub fn propose(
    request: &BookingRequest,
    now: NaiveDateTime,
    bookings: &[Booking],
    schedule: &WorkSchedule,
) -> Result<Option<Proposal>> {
    let search_start = resolve_search_start(
        now,
        request.date,
        request.time_preference.as_deref(),
        schedule,
    );

    let slot = find_slot(search_start, now, bookings, schedule, request.duration)?;

    Ok(slot.map(|Slot { start, end }| Proposal {
        client_name: request.client_name.clone(),
        task: request.task.clone(),
        start,
        end,
    }))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn schedule() -> WorkSchedule {
        WorkSchedule::new(
            [false, true, true, true, true, true, false],
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        )
        .unwrap()
    }

    /// Wednesday, August 26, 2026 at 10:00.
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 26)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn request(duration: i64) -> BookingRequest {
        BookingRequest {
            client_name: "Juan Pérez".to_string(),
            duration,
            task: "Consulta".to_string(),
            date: None,
            time_preference: None,
        }
    }

    #[test]
    fn test_propose_same_day() {
        let proposal = propose(&request(60), now(), &[], &schedule())
            .unwrap()
            .unwrap();
        assert_eq!(proposal.client_name, "Juan Pérez");
        assert_eq!(proposal.task, "Consulta");
        assert_eq!(proposal.start, now());
        assert_eq!(proposal.end, now() + chrono::Duration::minutes(60));
    }

    #[test]
    fn test_propose_respects_date_hint() {
        let mut req = request(30);
        req.date = NaiveDate::from_ymd_opt(2026, 8, 28);
        let proposal = propose(&req, now(), &[], &schedule()).unwrap().unwrap();
        // Friday at window start — the hint's midnight is before work hours
        assert_eq!(
            proposal.start,
            NaiveDate::from_ymd_opt(2026, 8, 28)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_propose_invalid_duration_is_rejected() {
        assert!(propose(&request(0), now(), &[], &schedule()).is_err());
    }

    #[test]
    fn test_request_deserializes_from_extraction_json() {
        let json = r#"{
            "clientName": "María García",
            "duration": 45,
            "task": "Revisión",
            "date": "2026-09-01",
            "timePreference": "por la tarde"
        }"#;
        let req: BookingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.client_name, "María García");
        assert_eq!(req.duration, 45);
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2026, 9, 1));
        assert_eq!(req.time_preference.as_deref(), Some("por la tarde"));
    }

    #[test]
    fn test_request_hint_fields_are_optional() {
        let json = r#"{"clientName": "Juan", "duration": 30, "task": "Consulta"}"#;
        let req: BookingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.date, None);
        assert_eq!(req.time_preference, None);
    }

    #[test]
    fn test_malformed_date_hint_is_rejected_not_corrected() {
        let json = r#"{"clientName": "Juan", "duration": 30, "task": "Consulta", "date": "mañana"}"#;
        let result: std::result::Result<BookingRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_propose_flows_preference_into_finder() {
        // "tarde" on a free future day: search start resolves to 14:00, but
        // the finder scans that date from the window start
        let mut req = request(30);
        req.date = NaiveDate::from_ymd_opt(2026, 8, 27);
        req.time_preference = Some("tarde".to_string());
        let proposal = propose(&req, now(), &[], &schedule()).unwrap().unwrap();
        assert_eq!(proposal.start.date(), NaiveDate::from_ymd_opt(2026, 8, 27).unwrap());
    }
}
