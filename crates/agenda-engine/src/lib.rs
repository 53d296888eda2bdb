//! # agenda-engine
//!
//! Deterministic availability computation for a personal appointment
//! assistant.
//!
//! Given a professional's recurring weekly work schedule, a set of existing
//! bookings, a requested duration, and an optional coarse time preference,
//! the engine locates the earliest legal, non-conflicting time slot. It is a
//! pure computation library: no I/O, no system clock access (the caller
//! injects "now"), no mutation of its inputs, and it is safe to call
//! concurrently on immutable snapshots. All instants are naive local
//! datetimes in one fixed zone.
//!
//! ## Modules
//!
//! - [`availability`] — Weekly work schedule: workable weekdays and the daily work window
//! - [`preference`] — Resolve a search-start instant from date and time-of-day hints
//! - [`finder`] — Earliest-fit slot search over a 30-day horizon
//! - [`intake`] — Structured booking request → appointment proposal
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod finder;
pub mod intake;
pub mod preference;

pub use availability::WorkSchedule;
pub use error::{Result, ScheduleError};
pub use finder::{find_slot, Booking, Slot, SEARCH_HORIZON_DAYS};
pub use intake::{propose, BookingRequest, Proposal};
pub use preference::resolve_search_start;
