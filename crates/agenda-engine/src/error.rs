//! Error types for agenda-engine operations.

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid work window: start {start} is not before end {end}")]
    InvalidWorkWindow { start: NaiveTime, end: NaiveTime },

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(i64),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
