use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Error type that captures engine failures.
///
/// Engine operations either return a complete result or one of these;
/// no partially applied allocation set ever escapes.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("date {date} falls inside overlapping periods {first} and {second}")]
    AmbiguousPeriod {
        date: NaiveDate,
        first: Uuid,
        second: Uuid,
    },
    #[error("monetary arithmetic overflow")]
    ArithmeticOverflow,
    #[error("invalid allocation: {0}")]
    InvalidAllocation(String),
    #[error("invalid period: {0}")]
    InvalidPeriod(String),
}
