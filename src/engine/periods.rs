use chrono::{Datelike, Duration, NaiveDate};
use tracing::error;

use crate::domain::Budget;
use crate::errors::EngineError;

/// Finds the unique period whose `[period_start, next_start)` interval
/// contains `date`.
///
/// Two matches mean the period set is corrupt; the resolver fails with
/// [`EngineError::AmbiguousPeriod`] rather than guessing.
pub fn find_period_for_date(
    periods: &[Budget],
    date: NaiveDate,
) -> Result<Option<&Budget>, EngineError> {
    let mut matches = periods.iter().filter(|period| period.contains(date));
    let first = match matches.next() {
        Some(period) => period,
        None => return Ok(None),
    };
    if let Some(second) = matches.next() {
        error!(
            "date {} falls inside overlapping periods {} and {}",
            date, first.id, second.id
        );
        return Err(EngineError::AmbiguousPeriod {
            date,
            first: first.id,
            second: second.id,
        });
    }
    Ok(Some(first))
}

/// First calendar day of the month following `date`'s month.
///
/// Repeated application walks month starts without drift regardless of
/// month length.
pub fn next_monthly_boundary(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// End boundary of a fixed-duration custom period, in calendar days.
pub fn custom_period_end(start: NaiveDate, duration_days: u32) -> Result<NaiveDate, EngineError> {
    if duration_days == 0 {
        return Err(EngineError::InvalidPeriod(
            "custom period duration must be at least one day".into(),
        ));
    }
    Ok(start + Duration::days(duration_days as i64))
}

/// How far `now` sits through `[start, end)`, as an integer percent.
pub fn progress(start: NaiveDate, end: NaiveDate, now: NaiveDate) -> u8 {
    if now < start || end <= start {
        return 0;
    }
    if now >= end {
        return 100;
    }
    let total = (end - start).num_days();
    let elapsed = (now - start).num_days();
    ((elapsed * 100 + total / 2) / total) as u8
}
