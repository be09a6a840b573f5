use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;

/// One budgeting interval `[period_start, next_start)` for a household.
///
/// Periods for the same household must not overlap; the resolver treats a
/// date covered by two periods as a data-integrity violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    pub id: Uuid,
    pub household_id: Uuid,
    pub period_start: NaiveDate,
    pub next_start: NaiveDate,
    pub income_planned: i64,
    pub income_actual: i64,
    /// Reserve carried in from the prior period's aggregate surplus.
    #[serde(default)]
    pub carry_in: i64,
}

impl Budget {
    pub fn new(
        household_id: Uuid,
        period_start: NaiveDate,
        next_start: NaiveDate,
    ) -> Result<Self, EngineError> {
        if next_start <= period_start {
            return Err(EngineError::InvalidPeriod(
                "period must end after it starts".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            household_id,
            period_start,
            next_start,
            income_planned: 0,
            income_actual: 0,
            carry_in: 0,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.period_start && date < self.next_start
    }
}
