use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;

/// A category's planned/spent/carry bookkeeping within one budget period.
///
/// Unique per `(budget_id, category_id)`. `planned` is derived: the fixed
/// amount, or a computed share of the budget's actual income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Allocation {
    pub id: Uuid,
    pub budget_id: Uuid,
    pub category_id: Uuid,
    #[serde(flatten)]
    pub kind: AllocationKind,
    pub rollover: RolloverPolicy,
    pub planned: i64,
    pub spent: i64,
    /// Unspent remainder transferred out at period close; audit only.
    #[serde(default)]
    pub carry_out: i64,
}

/// How an allocation's planned figure is sourced.
///
/// The variant carries its own payload, so an allocation can never hold
/// both a fixed amount and a percentage, or neither.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AllocationKind {
    Fixed { amount: i64 },
    Percent { percent: u8 },
}

/// Rule governing how an unspent remainder transfers to the next period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RolloverPolicy {
    SameCategory,
    ToReserve,
    None,
}

impl Allocation {
    pub fn new_fixed(
        budget_id: Uuid,
        category_id: Uuid,
        amount: i64,
        rollover: RolloverPolicy,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            budget_id,
            category_id,
            kind: AllocationKind::Fixed { amount },
            rollover,
            planned: amount,
            spent: 0,
            carry_out: 0,
        }
    }

    pub fn new_percent(
        budget_id: Uuid,
        category_id: Uuid,
        percent: u8,
        rollover: RolloverPolicy,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            budget_id,
            category_id,
            kind: AllocationKind::Percent { percent },
            rollover,
            planned: 0,
            spent: 0,
            carry_out: 0,
        }
    }

    /// Checks the monetary invariants before any engine operation applies.
    pub fn validate(&self) -> Result<(), EngineError> {
        match self.kind {
            AllocationKind::Fixed { amount } if amount < 0 => {
                return Err(EngineError::InvalidAllocation(format!(
                    "fixed amount {} is negative",
                    amount
                )));
            }
            AllocationKind::Percent { percent } if percent > 100 => {
                return Err(EngineError::InvalidAllocation(format!(
                    "percent {} is outside 0..=100",
                    percent
                )));
            }
            _ => {}
        }
        if self.planned < 0 || self.spent < 0 || self.carry_out < 0 {
            return Err(EngineError::InvalidAllocation(
                "planned, spent, and carry_out must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Unspent remainder at period close; overspend never yields a debt.
    pub fn remainder(&self) -> i64 {
        (self.planned - self.spent).max(0)
    }
}
