use std::collections::HashSet;

use tracing::warn;

use crate::domain::{Allocation, Budget, RolloverPolicy};
use crate::errors::EngineError;
use crate::money;

/// Result of closing a period into its successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolloverOutcome {
    /// Proposed allocation set for the newly opened period. Allocations
    /// already present keep their relative order; synthesized ones append.
    pub allocations: Vec<Allocation>,
    /// The closed period's allocations with `carry_out` filled in for the
    /// audit trail.
    pub closed: Vec<Allocation>,
    /// Aggregate of `ToReserve` remainders; the caller credits it to the
    /// new period's `carry_in`.
    pub reserve_carry: i64,
}

/// Merges the closed period's unspent remainders into the new period per
/// each allocation's rollover policy.
///
/// Inputs are never mutated. Any invalid allocation or a malformed period
/// pair aborts the rollover before any output is produced.
pub fn roll_over(
    previous: &Budget,
    previous_allocations: &[Allocation],
    next: &Budget,
    next_allocations: &[Allocation],
) -> Result<RolloverOutcome, EngineError> {
    validate_transition(previous, next)?;
    validate_allocations(previous, previous_allocations)?;
    validate_allocations(next, next_allocations)?;

    let mut merged: Vec<Allocation> = next_allocations.to_vec();
    let mut closed: Vec<Allocation> = Vec::with_capacity(previous_allocations.len());
    let mut reserve_carry = 0i64;
    let mut forfeited = 0i64;

    for allocation in previous_allocations {
        let mut audit = allocation.clone();
        audit.carry_out = 0;
        let remainder = allocation.remainder();
        if remainder == 0 {
            closed.push(audit);
            continue;
        }
        match allocation.rollover {
            RolloverPolicy::SameCategory => {
                match merged
                    .iter_mut()
                    .find(|candidate| candidate.category_id == allocation.category_id)
                {
                    Some(existing) => {
                        existing.planned = money::checked_add(existing.planned, remainder)?;
                    }
                    None => {
                        // A rolled percent allocation becomes fixed: only the
                        // absolute remainder carries, never a renewed share of
                        // future income.
                        merged.push(Allocation::new_fixed(
                            next.id,
                            allocation.category_id,
                            remainder,
                            RolloverPolicy::SameCategory,
                        ));
                    }
                }
                audit.carry_out = remainder;
            }
            RolloverPolicy::ToReserve => {
                reserve_carry = money::checked_add(reserve_carry, remainder)?;
                audit.carry_out = remainder;
            }
            RolloverPolicy::None => {
                forfeited = money::checked_add(forfeited, remainder)?;
            }
        }
        closed.push(audit);
    }

    if forfeited > 0 {
        warn!(
            "rollover from period {} forfeited {} minor units",
            previous.id, forfeited
        );
    }

    Ok(RolloverOutcome {
        allocations: merged,
        closed,
        reserve_carry,
    })
}

fn validate_transition(previous: &Budget, next: &Budget) -> Result<(), EngineError> {
    if previous.household_id != next.household_id {
        return Err(EngineError::InvalidPeriod(
            "periods belong to different households".into(),
        ));
    }
    if next.period_start < previous.next_start {
        return Err(EngineError::InvalidPeriod(format!(
            "period {} starts before period {} ends",
            next.id, previous.id
        )));
    }
    Ok(())
}

fn validate_allocations(budget: &Budget, allocations: &[Allocation]) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for allocation in allocations {
        allocation.validate()?;
        if allocation.budget_id != budget.id {
            return Err(EngineError::InvalidAllocation(format!(
                "allocation {} does not belong to budget {}",
                allocation.id, budget.id
            )));
        }
        if !seen.insert(allocation.category_id) {
            return Err(EngineError::InvalidAllocation(format!(
                "budget {} holds two allocations for category {}",
                budget.id, allocation.category_id
            )));
        }
    }
    Ok(())
}
