use tracing::info;

use crate::domain::{Allocation, AllocationKind, Budget};
use crate::engine::{recalc_percent_allocations, roll_over};
use crate::money;

use super::ServiceResult;

/// Updated records produced by an actual-income change.
#[derive(Debug, Clone)]
pub struct IncomeChangeOutcome {
    pub budget: Budget,
    pub allocations: Vec<Allocation>,
}

/// Updated records produced by advancing from one period to the next.
#[derive(Debug, Clone)]
pub struct PeriodAdvanceOutcome {
    /// The new period with the reserve carry credited to `carry_in`.
    pub next: Budget,
    pub allocations: Vec<Allocation>,
    /// The closed period's allocations with `carry_out` recorded.
    pub closed: Vec<Allocation>,
}

/// Trigger points the surrounding application calls into.
///
/// Both operations return complete record sets for the caller to persist
/// in one transaction; nothing here touches storage.
pub struct BudgetService;

impl BudgetService {
    /// Re-derives percent allocations after `income_actual` changes.
    pub fn on_income_actual_changed(
        budget: &Budget,
        allocations: &[Allocation],
        new_actual_income: i64,
    ) -> ServiceResult<IncomeChangeOutcome> {
        let mut updated = budget.clone();
        updated.income_actual = new_actual_income;
        let allocations = recalc_percent_allocations(allocations, new_actual_income)?;
        Ok(IncomeChangeOutcome {
            budget: updated,
            allocations,
        })
    }

    /// Closes `previous` into `next`: rollover first, then a percent
    /// recalculation if the new period carries percent allocations.
    pub fn on_period_advance(
        previous: &Budget,
        previous_allocations: &[Allocation],
        next: &Budget,
        next_allocations: &[Allocation],
    ) -> ServiceResult<PeriodAdvanceOutcome> {
        let outcome = roll_over(previous, previous_allocations, next, next_allocations)?;

        let mut advanced = next.clone();
        advanced.carry_in = money::checked_add(advanced.carry_in, outcome.reserve_carry)?;

        let has_percent = outcome
            .allocations
            .iter()
            .any(|allocation| matches!(allocation.kind, AllocationKind::Percent { .. }));
        let allocations = if has_percent {
            recalc_percent_allocations(&outcome.allocations, advanced.income_actual)?
        } else {
            outcome.allocations
        };

        info!(
            "advanced household {} to period {} ({} allocations, {} reserve carry)",
            advanced.household_id,
            advanced.id,
            allocations.len(),
            outcome.reserve_carry
        );

        Ok(PeriodAdvanceOutcome {
            next: advanced,
            allocations,
            closed: outcome.closed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RolloverPolicy;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn income_change_recomputes_percent_allocations() {
        let household = Uuid::new_v4();
        let budget =
            Budget::new(household, sample_date(2024, 1, 1), sample_date(2024, 2, 1)).unwrap();
        let allocations = vec![
            Allocation::new_percent(budget.id, Uuid::new_v4(), 10, RolloverPolicy::SameCategory),
            Allocation::new_fixed(budget.id, Uuid::new_v4(), 50_000, RolloverPolicy::None),
        ];

        let outcome =
            BudgetService::on_income_actual_changed(&budget, &allocations, 12_000_000).unwrap();
        assert_eq!(outcome.budget.income_actual, 12_000_000);
        assert_eq!(outcome.allocations[0].planned, 1_200_000);
        assert_eq!(outcome.allocations[1].planned, 50_000);
    }

    #[test]
    fn period_advance_credits_reserve_and_recalculates() {
        let household = Uuid::new_v4();
        let previous =
            Budget::new(household, sample_date(2024, 1, 1), sample_date(2024, 2, 1)).unwrap();
        let mut next =
            Budget::new(household, sample_date(2024, 2, 1), sample_date(2024, 3, 1)).unwrap();
        next.income_actual = 10_000_000;

        let mut reserve = Allocation::new_fixed(
            previous.id,
            Uuid::new_v4(),
            2_000,
            RolloverPolicy::ToReserve,
        );
        reserve.spent = 500;
        let percent =
            Allocation::new_percent(next.id, Uuid::new_v4(), 25, RolloverPolicy::SameCategory);

        let outcome =
            BudgetService::on_period_advance(&previous, &[reserve], &next, &[percent]).unwrap();
        assert_eq!(outcome.next.carry_in, 1_500);
        assert_eq!(outcome.allocations[0].planned, 2_500_000);
        assert_eq!(outcome.closed[0].carry_out, 1_500);
    }

    #[test]
    fn period_advance_without_percent_skips_recalc() {
        let household = Uuid::new_v4();
        let previous =
            Budget::new(household, sample_date(2024, 1, 1), sample_date(2024, 2, 1)).unwrap();
        let next =
            Budget::new(household, sample_date(2024, 2, 1), sample_date(2024, 3, 1)).unwrap();
        let category = Uuid::new_v4();
        let mut old = Allocation::new_fixed(
            previous.id,
            category,
            4_000_000,
            RolloverPolicy::SameCategory,
        );
        old.spent = 2_500_000;

        let outcome = BudgetService::on_period_advance(&previous, &[old], &next, &[]).unwrap();
        assert_eq!(outcome.allocations.len(), 1);
        assert_eq!(outcome.allocations[0].planned, 1_500_000);
        assert_eq!(outcome.next.carry_in, 0);
    }
}
