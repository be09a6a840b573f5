use uuid::Uuid;

use crate::config::{EngineConfig, PendingPolicy};
use crate::domain::{Allocation, Budget, Transaction};
use crate::errors::EngineError;
use crate::money;

use super::ServiceResult;

/// Aggregates the transaction feed into the figures the engine consumes.
///
/// A transaction is in scope for a budget when it is explicitly tagged to
/// that budget, or untagged and dated inside the budget's interval.
pub struct LedgerService;

impl LedgerService {
    /// Sum of expense magnitudes for the category within the budget's
    /// period, honoring the pending-transaction policy.
    pub fn spent_for_category(
        transactions: &[Transaction],
        budget: &Budget,
        category_id: Uuid,
        config: &EngineConfig,
    ) -> ServiceResult<i64> {
        let mut total = 0i64;
        for txn in transactions {
            if !Self::in_scope(txn, budget, config)
                || txn.category_id != Some(category_id)
                || !txn.is_expense()
            {
                continue;
            }
            let magnitude = txn
                .amount
                .checked_neg()
                .ok_or(EngineError::ArithmeticOverflow)?;
            total = money::checked_add(total, magnitude)?;
        }
        Ok(total)
    }

    /// Sum of income amounts recorded within the budget's period.
    pub fn actual_income(
        transactions: &[Transaction],
        budget: &Budget,
        config: &EngineConfig,
    ) -> ServiceResult<i64> {
        let incomes = transactions
            .iter()
            .filter(|txn| Self::in_scope(txn, budget, config) && txn.is_income())
            .map(|txn| txn.amount);
        Ok(money::checked_sum(incomes)?)
    }

    /// Returns the allocation set with `spent` refreshed from the feed.
    pub fn apply_spent(
        allocations: &[Allocation],
        transactions: &[Transaction],
        budget: &Budget,
        config: &EngineConfig,
    ) -> ServiceResult<Vec<Allocation>> {
        for allocation in allocations {
            allocation.validate()?;
        }
        let mut out = Vec::with_capacity(allocations.len());
        for allocation in allocations {
            let mut updated = allocation.clone();
            updated.spent =
                Self::spent_for_category(transactions, budget, allocation.category_id, config)?;
            out.push(updated);
        }
        Ok(out)
    }

    fn in_scope(txn: &Transaction, budget: &Budget, config: &EngineConfig) -> bool {
        if txn.pending && config.pending == PendingPolicy::Exclude {
            return false;
        }
        if txn.household_id != budget.household_id {
            return false;
        }
        match txn.budget_id {
            Some(id) => id == budget.id,
            None => budget.contains(txn.occurred_at.date_naive()),
        }
    }
}
