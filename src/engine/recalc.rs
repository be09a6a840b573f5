use crate::domain::{Allocation, AllocationKind};
use crate::errors::EngineError;
use crate::money;

/// Recomputes the planned figure of every percent-typed allocation as an
/// integer share of `actual_income`; fixed allocations pass through
/// untouched.
///
/// Pure and idempotent: recalculating twice against the same income yields
/// the same result. Every allocation is validated before any planned
/// figure is replaced, so the output is all-or-nothing.
pub fn recalc_percent_allocations(
    allocations: &[Allocation],
    actual_income: i64,
) -> Result<Vec<Allocation>, EngineError> {
    for allocation in allocations {
        allocation.validate()?;
    }
    // Negative actual income would produce negative shares; it contributes
    // nothing instead.
    let base = actual_income.max(0);
    let mut out = Vec::with_capacity(allocations.len());
    for allocation in allocations {
        let mut updated = allocation.clone();
        if let AllocationKind::Percent { percent } = allocation.kind {
            updated.planned = money::percentage_of(base, percent)?;
        }
        out.push(updated);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RolloverPolicy;
    use uuid::Uuid;

    #[test]
    fn percent_allocations_take_floor_share_of_income() {
        let budget = Uuid::new_v4();
        let allocations = vec![
            Allocation::new_percent(budget, Uuid::new_v4(), 10, RolloverPolicy::SameCategory),
            Allocation::new_fixed(budget, Uuid::new_v4(), 4_000_000, RolloverPolicy::None),
        ];
        let recalced = recalc_percent_allocations(&allocations, 12_000_000).unwrap();
        assert_eq!(recalced[0].planned, 1_200_000);
        assert_eq!(recalced[1].planned, 4_000_000);
    }

    #[test]
    fn recalc_is_idempotent() {
        let budget = Uuid::new_v4();
        let allocations = vec![
            Allocation::new_percent(budget, Uuid::new_v4(), 33, RolloverPolicy::ToReserve),
            Allocation::new_percent(budget, Uuid::new_v4(), 7, RolloverPolicy::None),
        ];
        let once = recalc_percent_allocations(&allocations, 999_999).unwrap();
        let twice = recalc_percent_allocations(&once, 999_999).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn invalid_allocation_aborts_the_whole_recalc() {
        let budget = Uuid::new_v4();
        let mut bad = Allocation::new_fixed(budget, Uuid::new_v4(), 100, RolloverPolicy::None);
        bad.spent = -5;
        let allocations = vec![
            Allocation::new_percent(budget, Uuid::new_v4(), 10, RolloverPolicy::None),
            bad,
        ];
        assert!(recalc_percent_allocations(&allocations, 1_000).is_err());
    }

    #[test]
    fn negative_income_yields_zero_shares() {
        let budget = Uuid::new_v4();
        let allocations = vec![Allocation::new_percent(
            budget,
            Uuid::new_v4(),
            50,
            RolloverPolicy::None,
        )];
        let recalced = recalc_percent_allocations(&allocations, -2_000).unwrap();
        assert_eq!(recalced[0].planned, 0);
    }
}
