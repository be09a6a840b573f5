pub mod periods;
pub mod recalc;
pub mod rollover;

pub use periods::{custom_period_end, find_period_for_date, next_monthly_boundary, progress};
pub use recalc::recalc_percent_allocations;
pub use rollover::{roll_over, RolloverOutcome};
