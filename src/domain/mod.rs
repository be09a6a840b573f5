pub mod allocation;
pub mod budget;
pub mod category;
pub mod household;
pub mod transaction;

pub use allocation::{Allocation, AllocationKind, RolloverPolicy};
pub use budget::Budget;
pub use category::Category;
pub use household::Household;
pub use transaction::Transaction;
