use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded movement of money for a household.
///
/// Signed minor units: positive is income, negative is expense. The
/// engine never mutates transactions; it only reads them to aggregate
/// spent and income figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub household_id: Uuid,
    pub category_id: Option<Uuid>,
    pub budget_id: Option<Uuid>,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
    #[serde(default)]
    pub pending: bool,
}

impl Transaction {
    pub fn new(
        household_id: Uuid,
        category_id: Option<Uuid>,
        amount: i64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            household_id,
            category_id,
            budget_id: None,
            amount,
            occurred_at,
            pending: false,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0
    }
}
