use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorises household activity for budgeting and reporting.
///
/// Categories are referenced by allocations and transactions; they are
/// archived via the `hidden` flag rather than deleted while referenced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub household_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
}

impl Category {
    pub fn new(household_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            household_id,
            name: name.into(),
            hidden: false,
        }
    }

    pub fn archive(&mut self) {
        self.hidden = true;
    }
}
