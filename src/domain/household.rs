use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Root owner of all financial data; identity only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Household {
    pub id: Uuid,
    pub name: String,
}

impl Household {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
