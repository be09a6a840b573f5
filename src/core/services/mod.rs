pub mod budget_service;
pub mod category_service;
pub mod ledger_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use ledger_service::LedgerService;

use crate::errors::EngineError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{0}")]
    Invalid(String),
}
