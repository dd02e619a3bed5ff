//! Expense ledger domain models and the aggregate exposing its operations.

pub mod draft;
pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use draft::ExpenseDraft;
pub use expense::{Category, Expense};
pub use ledger::ExpenseLedger;
