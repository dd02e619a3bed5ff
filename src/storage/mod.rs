//! Persistence backends for the local expense slot.

pub mod json_backend;

pub use json_backend::JsonStorage;

use crate::errors::Result;
use crate::ledger::Expense;

/// Abstraction over the local key-value slot holding the expense list.
pub trait StorageBackend {
    /// Name of the slot the backend writes.
    fn slot(&self) -> &str;

    /// Mirrors the full expense list to the slot.
    fn save(&self, expenses: &[Expense]) -> Result<()>;

    /// Reads the slot back; an absent slot yields an empty list.
    ///
    /// The dashboard startup path never calls this (it always seeds from the
    /// mock list); it exists for library callers and tests.
    fn load(&self) -> Result<Vec<Expense>>;
}
