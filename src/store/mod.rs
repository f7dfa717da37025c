pub mod memory;
pub mod sqlite;
pub mod storage_port;

use crate::prelude::{AppError, Contact, ContactDraft};

pub use memory::MemStore;
pub use sqlite::SqliteStore;

/// Sole reader and writer of the persisted contact set.
///
/// Every mutating call commits before it returns, so a following
/// `list_all()` always observes it. Failures are never retried here;
/// they go straight back to the caller.
pub trait ContactStore {
    /// Make sure the backing table exists. Safe to call more than once.
    fn initialize(&mut self) -> Result<(), AppError>;

    /// Every persisted contact, in insertion order.
    fn list_all(&self) -> Result<Vec<Contact>, AppError>;

    fn create(&mut self, draft: &ContactDraft) -> Result<Contact, AppError>;

    /// Returns `false` when no contact has this id.
    fn update(&mut self, id: i64, draft: &ContactDraft) -> Result<bool, AppError>;

    /// Returns `false` when no contact has this id.
    fn delete(&mut self, id: i64) -> Result<bool, AppError>;

    fn close(self: Box<Self>) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}
