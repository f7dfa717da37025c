pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactDraft},
    manager::ContactManager,
    search::{self, SortKey},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, MemStore, SqliteStore};
