use super::*;

use crate::domain::contact::{Contact, ContactDraft};
use crate::domain::search::{self, SortKey};
use crate::store::{
    ContactStore,
    storage_port::{export_contacts_to_csv, read_contacts_from_csv},
};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Front-end view over a contact store.
///
/// The cached list is never authoritative: every mutation goes to the
/// store first and is followed by a full `list_all()` reload, so the
/// cache is always the last set the store returned.
pub struct ContactManager {
    contacts: Vec<Contact>,
    storage: Box<dyn ContactStore>,
    stale: bool,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        info!("Using {} contact store", storage.medium());

        let mut manager = Self {
            contacts: Vec::new(),
            storage,
            stale: true,
        };
        manager.refresh()?;
        Ok(manager)
    }

    /// Replace the cache with the store's current set. On a read fault the
    /// old cache stays but is flagged stale until the next good reload.
    pub fn refresh(&mut self) -> Result<(), AppError> {
        match self.storage.list_all() {
            Ok(contacts) => {
                self.contacts = contacts;
                self.stale = false;
                Ok(())
            }
            Err(e) => {
                warn!("Contact list reload failed, cache is stale: {}", e);
                self.stale = true;
                Err(e)
            }
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: i64) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn add(&mut self, draft: &ContactDraft) -> Result<Contact, AppError> {
        let contact = self.storage.create(draft)?;
        self.reload_after_write();
        Ok(contact)
    }

    pub fn edit(&mut self, id: i64, draft: &ContactDraft) -> Result<bool, AppError> {
        let matched = self.storage.update(id, draft)?;
        self.reload_after_write();
        Ok(matched)
    }

    pub fn remove(&mut self, id: i64) -> Result<bool, AppError> {
        let matched = self.storage.delete(id)?;
        self.reload_after_write();
        Ok(matched)
    }

    // The write is already committed. A failed reload only leaves the cache
    // stale, and `refresh` has logged it.
    fn reload_after_write(&mut self) {
        let _ = self.refresh();
    }

    pub fn search(&self, query: &str) -> Vec<&Contact> {
        search::filter_contacts(&self.contacts, query)
    }

    pub fn sorted(&self, key: SortKey, reverse: bool) -> Vec<&Contact> {
        search::sort_contacts(&self.contacts, key, reverse)
    }

    /// Create one contact per CSV row. Stops at the first row that fails;
    /// rows created before it stay and their count is carried in the error.
    pub fn import_contacts_from_csv(&mut self, path: Option<&str>) -> Result<(PathBuf, u64), AppError> {
        let (file_path, drafts) = read_contacts_from_csv(path)?;

        let mut counter: u64 = 0;
        let mut stopped = None;

        for (row, draft) in drafts.iter().enumerate() {
            if let Err(e) = self.storage.create(draft) {
                // +2: one for the header, one for 1-based rows
                warn!("Import stopped at row {} after {} contacts: {}", row + 2, counter, e);
                stopped = Some(AppError::ImportStopped {
                    row: row + 2,
                    imported: counter,
                    reason: Box::new(e),
                });
                break;
            }
            counter += 1;
        }

        self.reload_after_write();
        if let Some(e) = stopped {
            return Err(e);
        }

        debug!("Imported {} contacts from {}", counter, file_path.display());
        Ok((file_path, counter))
    }

    pub fn export_contacts_to_csv(&self, path: Option<&str>) -> Result<(PathBuf, u64), AppError> {
        export_contacts_to_csv(&self.contacts, path)
    }

    pub fn close(self) -> Result<(), AppError> {
        self.storage.close()
    }
}
