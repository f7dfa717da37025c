use super::*;

use log::debug;

/// Process-local store with the same contract as the SQLite one:
/// insertion order, ids counting up from 1, never reused.
pub struct MemStore {
    data: Vec<Contact>,
    next_id: i64,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            next_id: 1,
        }
    }

    pub fn iter(&self) -> MemStoreIter<'_> {
        MemStoreIter {
            inner: &self.data,
            idx: 0,
        }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.data.iter().position(|c| c.id == id)
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MemStoreIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for MemStoreIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some(contact)
    }
}

impl ContactStore for MemStore {
    fn initialize(&mut self) -> Result<(), AppError> {
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.iter().cloned().collect())
    }

    fn create(&mut self, draft: &ContactDraft) -> Result<Contact, AppError> {
        draft.validate()?;

        let contact = draft.clone().into_contact(self.next_id);
        self.next_id += 1;
        self.data.push(contact.clone());

        debug!("Created contact {} in memory", contact.id);
        Ok(contact)
    }

    fn update(&mut self, id: i64, draft: &ContactDraft) -> Result<bool, AppError> {
        draft.validate()?;

        match self.position(id) {
            Some(index) => {
                self.data[index] = draft.clone().into_contact(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: i64) -> Result<bool, AppError> {
        match self.position(id) {
            Some(index) => {
                self.data.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn close(self: Box<Self>) -> Result<(), AppError> {
        Ok(())
    }

    fn medium(&self) -> &str {
        "memory"
    }
}
