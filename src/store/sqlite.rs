use super::*;

use crate::helper;
use log::{debug, error, info};
use rusqlite::{Connection, Row, params};
use std::path::{Path, PathBuf};

const CREATE_CONTACTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    phone TEXT NOT NULL,
    email TEXT,
    address TEXT
)";

pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and make sure the
    /// contacts table exists. Any failure here is `StoreUnavailable`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();

        helper::create_file_parent(path).map_err(|e| {
            AppError::StoreUnavailable(format!("cannot prepare {}: {}", path.display(), e))
        })?;

        let conn = Connection::open(path).map_err(|e| {
            AppError::StoreUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;

        let mut store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.initialize()?;

        info!("Opened contact store at {}", path.display());
        Ok(store)
    }

    /// A store that lives only as long as the connection.
    pub fn open_in_memory() -> Result<Self, AppError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::StoreUnavailable(format!("cannot open in-memory db: {}", e)))?;

        let mut store = Self { conn, path: None };
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            address: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        })
    }
}

// Optional columns are stored as NULL when left blank.
fn nullable(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

impl ContactStore for SqliteStore {
    fn initialize(&mut self) -> Result<(), AppError> {
        self.conn
            .execute(CREATE_CONTACTS_TABLE, [])
            .map_err(|e| AppError::StoreUnavailable(format!("cannot create contacts table: {}", e)))?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, phone, email, address FROM contacts ORDER BY id")
            .map_err(AppError::StoreRead)?;

        let contacts = stmt
            .query_map([], Self::row_to_contact)
            .map_err(AppError::StoreRead)?
            .collect::<rusqlite::Result<Vec<Contact>>>()
            .map_err(AppError::StoreRead)?;

        debug!("Loaded {} contacts", contacts.len());
        Ok(contacts)
    }

    fn create(&mut self, draft: &ContactDraft) -> Result<Contact, AppError> {
        draft.validate()?;

        self.conn
            .execute(
                "INSERT INTO contacts (name, phone, email, address) VALUES (?1, ?2, ?3, ?4)",
                params![
                    draft.name(),
                    draft.phone(),
                    nullable(draft.email()),
                    nullable(draft.address())
                ],
            )
            .map_err(|e| {
                error!("Insert failed: {}", e);
                AppError::StoreWrite(e)
            })?;

        let id = self.conn.last_insert_rowid();
        debug!("Created contact {}", id);

        Ok(draft.clone().into_contact(id))
    }

    fn update(&mut self, id: i64, draft: &ContactDraft) -> Result<bool, AppError> {
        draft.validate()?;

        let changed = self
            .conn
            .execute(
                "UPDATE contacts SET name = ?1, phone = ?2, email = ?3, address = ?4 WHERE id = ?5",
                params![
                    draft.name(),
                    draft.phone(),
                    nullable(draft.email()),
                    nullable(draft.address()),
                    id
                ],
            )
            .map_err(|e| {
                error!("Update of contact {} failed: {}", id, e);
                AppError::StoreWrite(e)
            })?;

        debug!("Update of contact {} matched {} rows", id, changed);
        Ok(changed > 0)
    }

    fn delete(&mut self, id: i64) -> Result<bool, AppError> {
        let changed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![id])
            .map_err(|e| {
                error!("Delete of contact {} failed: {}", id, e);
                AppError::StoreWrite(e)
            })?;

        debug!("Delete of contact {} matched {} rows", id, changed);
        Ok(changed > 0)
    }

    fn close(self: Box<Self>) -> Result<(), AppError> {
        let store = *self;
        store.conn.close().map_err(|(_conn, e)| AppError::StoreWrite(e))?;
        info!("Closed contact store");
        Ok(())
    }

    fn medium(&self) -> &str {
        "sqlite"
    }
}
