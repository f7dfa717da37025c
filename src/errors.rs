use core::fmt;

#[derive(Debug)]
pub enum AppError {
    StoreUnavailable(String),
    StoreRead(rusqlite::Error),
    StoreWrite(rusqlite::Error),
    Validation(String),
    NotFound(String),
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    /// A CSV import that stopped at `row` (1-based, header included) after
    /// `imported` contacts were already committed.
    ImportStopped {
        row: usize,
        imported: u64,
        reason: Box<AppError>,
    },
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl AppError {
    /// Fatal errors stop the application; everything else is reported once
    /// and the caller carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::StoreUnavailable(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::StoreUnavailable(reason) => {
                write!(f, "Contact store unavailable: {}", reason)
            }
            AppError::StoreRead(e) => {
                write!(f, "Failed to load contacts: {}", e)
            }
            AppError::StoreWrite(e) => {
                write!(f, "Failed to save contact: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "JSON error: {}", e)
            }
            AppError::ImportStopped { row, imported, reason } => {
                write!(
                    f,
                    "Import stopped at row {} after {} contacts were imported: {}",
                    row, imported, reason
                )
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::StoreRead(e) | AppError::StoreWrite(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Csv(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::ImportStopped { reason, .. } => Some(reason.as_ref()),
            _ => None,
        }
    }
}
