//! JSON export and the two-phase file import.
//!
//! The browser file read is a single-shot asynchronous operation: metadata
//! is available before the read starts, the contents arrive in one
//! completion callback, and a started read is not cancelable. Import
//! mirrors that as two phases — `PendingImport::check` runs the metadata
//! gate, `complete` consumes the delivered bytes.

use crate::record::Record;
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Suggested download name for exports.
pub const EXPORT_FILE_NAME: &str = "data.json";

/// The only MIME type accepted for imports.
pub const IMPORT_MIME: &str = "application/json";

/// Upload size cap for imports.
pub const MAX_IMPORT_BYTES: u64 = 5 * 1024 * 1024;

///
/// ExportError
///

#[derive(Debug, ThisError)]
pub enum ExportError {
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Pretty-print the record list as the data.json payload (2-space
/// indentation, no version marker).
pub fn export_json(records: &[Record]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

///
/// ImportError
///
/// Surfaced as a blocking alert; the record store is left untouched.
/// Messages are the user-visible alert texts.
///

#[derive(Debug, ThisError)]
pub enum ImportError {
    #[error("Please upload a valid JSON file.")]
    WrongType { mime: String },

    #[error("File size should not exceed 5 MB.")]
    TooLarge { size: u64 },

    #[error("Error parsing JSON file.")]
    Parse,
}

///
/// FileMeta
///
/// What the browser knows about a chosen file before reading it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

///
/// PendingImport
///
/// An import whose metadata checks passed and whose read is in flight.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingImport {
    meta: FileMeta,
}

impl PendingImport {
    /// Phase one: gate on metadata before any bytes are read.
    pub fn check(meta: FileMeta) -> Result<Self, ImportError> {
        if meta.mime != IMPORT_MIME {
            return Err(ImportError::WrongType { mime: meta.mime });
        }
        if meta.size > MAX_IMPORT_BYTES {
            return Err(ImportError::TooLarge { size: meta.size });
        }

        Ok(Self { meta })
    }

    #[must_use]
    pub const fn meta(&self) -> &FileMeta {
        &self.meta
    }

    /// Phase two: parse the delivered contents. The parsed records are
    /// taken without structural validation.
    pub fn complete(self, bytes: &[u8]) -> Result<Vec<Record>, ImportError> {
        serde_json::from_slice(bytes).map_err(|_| ImportError::Parse)
    }
}
