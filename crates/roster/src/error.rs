use roster_core::{
    field::FieldError,
    io::{ExportError, ImportError},
    validate::Issues,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Facade-level error. Every variant scopes to the single in-progress
/// operation; nothing here is fatal to the editor.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

///
/// SubmitError
///

#[derive(Debug, ThisError)]
pub enum SubmitError {
    #[error("no form session is open")]
    Closed,

    /// Field-keyed issues for inline display; the session stays open.
    #[error("validation failed for {} field(s)", .0.len())]
    Invalid(Issues),
}
