//! roster: the state core of a browser-style dynamic record table.
//!
//! ## Crate layout
//! - `core`: values, records, the record store, dynamic field
//!   descriptors, form controls, validation rules, filtering, and JSON
//!   import/export (re-export of `roster-core`).
//! - `session`: the form-session state machine for one add/edit
//!   transaction.
//! - `editor`: the orchestrator a view layer drives, one method per UI
//!   event.
//! - `error`: the facade-level error type.
//!
//! The `prelude` mirrors the surface a view layer binds to.

pub use roster_core as core;

pub mod editor;
pub mod error;
pub mod session;

/// Workspace version re-export for downstream tooling.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        editor::Editor,
        error::{Error, SubmitError},
        session::{FormField, FormSession, SubmitOutcome},
    };
    pub use roster_core::{
        DEPARTMENTS, GOVERNMENT_DEPARTMENT,
        field::{FieldDescriptor, FieldDraft, FieldKind, FieldRegistry},
        filter::filter,
        form::Control,
        io::{EXPORT_FILE_NAME, FileMeta, MAX_IMPORT_BYTES, PendingImport},
        record::{Record, RecordId},
        store::RecordStore,
        validate::{Issues, RecordRules},
        value::Value,
    };
}
