//! Core runtime for roster: field values, records, the record store,
//! dynamic field descriptors, form controls, validation rules, filtering,
//! and JSON import/export.

pub mod field;
pub mod filter;
pub mod form;
pub mod io;
pub mod obs;
pub mod record;
pub mod store;
pub mod validate;
pub mod value;

///
/// CONSTANTS
///

/// Departments offered by the base form's select control.
pub const DEPARTMENTS: &[&str] = &["HSC/Diploma/UG/PG", "Government"];

/// Department whose selection makes the conditional id-proof field visible.
pub const GOVERNMENT_DEPARTMENT: &str = "Government";

///
/// Prelude
///
/// Domain vocabulary only; errors and helpers stay one module down.
///

pub mod prelude {
    pub use crate::{
        field::{FieldDescriptor, FieldDraft, FieldKind, FieldRegistry},
        form::Control,
        record::{Record, RecordId},
        store::RecordStore,
        value::Value,
    };
}
