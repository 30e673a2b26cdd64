use crate::record::{self, Record};
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// FieldKind
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Textarea,
    Checkbox,
    Radio,
    Select,
}

impl FieldKind {
    /// Kinds whose control is built from a user-supplied option list.
    #[must_use]
    pub const fn has_options(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio | Self::Select)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
        }
    }
}

///
/// FieldError
///
/// User input errors from the add-field form; messages are surfaced
/// verbatim next to the form.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum FieldError {
    #[error("Label is required.")]
    EmptyLabel,

    #[error("At least one option is required.")]
    NoOptions,
}

///
/// FieldDraft
///
/// Raw add-field input: the label and the comma-separated option string
/// exactly as typed.
///

#[derive(Clone, Debug, Default)]
pub struct FieldDraft {
    pub label: String,
    pub kind: FieldKind,
    pub options: String,
}

impl FieldDraft {
    #[must_use]
    pub fn new(label: impl Into<String>, kind: FieldKind, options: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            options: options.into(),
        }
    }

    /// Validate the draft into a descriptor. The label must survive a
    /// trim; option-bearing kinds need at least one non-empty option after
    /// the comma split. The label itself is kept as typed.
    pub fn build(self) -> Result<FieldDescriptor, FieldError> {
        if self.label.trim().is_empty() {
            return Err(FieldError::EmptyLabel);
        }

        let options = if self.kind.has_options() {
            let options: Vec<String> = self
                .options
                .split(',')
                .map(str::trim)
                .filter(|opt| !opt.is_empty())
                .map(ToOwned::to_owned)
                .collect();

            if options.is_empty() {
                return Err(FieldError::NoOptions);
            }
            options
        } else {
            Vec::new()
        };

        Ok(FieldDescriptor {
            label: self.label,
            kind: self.kind,
            options,
        })
    }
}

///
/// FieldDescriptor
///
/// Definition of one user-added dynamic field. Ephemeral: scoped to a
/// single form session, never persisted as its own entity; only the
/// resulting `customField_*` key on the record survives.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub label: String,
    pub kind: FieldKind,
    pub options: Vec<String>,
}

impl FieldDescriptor {
    /// Record key this field binds to.
    #[must_use]
    pub fn storage_key(&self) -> String {
        record::custom_key(&self.label)
    }

    /// Synthesize the descriptor recoverable from a stored custom key.
    /// The originating kind and options are not recoverable from a flat
    /// record, so everything comes back as a plain text field.
    #[must_use]
    pub fn from_custom_key(key: &str) -> Option<Self> {
        record::custom_label(key).map(|label| Self {
            label,
            kind: FieldKind::Text,
            options: Vec::new(),
        })
    }
}

///
/// FieldRegistry
///
/// Ordered dynamic fields of the active form session. Descriptors have no
/// identity beyond their position; removal shifts later indices down.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, PartialEq)]
pub struct FieldRegistry(Vec<FieldDescriptor>);

impl FieldRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Validate and append. On error the registry is unchanged.
    pub fn add(&mut self, draft: FieldDraft) -> Result<(), FieldError> {
        let descriptor = draft.build()?;
        self.0.push(descriptor);

        Ok(())
    }

    /// Remove by position; out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.0.len() {
            self.0.remove(index);
        }
    }

    /// Rebuild the registry from a record's custom keys, one text
    /// descriptor per key.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self(
            record
                .custom_keys()
                .filter_map(FieldDescriptor::from_custom_key)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record::RecordId, value::Value};
    use std::collections::BTreeMap;

    #[test]
    fn valid_add_grows_registry_by_one() {
        let mut registry = FieldRegistry::new();

        registry
            .add(FieldDraft::new(
                "Shirt Size",
                FieldKind::Select,
                " S , M ,, L ",
            ))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry[0].label, "Shirt Size");
        assert_eq!(registry[0].options, vec!["S", "M", "L"]);
    }

    #[test]
    fn blank_label_is_rejected_and_registry_unchanged() {
        let mut registry = FieldRegistry::new();

        let err = registry
            .add(FieldDraft::new("   ", FieldKind::Text, ""))
            .unwrap_err();

        assert_eq!(err, FieldError::EmptyLabel);
        assert_eq!(err.to_string(), "Label is required.");
        assert!(registry.is_empty());
    }

    #[test]
    fn option_kinds_require_a_surviving_option() {
        let mut registry = FieldRegistry::new();

        let err = registry
            .add(FieldDraft::new("Color", FieldKind::Checkbox, " , ,"))
            .unwrap_err();

        assert_eq!(err, FieldError::NoOptions);
        assert!(registry.is_empty());
    }

    #[test]
    fn text_kinds_ignore_the_option_string() {
        let mut registry = FieldRegistry::new();

        registry
            .add(FieldDraft::new("Notes", FieldKind::Textarea, "a, b"))
            .unwrap();

        assert!(registry[0].options.is_empty());
    }

    #[test]
    fn remove_shifts_later_indices() {
        let mut registry = FieldRegistry::new();
        registry
            .add(FieldDraft::new("A", FieldKind::Text, ""))
            .unwrap();
        registry
            .add(FieldDraft::new("B", FieldKind::Text, ""))
            .unwrap();

        registry.remove(0);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry[0].label, "B");

        // out of range: no-op
        registry.remove(5);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reconstruction_downgrades_everything_to_text() {
        let mut record =
            crate::record::Record::new(RecordId::new(1), BTreeMap::new());
        record.set("customField_Shirt_Size", Value::list(["M"]));
        record.set("name", "Vedang");

        let registry = FieldRegistry::from_record(&record);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry[0].label, "Shirt Size");
        assert_eq!(registry[0].kind, FieldKind::Text);
        assert!(registry[0].options.is_empty());
    }

    #[test]
    fn storage_key_roundtrips_through_reconstruction() {
        let descriptor = FieldDraft::new("Shirt Size", FieldKind::Text, "")
            .build()
            .unwrap();
        let key = descriptor.storage_key();

        assert_eq!(key, "customField_Shirt_Size");
        assert_eq!(
            FieldDescriptor::from_custom_key(&key).unwrap().label,
            "Shirt Size"
        );
    }
}
