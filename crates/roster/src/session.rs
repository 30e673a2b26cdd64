use roster_core::{
    DEPARTMENTS, GOVERNMENT_DEPARTMENT,
    field::{FieldDraft, FieldError, FieldRegistry},
    form::Control,
    record::{
        FIELD_DEPARTMENT, FIELD_EMAIL, FIELD_ID_PROOF, FIELD_NAME, FIELD_QUALIFICATION, Record,
        RecordId,
    },
    validate::{Issues, RecordRules},
    value::Value,
};
use std::collections::BTreeMap;

///
/// FormSession
///
/// Ephemeral state of one open add/edit transaction. Created when the add
/// or update action opens the form, destroyed on submit or cancel. Edit
/// sessions reconstruct their dynamic fields from the record's
/// `customField_*` keys; that reconstruction is lossy, so a checkbox or
/// select custom field comes back as plain text on re-edit.
///

#[derive(Clone, Debug)]
pub struct FormSession {
    editing: Option<RecordId>,
    values: BTreeMap<String, Value>,
    fields: FieldRegistry,
    rules: RecordRules,
}

impl FormSession {
    /// Open for a new record: no target, empty values, empty registry.
    #[must_use]
    pub fn add() -> Self {
        Self {
            editing: None,
            values: BTreeMap::new(),
            fields: FieldRegistry::new(),
            rules: RecordRules::base(),
        }
    }

    /// Open for an existing record: values seeded from the record, dynamic
    /// fields reconstructed from its custom keys.
    #[must_use]
    pub fn edit(record: &Record) -> Self {
        Self {
            editing: Some(record.id),
            values: record.fields.clone(),
            fields: FieldRegistry::from_record(record),
            rules: RecordRules::base(),
        }
    }

    #[must_use]
    pub const fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    #[must_use]
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Record one control change.
    pub fn set_value(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    /// The in-progress department selection; empty until one is picked.
    #[must_use]
    pub fn department(&self) -> &str {
        self.values
            .get(FIELD_DEPARTMENT)
            .and_then(Value::as_text)
            .unwrap_or_default()
    }

    /// Live conditional: evaluated against the in-progress value, not the
    /// seed, so changing department mid-edit toggles the field at once.
    #[must_use]
    pub fn id_proof_visible(&self) -> bool {
        self.department() == GOVERNMENT_DEPARTMENT
    }

    #[must_use]
    pub const fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    /// Validate and append a dynamic field; the registry is unchanged on
    /// error and the message is shown inline.
    pub fn add_field(&mut self, draft: FieldDraft) -> Result<(), FieldError> {
        self.fields.add(draft)
    }

    /// Remove the dynamic field at `index`; later indices shift down.
    pub fn remove_field(&mut self, index: usize) {
        self.fields.remove(index);
    }

    /// The full form, in render order: base fields, the conditional
    /// id-proof row when visible, then the dynamic fields.
    #[must_use]
    pub fn form_fields(&self) -> Vec<FormField> {
        let mut rows = vec![
            self.text_row(FIELD_NAME, "Name"),
            self.text_row(FIELD_EMAIL, "Email"),
            FormField {
                name: FIELD_DEPARTMENT.to_string(),
                label: "Department".to_string(),
                control: Control::Select {
                    options: DEPARTMENTS.iter().map(ToString::to_string).collect(),
                    selected: self
                        .values
                        .get(FIELD_DEPARTMENT)
                        .and_then(Value::as_text)
                        .filter(|d| DEPARTMENTS.contains(d))
                        .map(ToOwned::to_owned),
                },
                required_mark: true,
                dynamic_index: None,
            },
            self.text_row(FIELD_QUALIFICATION, "Highest Qualification"),
        ];

        if self.id_proof_visible() {
            // marked required in the form; no rule enforces it
            rows.push(self.text_row(FIELD_ID_PROOF, "ID Proof"));
        }

        for (index, descriptor) in self.fields.iter().enumerate() {
            let key = descriptor.storage_key();
            rows.push(FormField {
                control: Control::bind(descriptor, self.values.get(&key)),
                name: key,
                label: descriptor.label.clone(),
                required_mark: false,
                dynamic_index: Some(index),
            });
        }

        rows
    }

    /// Run the declarative rule set against the current values.
    #[must_use]
    pub fn validate(&self) -> Issues {
        self.rules.validate(&self.values)
    }

    /// The value map a successful submit hands to the store: everything
    /// currently set, minus idProof when the department no longer shows
    /// it. A hidden field's stale value must not survive the submit.
    #[must_use]
    pub fn submitted_values(&self) -> BTreeMap<String, Value> {
        let mut values = self.values.clone();
        if !self.id_proof_visible() {
            values.remove(FIELD_ID_PROOF);
        }

        values
    }

    fn text_row(&self, name: &str, label: &str) -> FormField {
        FormField {
            name: name.to_string(),
            label: label.to_string(),
            control: Control::TextInput {
                value: self
                    .values
                    .get(name)
                    .and_then(Value::as_text)
                    .unwrap_or_default()
                    .to_string(),
            },
            required_mark: true,
            dynamic_index: None,
        }
    }
}

///
/// FormField
///
/// One renderable form row: the record key it binds to, its label, the
/// bound control, and presentation flags.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub control: Control,
    pub required_mark: bool,

    /// Registry position for dynamic fields; drives the remove button.
    pub dynamic_index: Option<usize>,
}

///
/// SubmitOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated(RecordId),
}

impl SubmitOutcome {
    #[must_use]
    pub const fn id(self) -> RecordId {
        match self {
            Self::Created(id) | Self::Updated(id) => id,
        }
    }
}
