use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

///
/// CONSTANTS
///

/// Key prefix marking a user-added dynamic field on a record.
pub const CUSTOM_FIELD_PREFIX: &str = "customField_";

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_DEPARTMENT: &str = "department";
pub const FIELD_QUALIFICATION: &str = "qualification";

/// Conditional field shown only for the government department.
pub const FIELD_ID_PROOF: &str = "idProof";

/// Fields every record carries once it has passed through the form.
pub const BASE_FIELDS: &[&str] = &[
    FIELD_NAME,
    FIELD_EMAIL,
    FIELD_DEPARTMENT,
    FIELD_QUALIFICATION,
];

///
/// RecordId
///
/// Unique within the store at all times; assigned from a monotone counter
/// and never reused after deletion. Imported records missing an id default
/// to zero, since imports are taken without structural validation.
///

#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub struct RecordId(u64);

impl RecordId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Record
///
/// One table row: an id plus a flat field-name → value map. Base fields
/// and `customField_*` keys live side by side in the same map; only the
/// key prefix distinguishes them.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: RecordId,

    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    #[must_use]
    pub const fn new(id: RecordId, fields: BTreeMap<String, Value>) -> Self {
        Self { id, fields }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Keys of the record's dynamic fields, in map order.
    pub fn custom_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|key| key.starts_with(CUSTOM_FIELD_PREFIX))
    }

    /// Case-insensitive substring match over every field value, the id
    /// included. `needle` must already be lower-cased; an empty needle
    /// matches every record.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        if self.id.to_string().contains(needle) {
            return true;
        }

        self.fields.values().any(|value| {
            value
                .search_text()
                .is_some_and(|text| text.to_lowercase().contains(needle))
        })
    }
}

/// Record key a dynamic field binds to: the custom prefix plus the label
/// with spaces replaced by underscores.
#[must_use]
pub fn custom_key(label: &str) -> String {
    format!("{CUSTOM_FIELD_PREFIX}{}", label.replace(' ', "_"))
}

/// Label recovered from a custom field key: prefix stripped, underscores
/// back to spaces. None when the key is not a custom field.
#[must_use]
pub fn custom_label(key: &str) -> Option<String> {
    key.strip_prefix(CUSTOM_FIELD_PREFIX)
        .map(|rest| rest.replace('_', " "))
}
